//! Read-only document tree consumed by the writers.
//!
//! Nodes live in an arena owned by [`Tree`] and are addressed by [`NodeId`].
//! Structure is expressed the DOM way: every node knows its parent, its
//! first child and its next sibling, so a walk never needs a call stack.
//! Any parser (scraper, html5ever, CDP, ...) can build this structure.

use crate::{Result, TreeError};

/// Node kinds the writers distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Tagged element with attributes and children
    Element,
    /// Literal text
    Text,
    /// Anything else (document, comment, doctype, ...)
    Other,
}

/// Index of a node inside its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    /// Tag name (lowercase) for elements, content for text nodes
    data: String,
    attrs: Vec<(String, String)>,
    parent: Option<NodeId>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
    next_sibling: Option<NodeId>,
}

impl NodeData {
    fn new(kind: NodeKind, data: String, attrs: Vec<(String, String)>) -> Self {
        Self {
            kind,
            data,
            attrs,
            parent: None,
            first_child: None,
            last_child: None,
            next_sibling: None,
        }
    }
}

/// Arena holding every node of a document.
///
/// Nodes are created detached and linked with [`Tree::append_child`], which
/// keeps the structure a finite, acyclic, rooted tree.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: Vec<NodeData>,
}

impl Tree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the arena
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Create a new detached element node
    pub fn element(&mut self, tag_name: &str) -> NodeId {
        self.push(NodeData::new(
            NodeKind::Element,
            tag_name.to_lowercase(),
            Vec::new(),
        ))
    }

    /// Create a new detached element node with attributes, kept in the given order
    pub fn element_with_attrs(&mut self, tag_name: &str, attrs: Vec<(&str, &str)>) -> NodeId {
        let attrs = attrs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.push(NodeData::new(
            NodeKind::Element,
            tag_name.to_lowercase(),
            attrs,
        ))
    }

    /// Create a new detached text node
    pub fn text(&mut self, content: &str) -> NodeId {
        self.push(NodeData::new(NodeKind::Text, content.to_string(), Vec::new()))
    }

    /// Create a new detached node of another kind (comment, document, ...)
    pub fn other(&mut self, data: &str) -> NodeId {
        self.push(NodeData::new(NodeKind::Other, data.to_string(), Vec::new()))
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(data);
        id
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// The child must be detached, and must not be `parent` itself or one of
    /// its ancestors. Text nodes cannot take children.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.get(parent)?;
        self.get(child)?;

        if parent == child {
            return Err(TreeError::Cycle(child.0));
        }
        if self.nodes[parent.0].kind == NodeKind::Text {
            return Err(TreeError::TextParent(parent.0));
        }
        if self.nodes[child.0].parent.is_some() {
            return Err(TreeError::AlreadyAttached(child.0));
        }
        let mut ancestor = self.nodes[parent.0].parent;
        while let Some(id) = ancestor {
            if id == child {
                return Err(TreeError::Cycle(child.0));
            }
            ancestor = self.nodes[id.0].parent;
        }

        match self.nodes[parent.0].last_child {
            Some(last) => self.nodes[last.0].next_sibling = Some(child),
            None => self.nodes[parent.0].first_child = Some(child),
        }
        self.nodes[parent.0].last_child = Some(child);
        self.nodes[child.0].parent = Some(parent);
        Ok(())
    }

    /// Borrow a node, failing if the id does not belong to this tree
    pub fn get(&self, id: NodeId) -> Result<NodeRef<'_>> {
        if id.0 < self.nodes.len() {
            Ok(NodeRef { tree: self, id })
        } else {
            Err(TreeError::UnknownNode(id.0))
        }
    }

    /// Iterate over every node in creation order
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_>> {
        (0..self.nodes.len()).map(move |i| NodeRef {
            tree: self,
            id: NodeId(i),
        })
    }

    /// Borrow a node created by this tree
    ///
    /// # Panics
    ///
    /// Panics if `id` was not created by this tree.
    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        assert!(id.0 < self.nodes.len(), "node {} is not in this tree", id.0);
        NodeRef { tree: self, id }
    }
}

/// A borrowed position in a [`Tree`].
///
/// Cheap to copy; navigation returns new cursors into the same tree.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a Tree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    fn data_ref(&self) -> &'a NodeData {
        &self.tree.nodes[self.id.0]
    }

    fn at(&self, id: Option<NodeId>) -> Option<NodeRef<'a>> {
        id.map(|id| NodeRef {
            tree: self.tree,
            id,
        })
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.data_ref().kind
    }

    /// Tag name for elements, text for text nodes
    pub fn data(&self) -> &'a str {
        &self.data_ref().data
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.kind() == NodeKind::Element
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        self.kind() == NodeKind::Text
    }

    /// Tag name of an element, `None` for other kinds
    pub fn tag_name(&self) -> Option<&'a str> {
        self.is_element().then(|| self.data())
    }

    /// Attributes in document order
    pub fn attrs(&self) -> &'a [(String, String)] {
        &self.data_ref().attrs
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.attrs()
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.at(self.data_ref().parent)
    }

    pub fn first_child(&self) -> Option<NodeRef<'a>> {
        self.at(self.data_ref().first_child)
    }

    pub fn next_sibling(&self) -> Option<NodeRef<'a>> {
        self.at(self.data_ref().next_sibling)
    }

    pub fn has_children(&self) -> bool {
        self.data_ref().first_child.is_some()
    }

    /// Iterate over direct children
    pub fn children(&self) -> Children<'a> {
        Children {
            next: self.first_child(),
        }
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self.kind() {
            NodeKind::Text => self.data().to_string(),
            _ => self.children().map(|child| child.text_content()).collect(),
        }
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .field("data", &self.data())
            .finish()
    }
}

/// Iterator over the children of a node, following `next_sibling` links.
pub struct Children<'a> {
    next: Option<NodeRef<'a>>,
}

impl<'a> Iterator for Children<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.next_sibling();
        Some(current)
    }
}
