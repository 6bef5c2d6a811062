//! Turn an HTML page into an [`Article`]: a title and a cleaned-up content tree.
//!
//! Parsing is done by scraper (html5ever). The content root is the first
//! `<article>`, else `<main>`, else `<body>`. Navigation, scripts and other
//! page furniture are left out, layout whitespace is dropped, and relative
//! `href`/`src` values are resolved against the page URL.

use std::io;

use hhh_core::{ArticleWriter, NodeId, NodeRef, Tree};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{node::Element, ElementRef, Html, Node as ScraperNode};
use url::Url;

use crate::Result;

/// Elements dropped together with their subtree
const NOISE_ELEMENTS: &[&str] = &[
    "script", "style", "noscript", "template", "nav", "header", "footer", "aside", "form",
    "iframe",
];

/// Candidate content roots, in order of preference
const CONTENT_ROOTS: &[&str] = &["article", "main", "body"];

/// Attributes holding URLs
const URL_ATTRIBUTES: &[&str] = &["href", "src"];

static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t\r\f]*\n\s*").expect("valid line break pattern"));
static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t\r\f]+").expect("valid space pattern"));

/// Readable content of a page
#[derive(Debug, Clone)]
pub struct Article {
    pub title: String,
    pub tree: Tree,
    pub root: NodeId,
}

impl Article {
    /// Parse a page and extract its content.
    pub fn parse(html: &str, base: Option<&Url>) -> Result<Self> {
        let document = Html::parse_document(html);
        let page = document.root_element();

        let title = find_first(page, &["title"])
            .map(|el| collapse(&el.text().collect::<String>()))
            .filter(|title| !title.is_empty())
            .or_else(|| {
                find_first(page, &["h1"]).map(|el| collapse(&el.text().collect::<String>()))
            })
            .unwrap_or_default();

        let content = find_first(page, CONTENT_ROOTS).unwrap_or(page);
        let (tree, root) = build_tree(content, base)?;

        Ok(Self { title, tree, root })
    }

    /// Root of the content tree
    pub fn root(&self) -> NodeRef<'_> {
        self.tree.node(self.root)
    }

    /// Render the article with the given writer
    pub fn write_to(&self, writer: &mut dyn ArticleWriter) -> io::Result<()> {
        writer.write(self.root(), &self.title)
    }
}

fn find_first<'a>(root: ElementRef<'a>, names: &[&str]) -> Option<ElementRef<'a>> {
    names.iter().find_map(|name| {
        root.descendants()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == *name)
    })
}

/// Copy the content subtree into a [`Tree`], without recursion.
fn build_tree(content: ElementRef<'_>, base: Option<&Url>) -> Result<(Tree, NodeId)> {
    let mut tree = Tree::new();
    let root = add_element(&mut tree, content.value(), base);

    let mut stack: Vec<_> = content.children().rev().map(|child| (child, root)).collect();
    while let Some((node, parent)) = stack.pop() {
        if !is_kept(node.value()) {
            continue;
        }
        let id = match node.value() {
            ScraperNode::Element(element) => {
                let id = add_element(&mut tree, element, base);
                stack.extend(node.children().rev().map(|child| (child, id)));
                id
            }
            ScraperNode::Text(text) => {
                let first = !node.prev_siblings().any(|s| is_kept(s.value()));
                let last = !node.next_siblings().any(|s| is_kept(s.value()));
                match clean_text(&text.text, first, last) {
                    Some(text) => tree.text(&text),
                    None => continue,
                }
            }
            ScraperNode::Comment(comment) => tree.other(&comment.comment),
            _ => continue,
        };
        tree.append_child(parent, id)?;
    }

    Ok((tree, root))
}

/// Whether a parsed node has a counterpart in the content tree
fn is_kept(node: &ScraperNode) -> bool {
    match node {
        ScraperNode::Element(element) => !NOISE_ELEMENTS.contains(&element.name()),
        ScraperNode::Text(_) | ScraperNode::Comment(_) => true,
        _ => false,
    }
}

fn add_element(tree: &mut Tree, element: &Element, base: Option<&Url>) -> NodeId {
    let attrs: Vec<(String, String)> = element
        .attrs()
        .map(|(name, value)| (name.to_string(), resolve_attr(name, value, base)))
        .collect();
    tree.element_with_attrs(
        element.name(),
        attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect(),
    )
}

fn resolve_attr(name: &str, value: &str, base: Option<&Url>) -> String {
    match base {
        Some(base) if !value.is_empty() && URL_ATTRIBUTES.contains(&name) => base
            .join(value)
            .map(String::from)
            .unwrap_or_else(|_| value.to_string()),
        _ => value.to_string(),
    }
}

/// Normalize whitespace in a text node; `None` when nothing readable is left.
///
/// Runs of spaces collapse to one space and any run containing a line break
/// collapses to a single newline. Whitespace-only nodes spanning lines are
/// layout and are dropped. The first and last child of a parent lose their
/// leading and trailing whitespace respectively.
fn clean_text(text: &str, first: bool, last: bool) -> Option<String> {
    if text.trim().is_empty() && text.contains('\n') {
        return None;
    }

    let text = LINE_BREAK.replace_all(text, "\n");
    let mut text: &str = &SPACES.replace_all(&text, " ");
    if first {
        text = text.trim_start();
    }
    if last {
        text = text.trim_end();
    }

    (!text.is_empty()).then(|| text.to_string())
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
