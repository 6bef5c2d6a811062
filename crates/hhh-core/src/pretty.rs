//! Indented re-serialization of a document tree as HTML.
//!
//! One line per text node and per tag, two spaces per level. The walk is
//! iterative: a cursor into the tree plus a flag telling whether the cursor
//! just came back up from a child, so depth is not limited by the call stack.
//! Childless elements collapse to a self-closing tag, including non-void
//! ones such as an empty `<div/>`.

use std::io::{self, Write};

use crate::node::{NodeId, NodeRef};
use crate::writer::ArticleWriter;

const INDENT: &[u8] = b"  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Open,
    Close,
    SelfClosing,
}

/// Next move of the walk.
#[derive(Debug)]
enum Step<'a> {
    /// Enter the first child
    Descend(NodeRef<'a>),
    /// Leave the node for its next sibling
    Advance(NodeRef<'a>),
    /// Leave the last child for its parent
    Ascend(NodeRef<'a>),
    /// Leave the root
    Terminate,
}

fn step<'a>(cur: NodeRef<'a>, out: bool, root: NodeId) -> Step<'a> {
    if !out {
        if let Some(child) = cur.first_child() {
            return Step::Descend(child);
        }
    }
    // Never walk past the subtree we were given.
    if cur.id() == root {
        return Step::Terminate;
    }
    if let Some(next) = cur.next_sibling() {
        return Step::Advance(next);
    }
    match cur.parent() {
        Some(parent) => Step::Ascend(parent),
        None => Step::Terminate,
    }
}

/// Writes an article as indented HTML. The title is not part of the output.
pub struct HtmlWriter<W> {
    w: W,
}

impl<W: Write> HtmlWriter<W> {
    pub fn new(w: W) -> Self {
        Self { w }
    }

    pub fn get_ref(&self) -> &W {
        &self.w
    }

    pub fn into_inner(self) -> W {
        self.w
    }

    fn write_indent(&mut self, depth: usize) -> io::Result<()> {
        for _ in 0..depth {
            self.w.write_all(INDENT)?;
        }
        Ok(())
    }

    fn write_text(&mut self, depth: usize, text: &str) -> io::Result<()> {
        self.write_indent(depth)?;
        self.w.write_all(text.as_bytes())?;
        self.w.write_all(b"\n")
    }

    fn write_tag(&mut self, depth: usize, node: NodeRef<'_>, tag: Tag) -> io::Result<()> {
        self.write_indent(depth)?;
        if tag == Tag::Close {
            return writeln!(self.w, "</{}>", node.data());
        }

        write!(self.w, "<{}", node.data())?;
        for (key, value) in node.attrs() {
            write!(self.w, " {key}=\"{value}\"")?;
        }
        match tag {
            Tag::SelfClosing => self.w.write_all(b"/>\n"),
            _ => self.w.write_all(b">\n"),
        }
    }

    /// Close an element on the way out: a closing tag if its children were
    /// visited, a self-closing tag if it had none.
    fn leave(&mut self, depth: usize, node: NodeRef<'_>, out: bool) -> io::Result<()> {
        if !node.is_element() {
            return Ok(());
        }
        let tag = if out { Tag::Close } else { Tag::SelfClosing };
        self.write_tag(depth, node, tag)
    }
}

impl<W: Write> ArticleWriter for HtmlWriter<W> {
    fn write(&mut self, root: NodeRef<'_>, _title: &str) -> io::Result<()> {
        let mut cur = root;
        let mut out = false;
        let mut depth = 0usize;

        loop {
            if cur.is_text() {
                self.write_text(depth, cur.data())?;
            }

            match step(cur, out, root.id()) {
                Step::Descend(child) => {
                    if cur.is_element() {
                        self.write_tag(depth, cur, Tag::Open)?;
                    }
                    cur = child;
                    depth += 1;
                    out = false;
                }
                Step::Advance(next) => {
                    self.leave(depth, cur, out)?;
                    cur = next;
                    out = false;
                }
                Step::Ascend(parent) => {
                    self.leave(depth, cur, out)?;
                    cur = parent;
                    depth = depth.saturating_sub(1);
                    out = true;
                }
                Step::Terminate => {
                    self.leave(depth, cur, out)?;
                    break;
                }
            }
        }

        self.w.flush()
    }
}
