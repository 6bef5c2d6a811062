//! Markdown rendering of a document tree.
//!
//! Recursive descent over the tree. Each element is looked up in [`Rules`]
//! and its children are rendered with a [`RenderContext`] derived from the
//! parent's. Output goes straight to the sink; nothing is buffered.

use std::io::{self, Write};

use crate::node::{NodeKind, NodeRef};
use crate::rules::{RenderRule, Rules};
use crate::writer::ArticleWriter;

/// State handed down the recursion.
///
/// Entering a scope clones the context. The only mutation visible to
/// siblings is the list counter bump done by an ordered list item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct RenderContext {
    /// Prefix written after every newline
    indent: String,
    /// Next ordinal for a list item; 0 means bullets
    ordered_list_seq: u32,
}

impl RenderContext {
    fn append_indent(&self, indent: &str) -> Self {
        let mut ctx = self.clone();
        ctx.indent.push_str(indent);
        ctx
    }

    fn with_ordered_list_seq(&self, seq: u32) -> Self {
        let mut ctx = self.clone();
        ctx.ordered_list_seq = seq;
        ctx
    }
}

/// Writes an article as Markdown: a title heading, the rendered body, a trailing newline.
pub struct MarkdownWriter<W> {
    w: W,
    rules: Rules,
}

impl<W: Write> MarkdownWriter<W> {
    /// Create a writer using the built-in rules
    pub fn new(w: W) -> Self {
        Self::with_rules(w, Rules::new())
    }

    /// Create a writer with a custom rule table
    pub fn with_rules(w: W, rules: Rules) -> Self {
        Self { w, rules }
    }

    pub fn get_ref(&self) -> &W {
        &self.w
    }

    pub fn into_inner(self) -> W {
        self.w
    }

    fn write_node(
        &mut self,
        node: NodeRef<'_>,
        has_next: bool,
        ctx: &mut RenderContext,
    ) -> io::Result<()> {
        match node.kind() {
            NodeKind::Text => self.write_indented(node.data(), &ctx.indent),
            NodeKind::Element => self.write_element(node, has_next, ctx),
            NodeKind::Other => self.write_children(node, "", "", "", &ctx.indent, ctx.clone()),
        }
    }

    fn write_element(
        &mut self,
        node: NodeRef<'_>,
        has_next: bool,
        ctx: &mut RenderContext,
    ) -> io::Result<()> {
        let rule = self.rules.for_tag(node.data());
        let separator = if has_next { rule.separator.as_str() } else { "" };

        match rule.render {
            RenderRule::Heading(level) => {
                let prefix = format!("{} ", "#".repeat(usize::from(level)));
                self.write_children(node, &prefix, "", separator, &ctx.indent, ctx.clone())
            }
            RenderRule::Quote => self.write_children(
                node,
                "> ",
                "",
                separator,
                &ctx.indent,
                ctx.append_indent("> "),
            ),
            RenderRule::OrderedList => self.write_children(
                node,
                "",
                "",
                separator,
                &ctx.indent,
                ctx.with_ordered_list_seq(1),
            ),
            RenderRule::ListItem if ctx.ordered_list_seq == 0 => self.write_children(
                node,
                "- ",
                "",
                separator,
                &ctx.indent,
                ctx.append_indent("  "),
            ),
            RenderRule::ListItem => {
                let prefix = format!("{}. ", ctx.ordered_list_seq);
                self.write_children(
                    node,
                    &prefix,
                    "",
                    separator,
                    &ctx.indent,
                    ctx.append_indent("   "),
                )?;
                ctx.ordered_list_seq += 1;
                Ok(())
            }
            RenderRule::Strong => {
                self.write_children(node, " **", "** ", separator, &ctx.indent, ctx.clone())
            }
            RenderRule::Link => {
                let suffix = format!("]({}) ", node.attr("href").unwrap_or(""));
                self.write_children(node, " [", &suffix, separator, &ctx.indent, ctx.clone())
            }
            RenderRule::Image => self.write_image(node, separator, &ctx.indent),
            RenderRule::Transparent => {
                self.write_children(node, "", "", separator, &ctx.indent, ctx.clone())
            }
        }
    }

    /// Prefix, children, suffix, then the separator re-indented for the enclosing scope.
    fn write_children(
        &mut self,
        node: NodeRef<'_>,
        prefix: &str,
        suffix: &str,
        separator: &str,
        outer_indent: &str,
        mut ctx: RenderContext,
    ) -> io::Result<()> {
        self.w.write_all(prefix.as_bytes())?;
        for child in node.children() {
            let has_next = child.next_sibling().is_some();
            self.write_node(child, has_next, &mut ctx)?;
        }
        self.w.write_all(suffix.as_bytes())?;
        self.write_indented(separator, outer_indent)
    }

    fn write_image(
        &mut self,
        node: NodeRef<'_>,
        separator: &str,
        outer_indent: &str,
    ) -> io::Result<()> {
        let alt = node.attr("alt").unwrap_or("");
        let src = node.attr("src").unwrap_or("");
        write!(self.w, "![{alt}]({src})")?;
        self.write_indented(separator, outer_indent)
    }

    fn write_indented(&mut self, text: &str, indent: &str) -> io::Result<()> {
        if indent.is_empty() {
            return self.w.write_all(text.as_bytes());
        }

        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            self.w.write_all(first.as_bytes())?;
        }
        for line in lines {
            self.w.write_all(b"\n")?;
            self.w.write_all(indent.as_bytes())?;
            self.w.write_all(line.as_bytes())?;
        }
        Ok(())
    }
}

impl<W: Write> ArticleWriter for MarkdownWriter<W> {
    fn write(&mut self, root: NodeRef<'_>, title: &str) -> io::Result<()> {
        write!(self.w, "# {title}\n\n")?;
        self.write_node(root, false, &mut RenderContext::default())?;
        self.w.write_all(b"\n")?;
        self.w.flush()
    }
}
