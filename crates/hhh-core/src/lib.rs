//! # hhh-core
//!
//! Serialize a cleaned-up document tree into something a human reads.
//!
//! Two writers share the [`ArticleWriter`] contract:
//!
//! - [`MarkdownWriter`]: title heading plus a Markdown rendering of headings,
//!   paragraphs, lists, bold text, links, images and captions. Tags without
//!   a rule render their children in place.
//! - [`HtmlWriter`]: indented HTML, one line per tag or text node.
//!
//! Both write straight to an [`std::io::Write`] sink in a single forward pass.
//! The tree is parser agnostic: build it with [`Tree`] from any HTML parser.
//!
//! ## Example
//!
//! ```rust
//! use hhh_core::{ArticleWriter, Format, Tree};
//!
//! let mut tree = Tree::new();
//! let h2 = tree.element("h2");
//! let text = tree.text("Hello World");
//! tree.append_child(h2, text).unwrap();
//!
//! let mut out = Vec::new();
//! Format::Markdown.writer(&mut out).write(tree.node(h2), "Greeting").unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "# Greeting\n\n## Hello World\n");
//! ```

mod markdown;
pub mod node;
mod pretty;
pub mod rules;
mod writer;

#[cfg(test)]
mod testing;

pub use markdown::MarkdownWriter;
pub use node::{Children, NodeId, NodeKind, NodeRef, Tree};
pub use pretty::HtmlWriter;
pub use rules::{RenderRule, Rules, Separator, TagRule};
pub use writer::{ArticleWriter, Format};

/// Error type for tree construction
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("node {0} does not belong to this tree")]
    UnknownNode(usize),

    #[error("node {0} already has a parent")]
    AlreadyAttached(usize),

    #[error("appending node {0} would create a cycle")]
    Cycle(usize),

    #[error("text node {0} cannot have children")]
    TextParent(usize),
}

pub type Result<T> = std::result::Result<T, TreeError>;
