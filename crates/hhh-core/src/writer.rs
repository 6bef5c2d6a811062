//! Writer contract shared by both output formats, and the format selector.

use std::convert::Infallible;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::markdown::MarkdownWriter;
use crate::node::NodeRef;
use crate::pretty::HtmlWriter;

/// Renders one article per call to an output sink.
pub trait ArticleWriter {
    /// Write the tree rooted at `root`.
    ///
    /// Stops at the first failed write and returns that error unchanged.
    /// Bytes written before the failure stay in the sink.
    fn write(&mut self, root: NodeRef<'_>, title: &str) -> io::Result<()>;
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Markdown,
    /// Indented HTML
    Html,
}

impl Format {
    /// `"markdown"` selects Markdown; any other name selects HTML.
    pub fn from_name(name: &str) -> Self {
        match name {
            "markdown" => Format::Markdown,
            _ => Format::Html,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Format::Markdown => "markdown",
            Format::Html => "html",
        }
    }

    /// Box the writer for this format around a sink
    pub fn writer<'a, W: Write + 'a>(self, w: W) -> Box<dyn ArticleWriter + 'a> {
        match self {
            Format::Markdown => Box::new(MarkdownWriter::new(w)),
            Format::Html => Box::new(HtmlWriter::new(w)),
        }
    }
}

impl FromStr for Format {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Format::from_name(s))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
