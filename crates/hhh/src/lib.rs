//! # hhh
//!
//! Human readable HTML helper.
//!
//! Fetch a page (stdin, file or URL), keep its readable content, and render
//! it with one of the [`hhh_core`] writers.
//!
//! ## Example
//!
//! ```rust
//! use hhh::Article;
//! use hhh_core::Format;
//!
//! let article = Article::parse("<title>Hi</title><h2>Hello</h2>", None).unwrap();
//! let mut out = Vec::new();
//! article.write_to(Format::Markdown.writer(&mut out).as_mut()).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "# Hi\n\n## Hello\n");
//! ```

pub mod extract;
pub mod source;

pub use extract::Article;
pub use source::{fetch, Source};

use hhh_core::ArticleWriter;
use tracing::debug;

/// Error type for fetching and rendering a page
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("parse url {url:?}: {source}")]
    Url {
        url: String,
        source: url::ParseError,
    },

    #[error("request {url:?}: {source}")]
    Request {
        url: String,
        source: Box<ureq::Error>,
    },

    #[error("received unexpected status code {status} (!=200), body: {body}")]
    Status { status: u16, body: String },

    #[error("read {target:?}: {source}")]
    Io {
        target: String,
        source: std::io::Error,
    },

    #[error("build document tree: {0}")]
    Tree(#[from] hhh_core::TreeError),

    #[error("write {target:?} to output: {source}")]
    Write {
        target: String,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Fetch one target, extract its article and render it.
pub fn convert(target: &str, writer: &mut dyn ArticleWriter) -> Result<()> {
    let source = fetch(target)?;
    let article = Article::parse(&source.html, source.base.as_ref())?;
    debug!(
        input = target,
        title = %article.title,
        nodes = article.tree.len(),
        "extracted article"
    );

    article.write_to(writer).map_err(|source| Error::Write {
        target: target.to_string(),
        source,
    })
}
