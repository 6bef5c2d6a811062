//! Where the HTML comes from: standard input, a local file, or an HTTP(S) URL.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tracing::{debug, trace};
use url::Url;

use crate::{Error, Result};

/// Cap on the error body quoted back from a failed HTTP request
const ERROR_BODY_LIMIT: u64 = 1 << 20;

/// Raw HTML plus the URL relative links resolve against.
#[derive(Debug, Clone)]
pub struct Source {
    pub html: String,
    pub base: Option<Url>,
}

/// Fetch HTML for a target.
///
/// An empty target or `-` reads standard input, `http://` and `https://`
/// targets are downloaded, anything else is read as a file path.
pub fn fetch(target: &str) -> Result<Source> {
    if target.is_empty() || target == "-" {
        return stdin();
    }
    if target.starts_with("http://") || target.starts_with("https://") {
        return http(target);
    }
    file(Path::new(target))
}

/// Read HTML from standard input; there is no base URL.
pub fn stdin() -> Result<Source> {
    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .map_err(|source| Error::Io {
            target: "<stdin>".to_string(),
            source,
        })?;
    trace!(bytes = bytes.len(), "read html from stdin");

    Ok(Source {
        html: String::from_utf8_lossy(&bytes).into_owned(),
        base: None,
    })
}

/// Read HTML from a file; the base URL is the file's `file://` URL.
pub fn file(path: &Path) -> Result<Source> {
    let bytes = fs::read(path).map_err(|source| Error::Io {
        target: path.display().to_string(),
        source,
    })?;
    trace!(bytes = bytes.len(), path = %path.display(), "read html from file");

    let base = fs::canonicalize(path)
        .ok()
        .and_then(|absolute| Url::from_file_path(absolute).ok());

    Ok(Source {
        html: String::from_utf8_lossy(&bytes).into_owned(),
        base,
    })
}

/// Download HTML with a blocking GET; anything but `200 OK` is an error.
pub fn http(target: &str) -> Result<Source> {
    let url = Url::parse(target).map_err(|source| Error::Url {
        url: target.to_string(),
        source,
    })?;
    debug!(%url, "requesting page");

    let response = match ureq::get(url.as_str()).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(status, response)) => {
            return Err(Error::Status {
                status,
                body: read_limited(response),
            });
        }
        Err(err) => {
            return Err(Error::Request {
                url: target.to_string(),
                source: Box::new(err),
            });
        }
    };

    if response.status() != 200 {
        return Err(Error::Status {
            status: response.status(),
            body: read_limited(response),
        });
    }

    let mut html = String::new();
    response
        .into_reader()
        .read_to_string(&mut html)
        .map_err(|source| Error::Io {
            target: target.to_string(),
            source,
        })?;
    trace!(bytes = html.len(), %url, "downloaded html");

    Ok(Source {
        html,
        base: Some(url),
    })
}

fn read_limited(response: ureq::Response) -> String {
    let mut bytes = Vec::new();
    // best effort
    let _ = response
        .into_reader()
        .take(ERROR_BODY_LIMIT)
        .read_to_end(&mut bytes);
    String::from_utf8_lossy(&bytes).into_owned()
}
