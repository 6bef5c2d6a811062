//! Test doubles.

use std::io::{self, Write};

/// Sink that accepts `limit` bytes, then rejects every write.
pub struct FailingSink {
    written: Vec<u8>,
    limit: usize,
}

impl FailingSink {
    pub fn new(limit: usize) -> Self {
        Self {
            written: Vec::new(),
            limit,
        }
    }

    pub fn written(&self) -> &[u8] {
        &self.written
    }
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written.len() + buf.len() > self.limit {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
