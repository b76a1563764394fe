//! Shared test support: a container reader, metadata factories and failing sinks.

pub mod factories;

use std::io::{self, Write};

/// A sink that accepts `limit` bytes in total and fails every write after that.
pub struct FailingSink {
    limit: usize,
    written: Vec<u8>,
}

impl FailingSink {
    pub fn new(limit: usize) -> Self {
        FailingSink {
            limit,
            written: Vec::new(),
        }
    }

    pub fn written(&self) -> &[u8] {
        &self.written
    }
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written.len() + buf.len() > self.limit {
            return Err(io::Error::new(io::ErrorKind::Other, "sink is full"));
        }

        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
