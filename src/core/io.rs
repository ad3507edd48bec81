//! Input stream helpers
//!
//! Opens the table inputs with a large read buffer, decompressing gzip and
//! bzip2 files on the fly, and reads them line by line without reallocating.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Default buffer size for BufReader (128KB)
pub const DEFAULT_BUFFER_SIZE: usize = 128 * 1024;

/// Compression format of an input table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionFormat {
    /// Plain text (uncompressed)
    Plain,
    /// Gzip compressed (.gz)
    Gzip,
    /// Bzip2 compressed (.bz2)
    Bzip2,
}

/// Detect compression from the file extension
///
/// Only `.gz` and `.bz2` names are decompressed; file content is never
/// inspected, so plain tables are read as-is whatever their first bytes are.
pub fn detect_compression<P: AsRef<Path>>(path: P) -> CompressionFormat {
    match path.as_ref().extension().and_then(|e| e.to_str()) {
        Some("gz") => CompressionFormat::Gzip,
        Some("bz2") => CompressionFormat::Bzip2,
        _ => CompressionFormat::Plain,
    }
}

/// Open an input table as a buffered line source
pub fn open_input<P: AsRef<Path>>(path: P) -> io::Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let format = detect_compression(path);
    let file = File::open(path)?;

    let reader: Box<dyn BufRead> = match format {
        CompressionFormat::Gzip => Box::new(BufReader::with_capacity(
            DEFAULT_BUFFER_SIZE,
            flate2::read::MultiGzDecoder::new(file),
        )),
        CompressionFormat::Bzip2 => Box::new(BufReader::with_capacity(
            DEFAULT_BUFFER_SIZE,
            bzip2::read::BzDecoder::new(file),
        )),
        CompressionFormat::Plain => Box::new(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file)),
    };
    Ok(reader)
}

/// Line iterator that reuses a buffer to avoid allocations
pub struct LineIterator<R: BufRead> {
    reader: R,
    buffer: String,
}

impl<R: BufRead> LineIterator<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::with_capacity(1024),
        }
    }

    /// Read the next line into the internal buffer
    /// Returns None at EOF, Some(Ok(&str)) on success, Some(Err) on error
    pub fn next_line(&mut self) -> Option<io::Result<&str>> {
        self.buffer.clear();
        match self.reader.read_line(&mut self.buffer) {
            Ok(0) => None,
            Ok(_) => {
                if self.buffer.ends_with('\n') {
                    self.buffer.pop();
                    if self.buffer.ends_with('\r') {
                        self.buffer.pop();
                    }
                }
                Some(Ok(&self.buffer))
            }
            Err(e) => Some(Err(e)),
        }
    }

    /// Advance past the next line without handing it out
    ///
    /// Returns Ok(false) at EOF.
    pub fn skip_line(&mut self) -> io::Result<bool> {
        self.buffer.clear();
        Ok(self.reader.read_line(&mut self.buffer)? > 0)
    }
}
