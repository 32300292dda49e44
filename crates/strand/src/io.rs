//! Bounded input and output at the process boundary.
//!
//! Reads are capped at [`MAX_READ`] per call; a consumer that needs
//! unbounded input loops at this boundary, outside the core. Failures
//! here are `std::io::Error`, with allocation failure mapped to
//! [`std::io::ErrorKind::OutOfMemory`].

use alloc::vec::Vec;
use std::io::{self, BufRead, Read, Write};

use crate::strand::Strand;

/// Fixed per-call ceiling on bytes read: 64 KiB.
pub const MAX_READ: usize = 64 * 1024;

fn oom(err: crate::Error) -> io::Error {
    io::Error::new(io::ErrorKind::OutOfMemory, err)
}

/// Reads once from `reader`, yielding at most [`MAX_READ`] bytes.
///
/// A single read call is issued; end of input yields the empty strand.
///
/// # Errors
///
/// Propagates the read error, or [`io::ErrorKind::OutOfMemory`] when
/// the strand cannot be allocated.
pub fn read_from<R: Read>(reader: &mut R) -> io::Result<Strand> {
    let mut buf = [0u8; MAX_READ];
    let n = reader.read(&mut buf)?;
    Strand::new(&buf[..n]).map_err(oom)
}

/// Reads one line from `reader`, capped at [`MAX_READ`] bytes.
///
/// The trailing newline, when present, is not part of the value. End of
/// input yields the empty strand.
///
/// # Errors
///
/// Propagates the read error, or [`io::ErrorKind::OutOfMemory`] when
/// the strand cannot be allocated.
pub fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Strand> {
    let mut line = Vec::new();
    reader
        .by_ref()
        .take(MAX_READ as u64)
        .read_until(b'\n', &mut line)?;
    if line.last() == Some(&b'\n') {
        line.pop();
    }
    Strand::new(&line).map_err(oom)
}

impl Strand {
    /// Writes the raw bytes to `writer`.
    ///
    /// # Errors
    ///
    /// Propagates the write error.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.as_bytes())
    }

    /// Writes the raw bytes followed by a newline.
    ///
    /// # Errors
    ///
    /// Propagates the write error.
    pub fn write_line_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.as_bytes())?;
        writer.write_all(b"\n")
    }
}
