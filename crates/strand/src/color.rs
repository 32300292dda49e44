//! Terminal color decoration.
//!
//! The SGR code tables are compile-time constants; decoration is just a
//! concatenation consuming the core construction interface.

use alloc::vec::Vec;

use crate::{
    error::{Result, reserve},
    strand::Strand,
};

/// Resets all SGR attributes.
pub const RESET: &str = "\x1b[0m";

/// The eight basic ANSI foreground colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// The SGR escape sequence selecting this foreground color.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Color::Black => "\x1b[30m",
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::Magenta => "\x1b[35m",
            Color::Cyan => "\x1b[36m",
            Color::White => "\x1b[37m",
        }
    }
}

impl Strand {
    /// A strand holding `text` wrapped in the SGR sequence for `color`
    /// and a trailing [`RESET`]. The escape bytes are part of the
    /// value's content, exactly as a terminal sink expects them.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`](crate::Error::Allocation) if backing
    /// storage cannot be obtained.
    pub fn colored(text: impl AsRef<[u8]>, color: Color) -> Result<Strand> {
        let text = text.as_ref();
        let code = color.code().as_bytes();
        let mut buf = Vec::new();
        reserve(&mut buf, code.len() + text.len() + RESET.len())?;
        buf.extend_from_slice(code);
        buf.extend_from_slice(text);
        buf.extend_from_slice(RESET.as_bytes());
        Ok(Strand::from_vec(buf))
    }
}
