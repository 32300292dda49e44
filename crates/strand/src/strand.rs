//! The length-prefixed byte-string value type.

use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use bstr::ByteSlice;

use crate::error::{Result, reserve};

/// An owned, immutable byte string carrying an explicit length.
///
/// A `Strand` is a `(length, bytes)` pair: its logical content is exactly
/// the bytes it holds, and its length is always the physical byte count.
/// No terminator byte is part of the value, so embedded `0x00` bytes and
/// non-UTF-8 sequences are ordinary payload. Every transformation yields
/// a new value; nothing mutates a strand after construction.
///
/// All operations are byte-oriented: multi-byte encoded characters are
/// opaque byte runs.
///
/// Allocation is fallible throughout the crate, so copying is the
/// explicit [`try_clone`](Strand::try_clone) rather than `Clone`.
///
/// Equality holds iff lengths match and all bytes match. Ordering is
/// lexicographic over the shared prefix, with the shorter strand first
/// on a tie, so [`Ord::cmp`] is `Equal` exactly when `==` holds.
///
/// # Examples
///
/// ```
/// use strand::Strand;
///
/// let hello = Strand::new(b"Hello")?;
/// let world = Strand::new(b" World")?;
/// assert_eq!(hello.concat(&world)?.as_bytes(), b"Hello World");
/// # Ok::<(), strand::Error>(())
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Strand {
    bytes: Box<[u8]>,
}

impl Strand {
    /// Copies `bytes` into a new owned strand.
    ///
    /// A slice is the explicit length-plus-pointer construction shape;
    /// nothing is inferred from sentinel bytes.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`](crate::Error::Allocation) if backing storage
    /// cannot be obtained.
    pub fn new(bytes: &[u8]) -> Result<Self> {
        let mut buf = Vec::new();
        reserve(&mut buf, bytes.len())?;
        buf.extend_from_slice(bytes);
        Ok(Self::from_vec(buf))
    }

    /// The empty strand. Infallible: no storage is allocated.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bytes: Vec::new().into_boxed_slice(),
        }
    }

    /// Builds a strand from a terminator-delimited byte sequence.
    ///
    /// The logical content is everything before the first `0x00`, or the
    /// whole slice when no terminator is present. This is a boundary
    /// constructor for terminator-based sources; [`Strand::new`] treats
    /// `0x00` as ordinary payload.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`](crate::Error::Allocation) if backing storage
    /// cannot be obtained.
    pub fn from_nul_terminated(bytes: &[u8]) -> Result<Self> {
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        Self::new(&bytes[..end])
    }

    /// An independent copy with the same bytes.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`](crate::Error::Allocation) if backing storage
    /// cannot be obtained.
    pub fn try_clone(&self) -> Result<Self> {
        Self::new(&self.bytes)
    }

    /// Wraps an already-owned, exactly-sized buffer.
    pub(crate) fn from_vec(buf: Vec<u8>) -> Self {
        Self {
            bytes: buf.into_boxed_slice(),
        }
    }

    /// Number of bytes in the strand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` when the strand holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The byte at `index`, or `None` past the end.
    #[must_use]
    pub fn byte(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    /// A new strand holding `self` followed by `other`.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`](crate::Error::Allocation) if backing storage
    /// cannot be obtained.
    pub fn concat(&self, other: &Strand) -> Result<Strand> {
        let mut buf = Vec::new();
        reserve(&mut buf, self.len() + other.len())?;
        buf.extend_from_slice(&self.bytes);
        buf.extend_from_slice(&other.bytes);
        Ok(Strand::from_vec(buf))
    }

    /// A terminator-appended copy, for handing to sinks that require
    /// terminator-delimited bytes. This is a boundary conversion, not
    /// part of the value's identity; embedded `0x00` bytes are copied
    /// as-is and will truncate the view such a sink takes.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`](crate::Error::Allocation) if backing storage
    /// cannot be obtained.
    pub fn to_nul_terminated(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        reserve(&mut buf, self.len() + 1)?;
        buf.extend_from_slice(&self.bytes);
        buf.push(0);
        Ok(buf)
    }
}

/// The empty strand.
impl Default for Strand {
    fn default() -> Self {
        Self::empty()
    }
}

impl AsRef<[u8]> for Strand {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Lossy rendering: invalid UTF-8 sequences print as replacement
/// characters, the payload itself is untouched.
impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.bytes.as_bstr(), f)
    }
}

impl fmt::Debug for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.bytes.as_bstr(), f)
    }
}
