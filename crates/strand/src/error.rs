use alloc::vec::Vec;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// The two failure kinds of this crate.
///
/// Allocation failure is reported by whichever operation encountered it;
/// no partially-initialized value is ever returned. Range violations are
/// reported explicitly rather than being converted to empty values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Backing storage for the requested number of bytes could not be
    /// obtained.
    #[error("failed to allocate {0} bytes")]
    Allocation(usize),

    /// A byte range violated `start <= end <= len`.
    #[error("byte range {start}..{end} out of bounds for length {len}")]
    Range {
        start: usize,
        end: usize,
        len: usize,
    },

    /// An element index was at or past the container length.
    #[error("index {index} out of bounds for length {len}")]
    Index { index: usize, len: usize },
}

/// Obtains exactly `additional` spare capacity, surfacing failure as
/// [`Error::Allocation`] instead of aborting the process.
pub(crate) fn reserve<T>(buf: &mut Vec<T>, additional: usize) -> Result<()> {
    buf.try_reserve_exact(additional)
        .map_err(|_| Error::Allocation(additional * core::mem::size_of::<T>()))
}
