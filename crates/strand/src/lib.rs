//! Length-prefixed byte strings and the text algorithms built on them.
//!
//! [`Strand`] is an owned byte buffer whose length is explicit: no
//! terminator byte, so embedded NULs and non-UTF-8 payloads are ordinary
//! data. [`StrandVec`] is a growable ordered container of owned strands
//! with doubling-capacity growth, plus map/filter/reduce combinators.
//! All operations are byte-oriented; multi-byte encoded characters are
//! opaque byte runs.
//!
//! Every allocating operation is fallible and returns [`Result`]; see
//! [`Error`] for the two failure kinds (allocation and range). Ordinary
//! data is never an error.
//!
//! The core is `no_std` + `alloc`. The default `std` feature adds the
//! bounded I/O boundary in [`io`].
//!
//! ```
//! use strand::Strand;
//!
//! let line = Strand::new(b" Hello World World ")?;
//! let replaced = line.replace("World", "Earth")?;
//! assert_eq!(replaced.as_bytes(), b" Hello Earth Earth ");
//! assert_eq!(replaced.trim()?.as_bytes(), b"Hello Earth Earth");
//! # Ok::<(), strand::Error>(())
//! ```

#![no_std]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod color;
mod combinators;
mod error;
mod search;
mod split;
mod strand;
mod transform;
mod vector;

#[cfg(feature = "std")]
pub mod io;

#[cfg(test)]
mod tests;

pub use color::{Color, RESET};
pub use error::{Error, Result};
pub use strand::Strand;
pub use vector::StrandVec;

/// The crate version, for callers that report it.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
