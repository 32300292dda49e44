mod properties;
mod strand;

use crate::Strand;

/// Builds a strand from a literal, panicking on allocation failure.
pub(crate) fn s(bytes: &[u8]) -> Strand {
    Strand::new(bytes).unwrap()
}
