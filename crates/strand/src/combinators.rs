//! Functional combinators over [`StrandVec`].

use crate::{error::Result, strand::Strand, vector::StrandVec};

impl StrandVec {
    /// A new vector of the same length with `f` applied to every
    /// element, in order. The source vector is untouched.
    ///
    /// The transform returns `Result` so that transforms built from this
    /// crate's own operations propagate allocation failure with `?`.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`](crate::Error::Allocation) if backing
    /// storage cannot be obtained, or whatever error `f` returns.
    pub fn map(&self, mut f: impl FnMut(&Strand) -> Result<Strand>) -> Result<StrandVec> {
        let mut out = StrandVec::new();
        for strand in self {
            out.push(f(strand)?)?;
        }
        Ok(out)
    }

    /// A new vector holding copies of the elements satisfying `pred`,
    /// order preserved.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`](crate::Error::Allocation) if backing
    /// storage cannot be obtained.
    pub fn filter(&self, mut pred: impl FnMut(&Strand) -> bool) -> Result<StrandVec> {
        let mut out = StrandVec::new();
        for strand in self {
            if pred(strand) {
                out.push(strand.try_clone()?)?;
            }
        }
        Ok(out)
    }

    /// Left fold. The accumulator starts as a copy of `seed` (the empty
    /// strand when absent) and each step consumes the prior accumulator,
    /// so superseded intermediates are released as the fold advances.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`](crate::Error::Allocation) if backing
    /// storage cannot be obtained, or whatever error `f` returns.
    pub fn reduce(
        &self,
        mut f: impl FnMut(Strand, &Strand) -> Result<Strand>,
        seed: Option<&Strand>,
    ) -> Result<Strand> {
        let mut acc = match seed {
            Some(seed) => seed.try_clone()?,
            None => Strand::empty(),
        };
        for strand in self {
            acc = f(acc, strand)?;
        }
        Ok(acc)
    }
}
