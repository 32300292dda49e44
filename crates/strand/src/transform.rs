//! Pure text algorithms over [`Strand`] values. Each yields a new owned
//! strand and leaves its input untouched.

use alloc::vec::Vec;

use crate::{
    error::{Error, Result, reserve},
    search,
    strand::Strand,
};

/// Bytes the C locale counts as whitespace: space, `\t`, `\n`, `\v`,
/// `\f`, `\r`.
const fn is_ascii_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

impl Strand {
    /// Strips leading and trailing ASCII whitespace.
    ///
    /// One cursor scans forward over leading whitespace, one scans
    /// backward over trailing whitespace; an all-whitespace or empty
    /// input yields the empty strand. Idempotent.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`] if backing storage cannot be obtained.
    pub fn trim(&self) -> Result<Strand> {
        let bytes = self.as_bytes();
        let mut left = 0;
        while left < bytes.len() && is_ascii_space(bytes[left]) {
            left += 1;
        }
        let mut right = bytes.len();
        while right > left && is_ascii_space(bytes[right - 1]) {
            right -= 1;
        }
        Strand::new(&bytes[left..right])
    }

    /// Applies `f` to every byte, in index order.
    ///
    /// Not codepoint-aware: multi-byte encoded characters are
    /// transformed per raw byte.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`] if backing storage cannot be obtained.
    pub fn map_bytes(&self, mut f: impl FnMut(u8) -> u8) -> Result<Strand> {
        let mut buf = Vec::new();
        reserve(&mut buf, self.len())?;
        buf.extend(self.as_bytes().iter().map(|&b| f(b)));
        Ok(Strand::from_vec(buf))
    }

    /// Keeps, in original order, only the bytes for which `pred` holds.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`] if backing storage cannot be obtained.
    pub fn filter_bytes(&self, mut pred: impl FnMut(u8) -> bool) -> Result<Strand> {
        let mut kept = Vec::new();
        reserve(&mut kept, self.len())?;
        kept.extend(self.as_bytes().iter().copied().filter(|&b| pred(b)));
        Strand::new(&kept)
    }

    /// The half-open byte range `[start, end)` as a new strand.
    ///
    /// # Errors
    ///
    /// [`Error::Range`] unless `start <= end <= self.len()`;
    /// [`Error::Allocation`] if backing storage cannot be obtained.
    pub fn substring(&self, start: usize, end: usize) -> Result<Strand> {
        if start > end || end > self.len() {
            return Err(Error::Range {
                start,
                end,
                len: self.len(),
            });
        }
        Strand::new(&self.as_bytes()[start..end])
    }

    /// `self` concatenated with itself `times` times. Zero times yields
    /// the empty strand regardless of the input.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`] if backing storage cannot be obtained.
    pub fn repeat(&self, times: usize) -> Result<Strand> {
        let total = self.len().saturating_mul(times);
        if total == 0 {
            return Ok(Strand::empty());
        }
        let mut buf = Vec::new();
        reserve(&mut buf, total)?;
        for _ in 0..times {
            buf.extend_from_slice(self.as_bytes());
        }
        Ok(Strand::from_vec(buf))
    }

    /// Every byte equal to `old` replaced by `new`; order and length
    /// unchanged.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`] if backing storage cannot be obtained.
    pub fn replace_byte(&self, old: u8, new: u8) -> Result<Strand> {
        self.map_bytes(|b| if b == old { new } else { b })
    }

    /// Every non-overlapping, left-to-right occurrence of `old` replaced
    /// by `new`.
    ///
    /// Two phases over the same search primitive: the first counts
    /// occurrences (each search resumes strictly after the previous
    /// match's end), the second copies gaps verbatim and substitutes
    /// `new` at each match into a single allocation of the exact final
    /// length. Zero occurrences yields a copy of `self`. An empty `old`
    /// never matches: substituting at zero-width offsets would not
    /// terminate.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`] if backing storage cannot be obtained.
    pub fn replace(&self, old: impl AsRef<[u8]>, new: impl AsRef<[u8]>) -> Result<Strand> {
        let (old, new) = (old.as_ref(), new.as_ref());
        if old.is_empty() {
            return self.try_clone();
        }

        let mut count = 0usize;
        let mut offset = 0usize;
        while let Some(at) = search::find_at(self.as_bytes(), old, offset) {
            count += 1;
            offset = at + old.len();
        }
        if count == 0 {
            return self.try_clone();
        }

        let total = self.len() - count * old.len() + count * new.len();
        let mut buf = Vec::new();
        reserve(&mut buf, total)?;
        let mut tail = 0usize;
        while let Some(at) = search::find_at(self.as_bytes(), old, tail) {
            buf.extend_from_slice(&self.as_bytes()[tail..at]);
            buf.extend_from_slice(new);
            tail = at + old.len();
        }
        buf.extend_from_slice(&self.as_bytes()[tail..]);
        debug_assert_eq!(buf.len(), total);
        Ok(Strand::from_vec(buf))
    }
}
