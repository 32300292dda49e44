//! Splitting a strand into fields.
//!
//! Both splitters share one emission policy: a field is the (possibly
//! empty) run of bytes strictly between two delimiter occurrences, so
//! delimiters at the start, at the end, or adjacent to each other all
//! produce empty fields, and the result always holds at least one field.

use crate::{error::Result, search, strand::Strand, vector::StrandVec};

impl Strand {
    /// Splits on a single delimiter byte.
    ///
    /// ```
    /// use strand::Strand;
    ///
    /// let line = Strand::new(b"Green,Blue,,Black")?;
    /// let fields = line.split_byte(b',')?;
    /// assert_eq!(fields.len(), 4);
    /// assert!(fields.get(2).is_some_and(Strand::is_empty));
    /// # Ok::<(), strand::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`](crate::Error::Allocation) if backing
    /// storage cannot be obtained.
    pub fn split_byte(&self, delimiter: u8) -> Result<StrandVec> {
        let bytes = self.as_bytes();
        let mut fields = StrandVec::new();
        let mut start = 0usize;
        for (i, &b) in bytes.iter().enumerate() {
            if b == delimiter {
                fields.push(Strand::new(&bytes[start..i])?)?;
                start = i + 1;
            }
        }
        // The final field runs to the end of input; a trailing delimiter
        // leaves it empty.
        fields.push(Strand::new(&bytes[start..])?)?;
        Ok(fields)
    }

    /// Splits on a multi-byte delimiter, matched with the same search
    /// primitive as [`find_at`](Strand::find_at) and
    /// [`replace`](Strand::replace).
    ///
    /// A delimiter that never occurs yields a single field equal to the
    /// whole input, and an empty delimiter never matches.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`](crate::Error::Allocation) if backing
    /// storage cannot be obtained.
    pub fn split_str(&self, delimiter: impl AsRef<[u8]>) -> Result<StrandVec> {
        let delimiter = delimiter.as_ref();
        if delimiter.is_empty() {
            return StrandVec::from_single(self.try_clone()?);
        }
        let bytes = self.as_bytes();
        let mut fields = StrandVec::new();
        let mut start = 0usize;
        while let Some(at) = search::find_at(bytes, delimiter, start) {
            fields.push(Strand::new(&bytes[start..at])?)?;
            start = at + delimiter.len();
        }
        fields.push(Strand::new(&bytes[start..])?)?;
        Ok(fields)
    }
}
