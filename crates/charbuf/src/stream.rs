//! Collaborator-facing contracts over the buffer's iteration and append
//! paths: emitting the live range to a sink, and refilling from a character
//! source that streams until exhausted.

use core::fmt;

use crate::{buffer::CharBuf, error::AllocationError};

impl CharBuf {
    /// Emits each live character, in order, to `sink`.
    ///
    /// The live range carries no termination marker; exactly `len`
    /// characters are written.
    ///
    /// # Errors
    ///
    /// Propagates any error reported by the sink.
    pub fn write_to<W: fmt::Write>(&self, sink: &mut W) -> fmt::Result {
        for c in self.chars() {
            sink.write_char(c)?;
        }
        Ok(())
    }

    /// Replaces the buffer's content with the characters produced by
    /// `source`, in order.
    ///
    /// Prior content and its allocation are discarded first; each produced
    /// character then arrives through the normal append/growth path, since a
    /// streaming source's length is not known up front.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if growth fails mid-stream; characters
    /// consumed so far are retained.
    pub fn fill_from<I>(&mut self, source: I) -> Result<(), AllocationError>
    where
        I: IntoIterator<Item = char>,
    {
        self.reset();
        for c in source {
            self.push(c)?;
        }
        Ok(())
    }
}

impl fmt::Display for CharBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}
