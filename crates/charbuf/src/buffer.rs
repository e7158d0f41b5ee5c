use alloc::vec::Vec;
use core::{
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::error::AllocationError;

/// An owned, contiguous, growable run of characters.
///
/// The buffer tracks two cursors over its heap storage: `len`, the number of
/// live characters, and `capacity`, the number of allocated slots. Only the
/// first `len` slots hold meaningful values; the remainder is reserved for
/// future appends. A zero-capacity buffer holds no allocation at all.
///
/// Growth is by doubling (`1, 2, 4, 8, …` from empty), decided by this type's
/// own policy rather than the standard library's: every mutating path
/// reserves explicitly before writing, so the backing [`Vec`] never picks a
/// capacity on its own. Reallocation builds the replacement storage in full
/// before the old allocation is released.
///
/// Each buffer exclusively owns its storage. [`Clone`] deep-copies;
/// [`CharBuf::take`] transfers ownership in constant time and leaves the
/// source empty.
#[derive(Debug, Default)]
pub struct CharBuf {
    data: Vec<char>,
}

impl CharBuf {
    /// Creates an empty buffer. Never allocates.
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty buffer with storage reserved for `capacity`
    /// characters.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if the allocation cannot be satisfied.
    pub fn with_capacity(capacity: usize) -> Result<Self, AllocationError> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)?;
        Ok(Self { data })
    }

    /// Creates a buffer holding the characters of `seq` in order, with
    /// storage sized exactly to the sequence length.
    ///
    /// The sequence length need not be known up front: characters arrive
    /// through the doubling append path, and the storage is reallocated to
    /// the exact length once the sequence is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if any allocation cannot be satisfied.
    pub fn from_chars<I>(seq: I) -> Result<Self, AllocationError>
    where
        I: IntoIterator<Item = char>,
    {
        let mut buf = Self::new();
        for c in seq {
            buf.push(c)?;
        }
        if buf.capacity() != buf.len() {
            buf.reallocate_exact(buf.len())?;
        }
        Ok(buf)
    }

    /// Returns the number of live characters.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer holds no characters.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of allocated character slots, live or not.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves storage for at least `new_capacity` characters.
    ///
    /// A no-op when the current capacity already suffices; capacity never
    /// shrinks. Otherwise the buffer reallocates to `new_capacity` exactly,
    /// preserving content and order.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if the allocation cannot be satisfied; the
    /// buffer is left unchanged.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), AllocationError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        self.reallocate_exact(new_capacity)
    }

    /// Appends a character. Amortized O(1) across a run of pushes.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if growth is needed and fails; the buffer
    /// is left unchanged.
    pub fn push(&mut self, c: char) -> Result<(), AllocationError> {
        self.ensure_room_for_one()?;
        self.data.push(c);
        Ok(())
    }

    /// Appends every live character of `other`, in order.
    ///
    /// Reserves the combined length once up front rather than growing
    /// piecemeal.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if the reservation fails; the buffer is
    /// left unchanged.
    pub fn append(&mut self, other: &Self) -> Result<(), AllocationError> {
        self.reserve(self.len() + other.len())?;
        self.data.extend_from_slice(&other.data);
        Ok(())
    }

    /// Returns the character at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. An out-of-range index is a
    /// programming error, not a recoverable condition; execution never
    /// continues with a silently wrong value. Use [`CharBuf::get`] for a
    /// checked lookup.
    pub fn at(&self, index: usize) -> char {
        *self.slot(index)
    }

    /// Returns a mutable reference to the character at `index`, permitting
    /// in-place rewrites.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`, as [`CharBuf::at`] does.
    pub fn at_mut(&mut self, index: usize) -> &mut char {
        let len = self.len();
        match self.data.get_mut(index) {
            Some(slot) => slot,
            None => out_of_bounds(index, len),
        }
    }

    /// Returns the character at `index`, or `None` past the live range.
    pub fn get(&self, index: usize) -> Option<char> {
        self.data.get(index).copied()
    }

    /// Returns the live range as a slice.
    pub fn as_slice(&self) -> &[char] {
        &self.data
    }

    /// Iterates the live characters in order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.data.iter().copied()
    }

    /// Moves the buffer's content out, leaving `self` empty with no
    /// allocation. Constant time; never allocates.
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Discards all content and releases the allocation, returning the
    /// buffer to the empty state.
    pub fn reset(&mut self) {
        self.data = Vec::new();
    }

    /// Deep-copies the buffer, like [`Clone`], but reports allocation
    /// failure instead of aborting.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if the allocation cannot be satisfied.
    pub fn try_clone(&self) -> Result<Self, AllocationError> {
        let mut copy = Self::with_capacity(self.len())?;
        copy.data.extend_from_slice(&self.data);
        Ok(copy)
    }

    fn slot(&self, index: usize) -> &char {
        match self.data.get(index) {
            Some(slot) => slot,
            None => out_of_bounds(index, self.len()),
        }
    }

    fn ensure_room_for_one(&mut self) -> Result<(), AllocationError> {
        if self.len() == self.capacity() {
            // Doubling keeps the total relocation work across N pushes linear.
            self.reallocate_exact(core::cmp::max(1, 2 * self.len()))?;
        }
        Ok(())
    }

    /// Reallocates to exactly `new_capacity` slots, which must cover the
    /// live range.
    ///
    /// The replacement storage is allocated and filled before the old
    /// allocation is released, so a failure leaves `self` untouched and no
    /// observer ever sees cursors pointing at the wrong allocation.
    fn reallocate_exact(&mut self, new_capacity: usize) -> Result<(), AllocationError> {
        debug_assert!(new_capacity >= self.len());
        let mut fresh: Vec<char> = Vec::new();
        fresh.try_reserve_exact(new_capacity)?;
        fresh.extend_from_slice(&self.data);
        self.data = fresh;
        Ok(())
    }
}

impl Clone for CharBuf {
    /// Deep copy of the live range, sized exactly to its length.
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.len());
        data.extend_from_slice(&self.data);
        Self { data }
    }

    /// Copy-assignment: the replacement is built in full before the
    /// destination's prior storage is released.
    fn clone_from(&mut self, source: &Self) {
        let mut fresh = Vec::with_capacity(source.len());
        fresh.extend_from_slice(&source.data);
        self.data = fresh;
    }
}

impl FromStr for CharBuf {
    type Err = AllocationError;

    /// Copies the characters of `s` into a buffer sized exactly to the
    /// character count.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut buf = Self::with_capacity(s.chars().count())?;
        buf.data.extend(s.chars());
        Ok(buf)
    }
}

/// Buffers are equal iff they have the same length and the same characters
/// at every index. Capacity is not part of a buffer's value.
impl PartialEq for CharBuf {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for CharBuf {}

impl PartialEq<str> for CharBuf {
    fn eq(&self, other: &str) -> bool {
        self.chars().eq(other.chars())
    }
}

impl PartialEq<&str> for CharBuf {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl Index<usize> for CharBuf {
    type Output = char;

    fn index(&self, index: usize) -> &char {
        self.slot(index)
    }
}

impl IndexMut<usize> for CharBuf {
    fn index_mut(&mut self, index: usize) -> &mut char {
        self.at_mut(index)
    }
}

/// Fatal path for indexed access past the live range. Access with an invalid
/// index must never continue with a silently wrong value.
fn out_of_bounds(index: usize, len: usize) -> ! {
    panic!("index {index} out of bounds for buffer of length {len}")
}
