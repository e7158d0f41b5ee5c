//! Value-producing concatenation. Inputs are borrowed read-only and never
//! modified; each function returns a fresh buffer sized exactly to its
//! content, so no growth occurs while it is filled.

use crate::{buffer::CharBuf, error::AllocationError};

/// Returns a new buffer holding `lhs`'s characters followed by `rhs`'s.
///
/// # Errors
///
/// Returns [`AllocationError`] if storage for the combined length cannot be
/// allocated.
pub fn concat(lhs: &CharBuf, rhs: &CharBuf) -> Result<CharBuf, AllocationError> {
    let mut out = CharBuf::with_capacity(lhs.len() + rhs.len())?;
    out.append(lhs)?;
    out.append(rhs)?;
    Ok(out)
}

/// Returns a copy of `lhs` with `c` appended.
///
/// # Errors
///
/// Returns [`AllocationError`] if the allocation cannot be satisfied.
pub fn with_suffix(lhs: &CharBuf, c: char) -> Result<CharBuf, AllocationError> {
    let mut out = CharBuf::with_capacity(lhs.len() + 1)?;
    out.append(lhs)?;
    out.push(c)?;
    Ok(out)
}

/// Returns a new buffer with `c` at position 0 followed by `rhs`'s
/// characters in order.
///
/// # Errors
///
/// Returns [`AllocationError`] if the allocation cannot be satisfied.
pub fn with_prefix(c: char, rhs: &CharBuf) -> Result<CharBuf, AllocationError> {
    let mut out = CharBuf::with_capacity(rhs.len() + 1)?;
    out.push(c)?;
    out.append(rhs)?;
    Ok(out)
}
