use alloc::collections::TryReserveError;

use thiserror::Error;

/// The backing allocator could not satisfy a storage request.
///
/// Returned by every operation that may allocate: construction with a
/// requested capacity, growth during a push or append, explicit reservation,
/// and value-producing concatenation. The buffer the operation was invoked on
/// is left in its prior state; no partial mutation is observable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("buffer allocation failed: {0}")]
pub struct AllocationError(#[from] TryReserveError);
