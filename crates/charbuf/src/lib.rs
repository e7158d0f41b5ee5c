//! A growable character buffer that manages its own backing storage.
//!
//! [`CharBuf`] owns a contiguous, heap-allocated run of [`char`]s and tracks
//! how much of it is live (`length`) versus merely reserved (`capacity`).
//! Capacity grows by doubling, so a long run of [`CharBuf::push`] calls costs
//! amortized O(1) per character. Every operation that allocates is fallible
//! and reports [`AllocationError`] instead of aborting, and every growth path
//! builds the new storage before releasing the old one, so a failed
//! allocation leaves the buffer exactly as it was.
//!
//! ```rust
//! use core::str::FromStr;
//!
//! use charbuf::{CharBuf, concat};
//!
//! let mut greeting = CharBuf::from_str("hi")?;
//! greeting.push('!')?;
//! assert_eq!(greeting, "hi!");
//!
//! let loud = concat(&greeting, &greeting)?;
//! assert_eq!(loud, "hi!hi!");
//! # Ok::<(), charbuf::AllocationError>(())
//! ```
//!
//! A `CharBuf` is a plain single-threaded value: it has no internal
//! synchronization, and sharing one across threads for mutation requires
//! external locking by the caller.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod concat;
mod error;
mod stream;

#[cfg(test)]
mod tests;

pub use buffer::CharBuf;
pub use concat::{concat, with_prefix, with_suffix};
pub use error::AllocationError;
