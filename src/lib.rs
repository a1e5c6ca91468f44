//! A fixed-capacity ring buffer over caller-provided storage.
//!
//! The buffer never allocates and never blocks. A push into a full buffer
//! always succeeds by evicting the oldest item, which suits sample windows
//! where the newest data matters more than completeness.
//!
//! - [`Ringbuf`] stores `Copy` items in a typed slice or array.
//! - [`RawRingbuf`] stores opaque fixed-size records in a byte slice.
//! - [`ffi`] exposes [`RawRingbuf`] through a C ABI.

mod macros;

pub mod error;
pub mod ffi;
pub mod ringbuf;
pub mod status;

pub use ringbuf::raw::RawRingbuf;
pub use ringbuf::Ringbuf;
pub use status::Push;
pub use status::Status;
pub use status::StatusCode;
