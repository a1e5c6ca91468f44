//! C ABI over [`RawRingbuf`].
//!
//! The caller allocates both the [`CircularBuffer`] struct and the storage it
//! points to. Each call rebuilds the ring buffer from the struct, runs the
//! operation and writes the indices back, so the C entry points share the
//! state machine of the Rust API.

use std::ffi::c_void;
use std::ptr;
use std::slice;

use snafu::ResultExt;
use tracing::warn;

use crate::convert_num;
use crate::error::Result;
use crate::ringbuf::cursor::Cursor;
use crate::ringbuf::cursor::CursorParts;
use crate::ringbuf::raw::RawRingbuf;
use crate::status::Status;
use crate::status::StatusCode;

/// The state of a ring buffer as seen from C.
///
/// Members should not be modified by the caller once initialized with
/// [`slot_ringbuf_init`].
#[repr(C)]
#[derive(Debug)]
pub struct CircularBuffer {
    pub array: *mut u8,
    pub front: u32,
    pub rear: u32,
    pub array_size: usize,
    pub item_size: usize,
    pub item_count: usize,
}

impl CircularBuffer {
    fn load(&self) -> Result<Cursor> {
        Cursor::from_parts(CursorParts {
            front: convert_num!(self.front, usize)?,
            rear: convert_num!(self.rear, usize)?,
            count: self.item_count,
            stride: self.item_size,
            span: self.array_size,
        })
    }

    fn new(array: *mut u8, cursor: &Cursor) -> Result<Self> {
        let parts = cursor.parts();

        Ok(Self {
            array,
            front: convert_num!(parts.front, u32)?,
            rear: convert_num!(parts.rear, u32)?,
            array_size: parts.span,
            item_size: parts.stride,
            item_count: parts.count,
        })
    }

    fn store(&mut self, cursor: &Cursor) -> Result<()> {
        *self = Self::new(self.array, cursor)?;
        Ok(())
    }
}

/// Initializes `buffer` over `storage_size` bytes at `storage`.
///
/// Returns `NullArgs` if a pointer is null, `Fail` if `storage_size` is not
/// a multiple of a non-zero `item_size`, otherwise `Ok`.
///
/// # Safety
///
/// `buffer` must be valid for writes. `storage` must be valid for reads and
/// writes of `storage_size` bytes for as long as `buffer` is in use.
#[no_mangle]
pub unsafe extern "C" fn slot_ringbuf_init(
    buffer: *mut CircularBuffer,
    storage: *mut u8,
    storage_size: usize,
    item_size: usize,
) -> StatusCode {
    if buffer.is_null() || storage.is_null() {
        return StatusCode::NullArgs;
    }

    let initialized = Cursor::new(storage_size, item_size)
        .and_then(|cursor| CircularBuffer::new(storage, &cursor));

    match initialized {
        Ok(initialized) => {
            // The struct may be uninitialized, write it without reading.
            unsafe { buffer.write(initialized) };
            StatusCode::Ok
        }
        Err(e) => {
            warn!("failed to init ringbuf: {}", e);
            StatusCode::Fail
        }
    }
}

/// Pushes `item_size` bytes read from `value`, overwriting the oldest item
/// when full.
///
/// Returns `NullArgs` if a pointer is null, `Overwritten` if the oldest item
/// was replaced, otherwise `Ok`.
///
/// # Safety
///
/// `buffer` must have been initialized by [`slot_ringbuf_init`] and `value`
/// must be valid for reads of `item_size` bytes, outside of the storage.
#[no_mangle]
pub unsafe extern "C" fn slot_ringbuf_push(
    buffer: *mut CircularBuffer,
    value: *const c_void,
) -> StatusCode {
    if buffer.is_null() || value.is_null() {
        return StatusCode::NullArgs;
    }

    unsafe {
        with_ringbuf(buffer, |ringbuf| {
            let value = slice::from_raw_parts(
                value as *const u8,
                ringbuf.item_size(),
            );
            ringbuf.push(value).map(Status::from)
        })
    }
}

/// Pops the oldest item into `value`.
///
/// Returns `NullArgs` if a pointer is null, `Empty` if there is nothing to
/// pop, otherwise `Ok`.
///
/// # Safety
///
/// `buffer` must have been initialized by [`slot_ringbuf_init`] and `value`
/// must be valid for writes of `item_size` bytes, outside of the storage.
#[no_mangle]
pub unsafe extern "C" fn slot_ringbuf_pop(
    buffer: *mut CircularBuffer,
    value: *mut c_void,
) -> StatusCode {
    if buffer.is_null() || value.is_null() {
        return StatusCode::NullArgs;
    }

    unsafe {
        with_ringbuf(buffer, |ringbuf| {
            let item_size = ringbuf.item_size();
            let out = slice::from_raw_parts_mut(value as *mut u8, item_size);
            ringbuf.pop(out)
        })
    }
}

/// Writes the number of buffered items into `size`.
///
/// Returns `NullArgs` if a pointer is null, `Empty` if the count is 0,
/// otherwise `Ok`.
///
/// # Safety
///
/// `buffer` must have been initialized by [`slot_ringbuf_init`] and `size`
/// must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn slot_ringbuf_size(
    buffer: *mut CircularBuffer,
    size: *mut usize,
) -> StatusCode {
    let Some(size) = (unsafe { size.as_mut() }) else {
        return StatusCode::NullArgs;
    };
    if buffer.is_null() {
        return StatusCode::NullArgs;
    }

    unsafe {
        with_ringbuf(buffer, |ringbuf| {
            let (len, status) = ringbuf.size();
            *size = len;
            Ok(status)
        })
    }
}

/// Copies the oldest item into `value` without removing it.
///
/// Returns `NullArgs` if a pointer is null, `Empty` if there is no item,
/// otherwise `Ok`.
///
/// # Safety
///
/// `buffer` must have been initialized by [`slot_ringbuf_init`] and `value`
/// must be valid for writes of `item_size` bytes.
#[no_mangle]
pub unsafe extern "C" fn slot_ringbuf_front(
    buffer: *mut CircularBuffer,
    value: *mut c_void,
) -> StatusCode {
    if buffer.is_null() || value.is_null() {
        return StatusCode::NullArgs;
    }

    unsafe {
        with_ringbuf(buffer, |ringbuf| {
            Ok(copy_out(ringbuf.front_slice(), value))
        })
    }
}

/// Copies the newest item into `value` without removing it.
///
/// Returns `NullArgs` if a pointer is null, `Empty` if there is no item,
/// otherwise `Ok`.
///
/// # Safety
///
/// `buffer` must have been initialized by [`slot_ringbuf_init`] and `value`
/// must be valid for writes of `item_size` bytes.
#[no_mangle]
pub unsafe extern "C" fn slot_ringbuf_rear(
    buffer: *mut CircularBuffer,
    value: *mut c_void,
) -> StatusCode {
    if buffer.is_null() || value.is_null() {
        return StatusCode::NullArgs;
    }

    unsafe {
        with_ringbuf(buffer, |ringbuf| {
            Ok(copy_out(ringbuf.rear_slice(), value))
        })
    }
}

/// Runs `op` against the ring buffer described by `buffer` and persists the
/// resulting indices.
///
/// # Safety
///
/// `buffer` must be non-null and initialized by [`slot_ringbuf_init`].
unsafe fn with_ringbuf<F>(buffer: *mut CircularBuffer, op: F) -> StatusCode
where
    F: FnOnce(&mut RawRingbuf<'_>) -> Result<Status>,
{
    let Some(buffer) = (unsafe { buffer.as_mut() }) else {
        return StatusCode::NullArgs;
    };
    if buffer.array.is_null() {
        return StatusCode::NullArgs;
    }

    let cursor = match buffer.load() {
        Ok(cursor) => cursor,
        Err(e) => {
            warn!("corrupt ringbuf state: {}", e);
            return StatusCode::Fail;
        }
    };

    let storage =
        unsafe { slice::from_raw_parts_mut(buffer.array, buffer.array_size) };
    let mut ringbuf = RawRingbuf::from_parts(storage, cursor);

    let status = match op(&mut ringbuf) {
        Ok(status) => status,
        Err(e) => return StatusCode::from(&e),
    };

    match buffer.store(ringbuf.cursor()) {
        Ok(()) => status.into(),
        Err(e) => StatusCode::from(&e),
    }
}

/// # Safety
///
/// `value` must be valid for writes of `slot.len()` bytes.
unsafe fn copy_out(slot: Option<&[u8]>, value: *mut c_void) -> Status {
    match slot {
        Some(slot) => {
            unsafe {
                ptr::copy(slot.as_ptr(), value as *mut u8, slot.len());
            }
            Status::Ok
        }
        None => Status::Empty,
    }
}
