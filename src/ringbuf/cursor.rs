use snafu::ensure;
use tracing::debug;

use crate::error;
use crate::error::Result;
use crate::status::Push;

/// The index bookkeeping of a ring buffer, independent of where the items
/// live.
///
/// ## The underlying structure
///
/// ```text
///        front                             rear
///          |                                 |
///          v                                 v
/// +--------+--------+--------+--------+--------+--------+
/// | slot 0 | slot 1 | slot 2 | slot 3 | slot 4 | slot 5 |
/// +--------+--------+--------+--------+--------+--------+
/// |<------>|
///   stride
/// |<------------------------ span ----------------------->|
/// ```
///
/// Offsets are measured in the unit of the owning buffer: bytes for
/// [`RawRingbuf`](super::raw::RawRingbuf), where `stride` is the item size,
/// and slots for [`Ringbuf`](super::Ringbuf), where `stride` is 1.
///
/// `front` is the oldest occupied slot and `rear` the newest. Both are
/// always a multiple of `stride` and less than `span`. They carry no
/// meaning while `count` is 0.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct Cursor {
    front: usize,
    rear: usize,
    count: usize,
    stride: usize,
    span: usize,
}

/// The raw fields of a [`Cursor`], as persisted in a caller-owned struct.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct CursorParts {
    pub front: usize,
    pub rear: usize,
    pub count: usize,
    pub stride: usize,
    pub span: usize,
}

impl Cursor {
    /// Creates an empty cursor over `span` units partitioned into slots of
    /// `stride` units.
    pub fn new(span: usize, stride: usize) -> Result<Self> {
        check_geometry(span, stride)?;

        // Push advances rear before writing, so park it on the last slot.
        let cursor = Cursor {
            front: 0,
            rear: span - stride,
            count: 0,
            stride,
            span,
        };

        cursor.log_geometry("initialized");

        Ok(cursor)
    }

    /// Rebuilds a cursor from previously persisted fields, rejecting any
    /// combination the state machine could not have produced.
    pub fn from_parts(parts: CursorParts) -> Result<Self> {
        let CursorParts {
            front,
            rear,
            count,
            stride,
            span,
        } = parts;

        check_geometry(span, stride)?;

        ensure!(
            front < span && front % stride == 0,
            error::InvalidArgumentSnafu {
                detail: format!(
                    "front offset {} is not a slot boundary within {}",
                    front, span
                ),
            }
        );
        ensure!(
            rear < span && rear % stride == 0,
            error::InvalidArgumentSnafu {
                detail: format!(
                    "rear offset {} is not a slot boundary within {}",
                    rear, span
                ),
            }
        );
        ensure!(
            count <= span / stride,
            error::InvalidArgumentSnafu {
                detail: format!(
                    "item count {} exceeds capacity {}",
                    count,
                    span / stride
                ),
            }
        );

        Ok(Cursor {
            front,
            rear,
            count,
            stride,
            span,
        })
    }

    pub fn parts(&self) -> CursorParts {
        CursorParts {
            front: self.front,
            rear: self.rear,
            count: self.count,
            stride: self.stride,
            span: self.span,
        }
    }

    /// Drops every buffered item. The geometry is kept.
    pub fn reset(&mut self) {
        self.front = 0;
        self.rear = self.span - self.stride;
        self.count = 0;

        self.log_geometry("reset");
    }

    /// Claims the slot after `rear` for a new item, evicting the oldest item
    /// if the buffer was already full. The caller must then fill the slot at
    /// [`Cursor::rear_index`].
    pub fn advance_rear(&mut self) -> Push {
        self.rear = self.next(self.rear);

        if self.is_full() {
            self.front = self.next(self.front);
            return Push::Overwritten;
        }

        self.count += 1;
        Push::Inserted
    }

    /// Releases the oldest slot and returns its offset, or `None` if the
    /// buffer is empty.
    pub fn take_front(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }

        let front = self.front;
        self.front = self.next(front);
        self.count -= 1;

        Some(front)
    }

    /// The offset of the oldest item.
    pub fn front(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.front)
    }

    /// The offset of the newest item.
    pub fn rear(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.rear)
    }

    pub fn front_index(&self) -> usize {
        self.front
    }

    pub fn rear_index(&self) -> usize {
        self.rear
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn capacity(&self) -> usize {
        self.span / self.stride
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    fn log_geometry(&self, event: &str) {
        debug!(
            "ringbuf {}, span: {}, stride: {}, capacity: {}",
            event,
            self.span,
            self.stride,
            self.capacity()
        );
    }

    fn next(&self, offset: usize) -> usize {
        (offset + self.stride) % self.span
    }
}

fn check_geometry(span: usize, stride: usize) -> Result<()> {
    ensure!(
        stride > 0,
        error::InvalidArgumentSnafu {
            detail: "item size must be greater than 0",
        }
    );
    ensure!(
        span > 0,
        error::InvalidArgumentSnafu {
            detail: "storage must hold at least one item",
        }
    );
    ensure!(
        span % stride == 0,
        error::IncompatibleSizeSnafu {
            storage_len: span,
            item_size: stride,
        }
    );

    Ok(())
}
