use snafu::ensure;

use super::cursor::Cursor;
use crate::error;
use crate::error::Result;
use crate::status::Push;
use crate::status::Status;

/// A ring buffer of opaque fixed-size records laid over a caller-provided
/// block of bytes.
///
/// ## The underlying structure
///
/// ```text
///  front_offset                      rear_offset
///       |                                 |
///       v                                 v
/// +-----------+-----------+-----------+-----------+-----------+
/// | item 0    | item 1    | item 2    | item 3    | free      |
/// +-----------+-----------+-----------+-----------+-----------+
/// | item_size | item_size | item_size | item_size | item_size |
/// +-----------+-----------+-----------+-----------+-----------+
/// ```
///
/// The storage is borrowed for the whole lifetime of the buffer and is never
/// reallocated. The buffer knows nothing about the records beyond their
/// size. Every read and write copies exactly `item_size` bytes.
pub struct RawRingbuf<'a> {
    storage: &'a mut [u8],
    cursor: Cursor,
}

impl<'a> RawRingbuf<'a> {
    /// Initializes a ring buffer over `storage`, holding
    /// `storage.len() / item_size` items.
    ///
    /// Fails with [`IncompatibleSize`](error::Error::IncompatibleSize) if the
    /// storage length is not a multiple of `item_size`, and with
    /// [`InvalidArgument`](error::Error::InvalidArgument) if either is zero.
    pub fn new(storage: &'a mut [u8], item_size: usize) -> Result<Self> {
        let cursor = Cursor::new(storage.len(), item_size)?;

        Ok(Self { storage, cursor })
    }

    pub(crate) fn from_parts(storage: &'a mut [u8], cursor: Cursor) -> Self {
        Self { storage, cursor }
    }

    pub(crate) fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Re-initializes the buffer over the same storage. Buffered items are
    /// discarded, the bytes of the storage are left as they are.
    ///
    /// On failure the previous state is kept.
    pub fn reinit(&mut self, item_size: usize) -> Result<()> {
        self.cursor = Cursor::new(self.storage.len(), item_size)?;
        Ok(())
    }

    /// Pushes a record to the rear of the buffer. When the buffer is full the
    /// oldest record is overwritten and [`Push::Overwritten`] is returned.
    pub fn push(&mut self, value: &[u8]) -> Result<Push> {
        self.check_item_len(value.len())?;

        let push = self.cursor.advance_rear();
        let rear = self.cursor.rear_index();
        self.slot_mut(rear).copy_from_slice(value);

        Ok(push)
    }

    /// Pops the oldest record into `out`. Returns [`Status::Empty`] and
    /// leaves `out` untouched if there is nothing to pop.
    pub fn pop(&mut self, out: &mut [u8]) -> Result<Status> {
        self.check_item_len(out.len())?;

        let Some(front) = self.cursor.take_front() else {
            return Ok(Status::Empty);
        };
        out.copy_from_slice(self.slot(front));

        Ok(Status::Ok)
    }

    /// Copies the oldest record into `out` without removing it.
    pub fn front(&self, out: &mut [u8]) -> Result<Status> {
        self.check_item_len(out.len())?;

        match self.front_slice() {
            Some(slot) => {
                out.copy_from_slice(slot);
                Ok(Status::Ok)
            }
            None => Ok(Status::Empty),
        }
    }

    /// Copies the newest record into `out` without removing it.
    pub fn rear(&self, out: &mut [u8]) -> Result<Status> {
        self.check_item_len(out.len())?;

        match self.rear_slice() {
            Some(slot) => {
                out.copy_from_slice(slot);
                Ok(Status::Ok)
            }
            None => Ok(Status::Empty),
        }
    }

    pub fn front_slice(&self) -> Option<&[u8]> {
        self.cursor.front().map(|offset| self.slot(offset))
    }

    pub fn rear_slice(&self) -> Option<&[u8]> {
        self.cursor.rear().map(|offset| self.slot(offset))
    }

    /// Returns the number of buffered records, along with
    /// [`Status::Empty`] when it is 0.
    pub fn size(&self) -> (usize, Status) {
        let len = self.len();
        let status = if len == 0 { Status::Empty } else { Status::Ok };

        (len, status)
    }

    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    pub fn capacity(&self) -> usize {
        self.cursor.capacity()
    }

    pub fn item_size(&self) -> usize {
        self.cursor.stride()
    }

    pub fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cursor.is_full()
    }

    /// The byte offset of the oldest slot in the storage.
    pub fn front_offset(&self) -> usize {
        self.cursor.front_index()
    }

    /// The byte offset of the newest slot in the storage.
    pub fn rear_offset(&self) -> usize {
        self.cursor.rear_index()
    }

    fn check_item_len(&self, len: usize) -> Result<()> {
        ensure!(
            len == self.item_size(),
            error::InvalidArgumentSnafu {
                detail: format!(
                    "expected a record of {} bytes, got {}",
                    self.item_size(),
                    len
                ),
            }
        );

        Ok(())
    }

    fn slot(&self, offset: usize) -> &[u8] {
        &self.storage[offset..offset + self.item_size()]
    }

    fn slot_mut(&mut self, offset: usize) -> &mut [u8] {
        let item_size = self.item_size();
        &mut self.storage[offset..offset + item_size]
    }
}
