pub(crate) mod cursor;
pub mod raw;

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use cursor::Cursor;
use tracing::trace;

use crate::error::Result;
use crate::status::Push;
use crate::status::Status;

/// A fixed-capacity FIFO of `T` that overwrites its oldest item when full.
///
/// The storage `S` is supplied by the caller and is never resized. It can be
/// borrowed (`&mut [T]`) to keep ownership with the caller, or owned
/// (`[T; N]`, `Vec<T>`, `Box<[T]>`). Its initial contents are ignored, every
/// slot is written by [`Ringbuf::push`] before it is ever read.
///
/// ```
/// use slot_ringbuf::Push;
/// use slot_ringbuf::Ringbuf;
///
/// let mut storage = [0u32; 3];
/// let mut ringbuf = Ringbuf::new(&mut storage[..]).unwrap();
///
/// assert_eq!(ringbuf.push(1), Push::Inserted);
/// assert_eq!(ringbuf.push(2), Push::Inserted);
/// assert_eq!(ringbuf.push(3), Push::Inserted);
/// assert_eq!(ringbuf.push(4), Push::Overwritten);
///
/// assert_eq!(ringbuf.pop(), Some(2));
/// assert_eq!(ringbuf.front(), Some(3));
/// assert_eq!(ringbuf.rear(), Some(4));
/// ```
pub struct Ringbuf<T, S> {
    storage: S,
    cursor: Cursor,
    _item: PhantomData<T>,
}

impl<T, S> Ringbuf<T, S>
where
    T: Copy,
    S: AsRef<[T]> + AsMut<[T]>,
{
    /// Creates an empty ring buffer holding up to `storage.len()` items.
    ///
    /// Fails with [`InvalidArgument`](crate::error::Error::InvalidArgument)
    /// if the storage has no slot.
    pub fn new(storage: S) -> Result<Self> {
        let cursor = Cursor::new(storage.as_ref().len(), 1)?;

        Ok(Self {
            storage,
            cursor,
            _item: PhantomData,
        })
    }

    /// Pushes `value` to the rear. When the buffer is full the oldest item is
    /// dropped to make room and [`Push::Overwritten`] is returned.
    pub fn push(&mut self, value: T) -> Push {
        let push = self.cursor.advance_rear();
        if push.is_overwritten() {
            trace!(
                "ringbuf full, evicted the oldest item, capacity: {}",
                self.capacity()
            );
        }

        let rear = self.cursor.rear_index();
        self.storage.as_mut()[rear] = value;

        push
    }

    /// Removes and returns the oldest item.
    pub fn pop(&mut self) -> Option<T> {
        let front = self.cursor.take_front()?;
        Some(self.storage.as_ref()[front])
    }

    /// Returns the oldest item without removing it.
    pub fn front(&self) -> Option<T> {
        self.front_ref().copied()
    }

    /// Returns the newest item without removing it.
    pub fn rear(&self) -> Option<T> {
        self.rear_ref().copied()
    }

    pub fn front_ref(&self) -> Option<&T> {
        self.cursor.front().map(|i| &self.storage.as_ref()[i])
    }

    pub fn rear_ref(&self) -> Option<&T> {
        self.cursor.rear().map(|i| &self.storage.as_ref()[i])
    }

    /// Returns the number of buffered items, along with [`Status::Empty`]
    /// when it is 0.
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

    pub fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cursor.is_full()
    }

    /// Discards every buffered item, as if the buffer was just created.
    pub fn clear(&mut self) {
        self.cursor.reset();
    }

    /// Iterates from the oldest to the newest item without consuming them.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            items: self.storage.as_ref(),
            cursor: self.cursor,
        }
    }

    /// Pops every item, oldest first. Items not yielded are still removed
    /// when the iterator is dropped.
    pub fn drain(&mut self) -> Drain<'_, T, S> {
        Drain { ringbuf: self }
    }

    /// Gives the storage back to the caller.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

impl<T, S> Extend<T> for Ringbuf<T, S>
where
    T: Copy,
    S: AsRef<[T]> + AsMut<[T]>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            let _ = self.push(value);
        }
    }
}

impl<T, S> fmt::Debug for Ringbuf<T, S>
where
    T: Copy + fmt::Debug,
    S: AsRef<[T]> + AsMut<[T]>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, S> IntoIterator for &'a Ringbuf<T, S>
where
    T: Copy,
    S: AsRef<[T]> + AsMut<[T]>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A non-destructive iterator over the items of a [`Ringbuf`], oldest first.
pub struct Iter<'a, T> {
    items: &'a [T],
    cursor: Cursor,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let front = self.cursor.take_front()?;
        Some(&self.items[front])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cursor.len(), Some(self.cursor.len()))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// A draining iterator over a [`Ringbuf`], see [`Ringbuf::drain`].
pub struct Drain<'a, T, S>
where
    T: Copy,
    S: AsRef<[T]> + AsMut<[T]>,
{
    ringbuf: &'a mut Ringbuf<T, S>,
}

impl<T, S> Iterator for Drain<'_, T, S>
where
    T: Copy,
    S: AsRef<[T]> + AsMut<[T]>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.ringbuf.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.ringbuf.len(), Some(self.ringbuf.len()))
    }
}

impl<T, S> Drop for Drain<'_, T, S>
where
    T: Copy,
    S: AsRef<[T]> + AsMut<[T]>,
{
    fn drop(&mut self) {
        self.ringbuf.clear();
    }
}
