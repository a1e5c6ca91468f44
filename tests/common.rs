#![allow(dead_code)]

use slot_ringbuf::RawRingbuf;
use slot_ringbuf::Status;
use tracing_subscriber::EnvFilter;

pub const BUFFER_SIZE_BYTES: usize = 20;
pub const ITEM_SIZE: usize = std::mem::size_of::<u32>();
pub const BUFFER_SIZE_ITEMS: usize = BUFFER_SIZE_BYTES / ITEM_SIZE;
pub const NONDIVISIBLE_BUFFER_SIZE_BYTES: usize = 11;
pub const RANDOM_VALUE: u32 = 108;
pub const DIFFERENT_RANDOM_VALUE: u32 = 12345;

/// A three-component record, stored as opaque bytes.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Vector {
    pub i: u32,
    pub j: u32,
    pub k: u32,
}

impl Vector {
    pub const SIZE: usize = std::mem::size_of::<Vector>();

    pub fn new(i: u32) -> Self {
        Self {
            i,
            j: i + 1,
            k: i + 2,
        }
    }

    pub fn to_bytes(self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.i.to_ne_bytes());
        bytes[4..8].copy_from_slice(&self.j.to_ne_bytes());
        bytes[8..12].copy_from_slice(&self.k.to_ne_bytes());
        bytes
    }

    pub fn from_bytes(bytes: [u8; Self::SIZE]) -> Self {
        let field = |at: usize| {
            u32::from_ne_bytes([
                bytes[at],
                bytes[at + 1],
                bytes[at + 2],
                bytes[at + 3],
            ])
        };

        Self {
            i: field(0),
            j: field(4),
            k: field(8),
        }
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn push_u32(ringbuf: &mut RawRingbuf<'_>, value: u32) -> slot_ringbuf::Push {
    ringbuf.push(&value.to_ne_bytes()).unwrap()
}

pub fn pop_u32(ringbuf: &mut RawRingbuf<'_>) -> Option<u32> {
    let mut out = [0u8; ITEM_SIZE];
    match ringbuf.pop(&mut out).unwrap() {
        Status::Ok => Some(u32::from_ne_bytes(out)),
        Status::Empty => None,
        Status::Overwritten => unreachable!(),
    }
}

pub fn fill_with(ringbuf: &mut RawRingbuf<'_>, value: u32) {
    for _ in 0..ringbuf.capacity() {
        let _ = push_u32(ringbuf, value);
    }
}
