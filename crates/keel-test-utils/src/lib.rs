//! Test fixtures and workload generators for Keel development.
//!
//! - [`AlignedBuffer`]: byte storage whose start is 8-byte aligned, so
//!   typed arena views of up to `u64` never fail on alignment.
//! - [`AllocWorkload`]: a deterministic, seeded mix of `(size, align)`
//!   allocation requests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod workload;

pub use workload::{AllocRequest, AllocWorkload};

/// Byte buffer backed by `u64` words.
///
/// Implements `AsRef<[u8]>`/`AsMut<[u8]>`, so an arena can own it directly
/// or borrow its bytes.
#[derive(Clone, Debug)]
pub struct AlignedBuffer {
    words: Vec<u64>,
}

impl AlignedBuffer {
    /// Alignment of the first byte.
    pub const ALIGN: usize = std::mem::align_of::<u64>();

    /// A zeroed buffer of at least `bytes` bytes (rounded up to whole words).
    pub fn new(bytes: usize) -> Self {
        Self {
            words: vec![0; bytes.div_ceil(8)],
        }
    }

    /// A buffer with every byte set to `byte`.
    pub fn filled(bytes: usize, byte: u8) -> Self {
        let mut buf = Self::new(bytes);
        buf.as_bytes_mut().fill(byte);
        buf
    }

    pub fn len(&self) -> usize {
        self.words.len() * 8
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.words)
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.words)
    }
}

impl AsRef<[u8]> for AlignedBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsMut<[u8]> for AlignedBuffer {
    fn as_mut(&mut self) -> &mut [u8] {
        self.as_bytes_mut()
    }
}
