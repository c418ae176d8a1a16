//! Forward-only cursor over a borrowed byte source.
//!
//! Extractors never seek: every field is pulled with an exact-length read and
//! uninteresting spans are skipped by draining them. A short read surfaces as
//! [`ProbeError::Truncated`] so callers can tell truncation apart from a
//! reader that genuinely failed.

use crate::error::{ProbeError, Result};
use std::io::{self, Read};

pub struct ByteCursor<R> {
    inner: R,
    offset: u64,
}

impl<R: Read> ByteCursor<R> {
    #[inline]
    pub const fn new(inner: R) -> Self {
        Self { inner, offset: 0 }
    }

    /// Number of bytes consumed so far.
    #[inline]
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    pub fn read_exact(&mut self, buffer: &mut [u8]) -> Result<()> {
        match self.inner.read_exact(buffer) {
            Ok(()) => {
                self.offset += buffer.len() as u64;
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(ProbeError::Truncated {
                offset: self.offset,
                needed: buffer.len() as u64,
            }),
            Err(e) => Err(ProbeError::Io(e)),
        }
    }

    #[inline]
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buffer = [0u8; N];
        self.read_exact(&mut buffer)?;
        Ok(buffer)
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    #[inline]
    pub fn read_u16_be(&mut self) -> Result<u16> {
        self.read_array().map(u16::from_be_bytes)
    }

    #[inline]
    pub fn read_u16_le(&mut self) -> Result<u16> {
        self.read_array().map(u16::from_le_bytes)
    }

    #[inline]
    pub fn read_u32_be(&mut self) -> Result<u32> {
        self.read_array().map(u32::from_be_bytes)
    }

    #[inline]
    pub fn read_u32_le(&mut self) -> Result<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    #[inline]
    pub fn read_i32_le(&mut self) -> Result<i32> {
        self.read_array().map(i32::from_le_bytes)
    }

    /// Discards exactly `count` bytes.
    pub fn skip(&mut self, count: u64) -> Result<()> {
        let copied = io::copy(&mut (&mut self.inner).take(count), &mut io::sink())?;
        self.offset += copied;
        if copied < count {
            return Err(ProbeError::Truncated {
                offset: self.offset,
                needed: count - copied,
            });
        }
        Ok(())
    }
}
