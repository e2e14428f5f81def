//! Bounds-checked byte image.

use crate::{ElfError, Result};

/// Read-only byte region for one input file.
///
/// All accessors validate offset and length against the image before
/// touching the bytes, so a malformed cross-reference surfaces as an
/// [`ElfError::OutOfBounds`] rather than a wild read.
#[derive(Clone, Debug)]
pub struct ByteImage {
    data: Vec<u8>,
}

impl ByteImage {
    #[must_use]
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Validate `[offset, offset + len)` and return it as a slice range.
    fn range(&self, offset: u64, len: u64) -> Result<std::ops::Range<usize>> {
        let size = self.data.len() as u64;
        let end = offset.checked_add(len).filter(|&end| end <= size);
        match end {
            Some(end) => Ok(offset as usize..end as usize),
            None => Err(ElfError::OutOfBounds { offset, len, size }),
        }
    }

    pub fn bytes(&self, offset: u64, len: u64) -> Result<&[u8]> {
        Ok(&self.data[self.range(offset, len)?])
    }

    pub fn u8_at(&self, offset: u64) -> Result<u8> {
        Ok(self.bytes(offset, 1)?[0])
    }

    pub fn u16_at(&self, offset: u64) -> Result<u16> {
        let b = self.bytes(offset, 2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn u32_at(&self, offset: u64) -> Result<u32> {
        let b = self.bytes(offset, 4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn u64_at(&self, offset: u64) -> Result<u64> {
        let b = self.bytes(offset, 8)?;
        Ok(u64::from_le_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }

    pub fn i64_at(&self, offset: u64) -> Result<i64> {
        Ok(self.u64_at(offset)? as i64)
    }

    /// Read the NUL-terminated string starting at `offset`.
    ///
    /// Returns a freshly owned string; a string that runs off the end of
    /// the image without a terminator is an error.
    pub fn cstr_at(&self, offset: u64) -> Result<String> {
        let size = self.data.len() as u64;
        if offset > size {
            return Err(ElfError::OutOfBounds {
                offset,
                len: 1,
                size,
            });
        }
        let tail = &self.data[offset as usize..];
        match tail.iter().position(|&b| b == 0) {
            Some(nul) => Ok(String::from_utf8_lossy(&tail[..nul]).into_owned()),
            None => Err(ElfError::UnterminatedString { offset }),
        }
    }
}
