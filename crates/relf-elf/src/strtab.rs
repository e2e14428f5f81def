//! String-table resolution.

use crate::image::ByteImage;
use crate::{ElfError, Result};

/// Read the NUL-terminated string at `base + offset` within the image.
///
/// `base` is the file offset of a string-table section; `offset` is the
/// table-relative name offset stored in other records.
pub fn string_at(image: &ByteImage, base: u64, offset: u64) -> Result<String> {
    let start = base.checked_add(offset).ok_or(ElfError::OutOfBounds {
        offset: base,
        len: offset,
        size: image.len() as u64,
    })?;
    image.cstr_at(start)
}
