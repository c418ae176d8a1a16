use crate::error::Result;
use crate::io::ByteCursor;
use std::io::Read;

/// `BITMAPFILEHEADER` size: signature, file size, two reserved words, pixel offset.
pub const FILE_HEADER_LEN: u64 = 14;

/// Reads the extent from the DIB header that follows the file header.
///
/// Top-down bitmaps store a negative height; the magnitude is returned.
pub fn dimensions<R: Read>(cursor: &mut ByteCursor<R>) -> Result<(u32, u32)> {
    cursor.skip(FILE_HEADER_LEN)?;

    let _dib_len = cursor.read_u32_le()?;
    let width = cursor.read_u32_le()?;
    let height = cursor.read_i32_le()?;
    Ok((width, height.unsigned_abs()))
}
