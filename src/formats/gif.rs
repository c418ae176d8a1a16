use crate::error::Result;
use crate::io::ByteCursor;
use crate::types::GIF89A_SIGNATURE;
use std::io::Read;

/// Reads the canvas size from the Logical Screen Descriptor.
pub fn dimensions<R: Read>(cursor: &mut ByteCursor<R>) -> Result<(u32, u32)> {
    cursor.skip(GIF89A_SIGNATURE.len() as u64)?;

    let width = cursor.read_u16_le()?;
    let height = cursor.read_u16_le()?;
    Ok((u32::from(width), u32::from(height)))
}
