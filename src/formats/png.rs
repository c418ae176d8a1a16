use crate::error::{ProbeError, Result};
use crate::io::ByteCursor;
use crate::types::PNG_SIGNATURE;
use std::io::Read;

pub const IHDR_CHUNK_TYPE: &[u8; 4] = b"IHDR";

/// Reads width and height from the leading `IHDR` chunk.
///
/// The chunk length and CRC are not checked; only the first eight bytes of
/// chunk data are consumed.
pub fn dimensions<R: Read>(cursor: &mut ByteCursor<R>) -> Result<(u32, u32)> {
    cursor.skip(PNG_SIGNATURE.len() as u64)?;

    let _length = cursor.read_u32_be()?;
    let chunk_type = cursor.read_array::<4>()?;
    if &chunk_type != IHDR_CHUNK_TYPE {
        return Err(ProbeError::UnexpectedChunk { found: chunk_type });
    }

    let width = cursor.read_u32_be()?;
    let height = cursor.read_u32_be()?;
    Ok((width, height))
}
