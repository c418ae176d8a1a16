//! Per-format dimension extractors.
//!
//! Each extractor receives a cursor positioned at offset 0 of a stream already
//! classified as its format and returns the raw `(width, height)` pair stored
//! in the header. Zero extents are reported as-is; rejecting them is the
//! caller's job.

pub mod bmp;
pub mod gif;
pub mod jpeg;
pub mod png;

use crate::error::{ProbeError, Result};
use crate::io::ByteCursor;
use crate::types::FormatTag;
use std::io::Read;

/// Runs the extractor matching `format`.
///
/// `Unknown` never touches the cursor.
pub fn extract<R: Read>(format: FormatTag, cursor: &mut ByteCursor<R>) -> Result<(u32, u32)> {
    match format {
        FormatTag::Jpeg => jpeg::dimensions(cursor),
        FormatTag::Png => png::dimensions(cursor),
        FormatTag::Gif => gif::dimensions(cursor),
        FormatTag::Bmp => bmp::dimensions(cursor),
        FormatTag::Unknown => Err(ProbeError::UnknownFormat),
    }
}
