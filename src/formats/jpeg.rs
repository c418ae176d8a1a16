use crate::error::{ProbeError, Result};
use crate::io::ByteCursor;
use crate::types::JPEG_SIGNATURE;
use std::io::Read;

pub const SOI: u8 = 0xD8;
pub const EOI: u8 = 0xD9;
pub const TEM: u8 = 0x01;
pub const DHT: u8 = 0xC4;
pub const JPG: u8 = 0xC8;
pub const DAC: u8 = 0xCC;
pub const RST0: u8 = 0xD0;
pub const RST7: u8 = 0xD7;

#[inline]
pub const fn is_restart_marker(marker: u8) -> bool {
    marker >= RST0 && marker <= RST7
}

/// SOFn markers. C4, C8 and CC share the range but carry no frame header.
#[inline]
pub const fn is_sof_marker(marker: u8) -> bool {
    matches!(marker, 0xC0..=0xCF) && !matches!(marker, DHT | JPG | DAC)
}

/// Markers that stand alone with no length field following them.
#[inline]
pub const fn is_standalone_marker(marker: u8) -> bool {
    matches!(marker, SOI | EOI | TEM) || is_restart_marker(marker)
}

/// Reads the next marker code, collapsing any run of `0xFF` fill bytes.
fn read_marker<R: Read>(cursor: &mut ByteCursor<R>) -> Result<u8> {
    let offset = cursor.offset();
    let [prefix, mut code] = cursor.read_array::<2>()?;
    if prefix != 0xFF {
        return Err(ProbeError::InvalidMarker {
            offset,
            marker: u16::from_be_bytes([prefix, code]),
        });
    }
    while code == 0xFF {
        code = cursor.read_u8()?;
    }
    Ok(code)
}

/// Walks marker segments until the first frame header and returns its extent.
pub fn dimensions<R: Read>(cursor: &mut ByteCursor<R>) -> Result<(u32, u32)> {
    let soi = cursor.read_array::<2>()?;
    if soi != JPEG_SIGNATURE {
        return Err(ProbeError::InvalidMarker {
            offset: 0,
            marker: u16::from_be_bytes(soi),
        });
    }

    loop {
        let offset = cursor.offset();
        let marker = read_marker(cursor)?;

        if is_standalone_marker(marker) {
            continue;
        }

        let length = cursor.read_u16_be()?;
        if length < 2 {
            return Err(ProbeError::InvalidSegmentLength { offset, length });
        }

        if is_sof_marker(marker) {
            let _precision = cursor.read_u8()?;
            let height = cursor.read_u16_be()?;
            let width = cursor.read_u16_be()?;
            return Ok((u32::from(width), u32::from(height)));
        }

        cursor.skip(u64::from(length - 2))?;
    }
}
