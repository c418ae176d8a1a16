//! Sniff-then-extract entry points.

use crate::error::{ProbeError, Result};
use crate::formats;
use crate::io::ByteCursor;
use crate::sniff::{classify, read_prefix};
use crate::types::{FormatTag, ImageSize};
use std::io::Read;

/// Outcome of a successful probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probed {
    pub format: FormatTag,
    pub width: u32,
    pub height: u32,
}

impl Probed {
    #[inline]
    #[must_use]
    pub const fn size(&self) -> ImageSize {
        ImageSize::new(self.width, self.height)
    }
}

/// Probes `reader`, reporting why it failed when it does.
///
/// The reader must be positioned at the start of the image. It is only read
/// from, never retained; closing it stays with the caller. Unknown formats
/// return after the sniff prefix without reading further.
pub fn try_get_dimensions<R: Read>(reader: &mut R) -> Result<Probed> {
    let prefix = read_prefix(reader)?;
    let format = classify(prefix.as_slice());
    if format == FormatTag::Unknown {
        return Err(ProbeError::UnknownFormat);
    }

    let mut cursor = ByteCursor::new(prefix.chain(reader));
    let (width, height) = formats::extract(format, &mut cursor)?;
    if width == 0 || height == 0 {
        return Err(ProbeError::DegenerateDimensions { width, height });
    }

    Ok(Probed {
        format,
        width,
        height,
    })
}

/// Probes `reader` for its pixel extent.
///
/// Truncated, malformed, unrecognized or zero-sized input, as well as read
/// failures of the underlying stream, all yield [`ImageSize::invalid`].
pub fn get_dimensions<R: Read>(reader: &mut R) -> ImageSize {
    try_get_dimensions(reader).map_or(ImageSize::invalid(), |probed| probed.size())
}

/// In-memory variant of [`get_dimensions`].
#[must_use]
pub fn get_dimensions_from_bytes(data: &[u8]) -> ImageSize {
    let mut reader = data;
    get_dimensions(&mut reader)
}
