use serde::Serialize;

pub const JPEG_SIGNATURE: [u8; 2] = [0xFF, 0xD8];
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
pub const GIF87A_SIGNATURE: [u8; 6] = *b"GIF87a";
pub const GIF89A_SIGNATURE: [u8; 6] = *b"GIF89a";
pub const BMP_SIGNATURE: [u8; 2] = *b"BM";

/// Longest magic sequence any supported format needs to be recognised.
pub const SNIFF_LEN: usize = PNG_SIGNATURE.len();

/// Pixel extent of a probed image.
///
/// A size is either valid, in which case both sides are non-zero, or
/// invalid, in which case `width` and `height` are zero and carry no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ImageSize {
    width: u32,
    height: u32,
    valid: bool,
}

impl ImageSize {
    /// Builds a size, marking it invalid if either side is zero.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            return Self::invalid();
        }
        Self {
            width,
            height,
            valid: true,
        }
    }

    #[must_use]
    pub const fn invalid() -> Self {
        Self {
            width: 0,
            height: 0,
            valid: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub const fn dimensions(&self) -> Option<(u32, u32)> {
        if self.valid {
            Some((self.width, self.height))
        } else {
            None
        }
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.dimensions() {
            Some((w, h)) => write!(f, "{w}x{h}"),
            None => write!(f, "invalid"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatTag {
    Jpeg,
    Png,
    Gif,
    Bmp,
    Unknown,
}

impl FormatTag {
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::Unknown => "bin",
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
            Self::Gif => "GIF",
            Self::Bmp => "BMP",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for FormatTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
