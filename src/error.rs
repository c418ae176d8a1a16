use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stream truncated at offset {offset}: needed {needed} more bytes")]
    Truncated { offset: u64, needed: u64 },

    #[error("Invalid marker 0x{marker:04X} at offset {offset}")]
    InvalidMarker { offset: u64, marker: u16 },

    #[error("Expected IHDR chunk, found {found:?}")]
    UnexpectedChunk { found: [u8; 4] },

    #[error("Invalid segment length {length} at offset {offset}")]
    InvalidSegmentLength { offset: u64, length: u16 },

    #[error("Degenerate dimensions {width}x{height}")]
    DegenerateDimensions { width: u32, height: u32 },

    #[error("Unrecognized image format")]
    UnknownFormat,
}

impl ProbeError {
    /// Whether the error came from malformed or short input rather than the
    /// underlying reader failing.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;
