use crate::types::{
    BMP_SIGNATURE, FormatTag, GIF87A_SIGNATURE, GIF89A_SIGNATURE, JPEG_SIGNATURE, PNG_SIGNATURE,
    SNIFF_LEN,
};
use std::io::{self, Read};

/// Bytes pulled off the front of a stream for classification.
///
/// The bytes are kept so they can be replayed ahead of the remaining stream,
/// which lets extractors start reading from offset 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prefix {
    bytes: [u8; SNIFF_LEN],
    len: usize,
}

impl Prefix {
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Reader yielding the prefix bytes followed by `rest`.
    pub fn chain<R: Read>(&self, rest: R) -> io::Chain<&[u8], R> {
        self.as_slice().chain(rest)
    }
}

/// Reads up to [`SNIFF_LEN`] bytes, stopping early only at end of stream.
pub fn read_prefix<R: Read>(reader: &mut R) -> io::Result<Prefix> {
    let mut prefix = Prefix::default();
    while prefix.len < SNIFF_LEN {
        match reader.read(&mut prefix.bytes[prefix.len..]) {
            Ok(0) => break,
            Ok(n) => prefix.len += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(prefix)
}

/// Classifies a stream from its leading bytes.
///
/// Longer magics are tested first so a future format whose signature extends
/// a shorter one can't be shadowed by it.
#[must_use]
pub fn classify(prefix: &[u8]) -> FormatTag {
    if prefix.starts_with(&PNG_SIGNATURE) {
        FormatTag::Png
    } else if prefix.starts_with(&GIF87A_SIGNATURE) || prefix.starts_with(&GIF89A_SIGNATURE) {
        FormatTag::Gif
    } else if prefix.starts_with(&JPEG_SIGNATURE) {
        FormatTag::Jpeg
    } else if prefix.starts_with(&BMP_SIGNATURE) {
        FormatTag::Bmp
    } else {
        FormatTag::Unknown
    }
}
