//! Reads the pixel width and height of JPEG, PNG, GIF and BMP streams from
//! their headers, without decoding image data.
//!
//! ```
//! let gif = b"GIF89a\x40\x01\xC8\x00";
//! let size = imgdims::get_dimensions_from_bytes(gif);
//! assert_eq!(size.dimensions(), Some((320, 200)));
//! ```

pub mod cli;
mod error;
pub mod formats;
pub mod io;
mod probe;
pub mod sniff;
mod types;

pub use error::{ProbeError, Result};
pub use probe::{Probed, get_dimensions, get_dimensions_from_bytes, try_get_dimensions};
pub use sniff::classify;
pub use types::{FormatTag, ImageSize, SNIFF_LEN};
