//! gazou-io - Image file I/O for the Gazou image processing library
//!
//! A thin wrapper over registry codec crates that decodes image files
//! into [`Pixmap`]s and encodes them back:
//!
//! - PNG via the `png` crate
//! - JPEG via `jpeg-decoder` / `jpeg-encoder`
//!
//! Reading detects the format by magic number; writing infers it from
//! the target path's extension. The requested channel layout governs
//! the decoded pixmap: 1 channel reads luminance, 3 reads R,G,B and
//! 4 reads A,R,G,B with alpha first.

mod convert;
mod error;
mod format;
pub mod jpeg;
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
pub use jpeg::{read_jpeg, write_jpeg};
pub use png::{read_png, write_png};

use gazou_core::{Channels, Pixmap};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read an image file into a pixmap with the requested channel layout.
///
/// The format is detected from the file's magic number.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be opened,
/// [`IoError::UnsupportedFormat`] if it is not a supported format, and
/// [`IoError::DecodeError`] if decoding fails.
pub fn read_image<P: AsRef<Path>>(path: P, channels: Channels) -> IoResult<Pixmap> {
    let format = format::detect_format(&path)?;
    let reader = BufReader::new(File::open(&path).map_err(IoError::Io)?);
    match format {
        ImageFormat::Png => png::read_png(reader, channels),
        ImageFormat::Jpeg => jpeg::read_jpeg(reader, channels),
    }
}

/// Read an image file into a 3-channel (RGB) pixmap.
///
/// # Errors
///
/// Same as [`read_image`].
pub fn read_image_rgb<P: AsRef<Path>>(path: P) -> IoResult<Pixmap> {
    read_image(path, Channels::Rgb)
}

/// Write a pixmap to an image file.
///
/// The format is inferred from the path's extension (`.png`, `.jpg`,
/// `.jpeg`, case-insensitive).
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for an unrecognized extension,
/// [`IoError::Io`] if the file cannot be created, and
/// [`IoError::EncodeError`] if encoding fails.
pub fn write_image<P: AsRef<Path>>(pixmap: &Pixmap, path: P) -> IoResult<()> {
    let format = ImageFormat::from_path(&path)?;
    let writer = BufWriter::new(File::create(&path).map_err(IoError::Io)?);
    match format {
        ImageFormat::Png => png::write_png(pixmap, writer),
        ImageFormat::Jpeg => jpeg::write_jpeg(pixmap, writer),
    }
}
