//! JPEG image format support

use crate::convert::{clamp8, rgba_to_pixmap};
use crate::{IoError, IoResult};
use gazou_core::{Channels, Pixmap};
use jpeg_decoder::PixelFormat;
use jpeg_encoder::ColorType;
use std::io::{Read, Write};

/// Encoding quality (1-100). Matches the common "high quality" default of
/// host codec libraries.
const JPEG_QUALITY: u8 = 90;

/// Read a JPEG image into a pixmap with the requested channel layout.
///
/// JPEG has no alpha channel; a 4-channel read gets an opaque alpha.
pub fn read_jpeg<R: Read>(reader: R, channels: Channels) -> IoResult<Pixmap> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG header info".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    let pixel_count = (width as usize) * (height as usize);
    let mut rgba = Vec::with_capacity(pixel_count * 4);

    match info.pixel_format {
        PixelFormat::L8 => {
            for &g in &pixels {
                rgba.extend([g, g, g, 255]);
            }
        }
        PixelFormat::RGB24 => {
            for px in pixels.chunks_exact(3) {
                rgba.extend([px[0], px[1], px[2], 255]);
            }
        }
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    }

    rgba_to_pixmap(width, height, &rgba, channels)
}

/// Write a pixmap as a JPEG image.
///
/// Gray pixmaps encode as luminance, RGB as color. ARGB pixmaps encode
/// as color with the alpha samples dropped (JPEG cannot carry alpha).
/// Samples outside 0..=255 are clamped.
pub fn write_jpeg<W: Write>(pixmap: &Pixmap, mut writer: W) -> IoResult<()> {
    let width = u16::try_from(pixmap.width()).map_err(|_| {
        IoError::EncodeError(format!("width {} exceeds JPEG limit", pixmap.width()))
    })?;
    let height = u16::try_from(pixmap.height()).map_err(|_| {
        IoError::EncodeError(format!("height {} exceeds JPEG limit", pixmap.height()))
    })?;

    let (data, color_type): (Vec<u8>, ColorType) = match pixmap.channels() {
        Channels::Gray => (
            pixmap.samples().iter().map(|&v| clamp8(v)).collect(),
            ColorType::Luma,
        ),
        Channels::Rgb => (
            pixmap.samples().iter().map(|&v| clamp8(v)).collect(),
            ColorType::Rgb,
        ),
        Channels::Argb => {
            // Alpha-first storage; alpha is dropped
            let mut rgb = Vec::with_capacity(pixmap.samples().len() / 4 * 3);
            for px in pixmap.samples().chunks_exact(4) {
                rgb.extend([clamp8(px[1]), clamp8(px[2]), clamp8(px[3])]);
            }
            (rgb, ColorType::Rgb)
        }
    };

    let mut buffer = Vec::new();
    let encoder = jpeg_encoder::Encoder::new(&mut buffer, JPEG_QUALITY);
    encoder
        .encode(&data, width, height, color_type)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))?;

    writer.write_all(&buffer).map_err(IoError::Io)?;
    Ok(())
}
