//! PNG image format support

use crate::convert::{clamp8, rgba_to_pixmap};
use crate::{IoError, IoResult};
use gazou_core::{Channels, Pixmap};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image into a pixmap with the requested channel layout.
///
/// The decoder normalizes every PNG color type and bit depth to 8-bit
/// samples; indexed images are expanded through their palette.
pub fn read_png<R: BufRead + Seek>(reader: R, channels: Channels) -> IoResult<Pixmap> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = info.width;
    let height = info.height;
    let data = &buf[..info.buffer_size()];
    let line_size = info.line_size;

    let pixel_count = (width as usize) * (height as usize);
    let mut rgba = Vec::with_capacity(pixel_count * 4);

    match info.color_type {
        ColorType::Grayscale => {
            for row in data.chunks_exact(line_size) {
                for &g in &row[..width as usize] {
                    rgba.extend([g, g, g, 255]);
                }
            }
        }
        ColorType::GrayscaleAlpha => {
            for row in data.chunks_exact(line_size) {
                for px in row[..width as usize * 2].chunks_exact(2) {
                    rgba.extend([px[0], px[0], px[0], px[1]]);
                }
            }
        }
        ColorType::Rgb => {
            for row in data.chunks_exact(line_size) {
                for px in row[..width as usize * 3].chunks_exact(3) {
                    rgba.extend([px[0], px[1], px[2], 255]);
                }
            }
        }
        ColorType::Rgba => {
            for row in data.chunks_exact(line_size) {
                rgba.extend_from_slice(&row[..width as usize * 4]);
            }
        }
        other => {
            return Err(IoError::DecodeError(format!(
                "PNG color type {:?} survived normalization",
                other
            )));
        }
    }

    rgba_to_pixmap(width, height, &rgba, channels)
}

/// Write a pixmap as a PNG image.
///
/// The PNG color type follows the channel layout: gray pixmaps encode as
/// 8-bit grayscale, RGB as 8-bit color, ARGB as 8-bit color with alpha.
/// Samples outside 0..=255 are clamped.
pub fn write_png<W: Write>(pixmap: &Pixmap, writer: W) -> IoResult<()> {
    let color_type = match pixmap.channels() {
        Channels::Gray => ColorType::Grayscale,
        Channels::Rgb => ColorType::Rgb,
        Channels::Argb => ColorType::Rgba,
    };

    let mut encoder = Encoder::new(writer, pixmap.width(), pixmap.height());
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = Vec::with_capacity(pixmap.samples().len());
    match pixmap.channels() {
        Channels::Gray | Channels::Rgb => {
            data.extend(pixmap.samples().iter().map(|&v| clamp8(v)));
        }
        Channels::Argb => {
            // Stored alpha-first, PNG wants RGBA
            for px in pixmap.samples().chunks_exact(4) {
                data.extend([clamp8(px[1]), clamp8(px[2]), clamp8(px[3]), clamp8(px[0])]);
            }
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
