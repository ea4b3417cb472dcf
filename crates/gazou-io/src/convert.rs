//! Channel conversion between decoded RGBA bytes and `Pixmap`
//!
//! Every decoder normalizes its output to 8-bit RGBA rows, and this
//! module maps that intermediate onto the requested channel layout:
//!
//! - 1 channel: luminance (Rec.601 integer weights; exact for gray sources)
//! - 3 channels: red, green, blue
//! - 4 channels: alpha, red, green, blue (alpha first)

use gazou_core::{Channels, Pixmap};

use crate::{IoError, IoResult};

/// Clamp a sample to the 0..=255 byte range for encoding.
#[inline]
pub(crate) fn clamp8(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Integer Rec.601 luminance of an 8-bit RGB triple.
#[inline]
pub(crate) fn luminance(r: u8, g: u8, b: u8) -> i32 {
    (299 * r as i32 + 587 * g as i32 + 114 * b as i32) / 1000
}

/// Build a pixmap with the requested channel layout from RGBA8 data
/// (4 bytes per pixel, row-major).
pub(crate) fn rgba_to_pixmap(
    width: u32,
    height: u32,
    rgba: &[u8],
    channels: Channels,
) -> IoResult<Pixmap> {
    let pixel_count = (width as usize) * (height as usize);
    if rgba.len() != pixel_count * 4 {
        return Err(IoError::InvalidData(format!(
            "RGBA buffer holds {} bytes, expected {}",
            rgba.len(),
            pixel_count * 4
        )));
    }

    let mut samples = Vec::with_capacity(pixel_count * channels.count() as usize);
    for px in rgba.chunks_exact(4) {
        let (r, g, b, a) = (px[0], px[1], px[2], px[3]);
        match channels {
            Channels::Gray => samples.push(luminance(r, g, b)),
            Channels::Rgb => samples.extend([r as i32, g as i32, b as i32]),
            Channels::Argb => samples.extend([a as i32, r as i32, g as i32, b as i32]),
        }
    }

    Pixmap::from_samples(width, height, channels, samples).map_err(IoError::Core)
}

/// Flatten a pixmap into RGBA8 data (4 bytes per pixel, row-major).
///
/// Gray samples replicate into R, G and B; 1- and 3-channel pixmaps get
/// an opaque alpha. Samples outside 0..=255 are clamped.
pub(crate) fn pixmap_to_rgba(pixmap: &Pixmap) -> Vec<u8> {
    let pixel_count = (pixmap.width() as usize) * (pixmap.height() as usize);
    let mut rgba = Vec::with_capacity(pixel_count * 4);

    match pixmap.channels() {
        Channels::Gray => {
            for &v in pixmap.samples() {
                let v = clamp8(v);
                rgba.extend([v, v, v, 255]);
            }
        }
        Channels::Rgb => {
            for px in pixmap.samples().chunks_exact(3) {
                rgba.extend([clamp8(px[0]), clamp8(px[1]), clamp8(px[2]), 255]);
            }
        }
        Channels::Argb => {
            for px in pixmap.samples().chunks_exact(4) {
                rgba.extend([clamp8(px[1]), clamp8(px[2]), clamp8(px[3]), clamp8(px[0])]);
            }
        }
    }

    rgba
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_gray_is_exact() {
        for v in [0u8, 1, 127, 200, 255] {
            assert_eq!(luminance(v, v, v), v as i32);
        }
    }

    #[test]
    fn test_rgba_to_gray() {
        let rgba = [10, 10, 10, 255, 255, 0, 0, 255];
        let pixmap = rgba_to_pixmap(2, 1, &rgba, Channels::Gray).unwrap();
        assert_eq!(pixmap.get_gray(0, 0).unwrap(), 10);
        // Pure red: 299 * 255 / 1000
        assert_eq!(pixmap.get_gray(1, 0).unwrap(), 76);
    }

    #[test]
    fn test_rgba_to_argb_alpha_first() {
        let rgba = [1, 2, 3, 4];
        let pixmap = rgba_to_pixmap(1, 1, &rgba, Channels::Argb).unwrap();
        assert_eq!(pixmap.get_argb(0, 0).unwrap(), [4, 1, 2, 3]);
    }

    #[test]
    fn test_pixmap_to_rgba_clamps() {
        let mut pixmap = Pixmap::new(1, 1, Channels::Rgb).unwrap();
        pixmap.set_rgb(0, 0, &[-5, 300, 128]).unwrap();
        assert_eq!(pixmap_to_rgba(&pixmap), vec![0, 255, 128, 255]);
    }

    #[test]
    fn test_rgba_length_check() {
        assert!(matches!(
            rgba_to_pixmap(2, 2, &[0u8; 15], Channels::Rgb),
            Err(IoError::InvalidData(_))
        ));
    }
}
