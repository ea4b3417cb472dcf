//! Pixmap - channel-typed pixel buffer
//!
//! `Pixmap` is the fundamental image container in Gazou. It holds one
//! `i32` sample per pixel per channel in a single flat vector.
//!
//! # Sample layout
//!
//! - Row-major, channel-interleaved: all samples of one pixel are adjacent
//! - The sample for pixel (x, y), channel k, sits at
//!   `(y * width + x) * channels + k`
//! - 4-channel pixels are ordered alpha, red, green, blue (alpha first)
//!
//! # Ownership model
//!
//! `Pixmap` owns its samples. `Clone` duplicates the sample storage, so a
//! clone can be mutated without affecting the original.

use crate::error::{Error, Result};

/// Samples per pixel
///
/// Discriminates the three supported channel layouts. The discriminant is
/// the raw sample count, so `Channels::Rgb as u32 == 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Channels {
    /// Single intensity or index sample
    Gray = 1,
    /// Red, green, blue
    Rgb = 3,
    /// Alpha, red, green, blue (alpha first)
    Argb = 4,
}

impl Channels {
    /// Create `Channels` from a raw sample count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannelCount`] if `count` is not 1, 3 or 4.
    pub fn from_count(count: u32) -> Result<Self> {
        match count {
            1 => Ok(Channels::Gray),
            3 => Ok(Channels::Rgb),
            4 => Ok(Channels::Argb),
            _ => Err(Error::InvalidChannelCount(count)),
        }
    }

    /// Get the number of samples per pixel.
    pub fn count(self) -> u32 {
        self as u32
    }
}

/// Pixmap - channel-typed pixel buffer
///
/// A fixed-size rectangular array of integer samples. Accessors are
/// discriminated by channel layout: a 1-channel pixmap is read through
/// [`Pixmap::get_gray`], a 3-channel one through [`Pixmap::get_rgb`], a
/// 4-channel one through [`Pixmap::get_argb`]. Calling a mismatched
/// accessor fails with [`Error::ChannelMismatch`].
///
/// Samples are `i32` so that intermediate results of numeric filters can
/// leave the 0..=255 range without wrapping.
///
/// # Examples
///
/// ```
/// use gazou_core::{Channels, Pixmap};
///
/// let mut pixmap = Pixmap::new(640, 480, Channels::Rgb).unwrap();
/// pixmap.set_rgb(10, 20, &[255, 128, 0]).unwrap();
/// assert_eq!(pixmap.get_rgb(10, 20).unwrap(), [255, 128, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct Pixmap {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Samples per pixel
    channels: Channels,
    /// Sample data (row-major, channel-interleaved, no padding)
    samples: Vec<i32>,
}

impl Pixmap {
    /// Create a new pixmap with all samples set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width` or `height` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use gazou_core::{Channels, Pixmap};
    ///
    /// let pixmap = Pixmap::new(640, 480, Channels::Gray).unwrap();
    /// assert_eq!(pixmap.width(), 640);
    /// assert_eq!(pixmap.height(), 480);
    /// ```
    pub fn new(width: u32, height: u32, channels: Channels) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize) * (channels.count() as usize);
        let samples = vec![0i32; size];

        Ok(Pixmap {
            width,
            height,
            channels,
            samples,
        })
    }

    /// Create a new 3-channel (RGB) pixmap with all samples set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width` or `height` is 0.
    pub fn new_rgb(width: u32, height: u32) -> Result<Self> {
        Self::new(width, height, Channels::Rgb)
    }

    /// Create a pixmap from raw sample data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width` or `height` is 0, or
    /// [`Error::InvalidSampleCount`] if `samples.len()` does not equal
    /// `width * height * channels`.
    pub fn from_samples(
        width: u32,
        height: u32,
        channels: Channels,
        samples: Vec<i32>,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected = (width as usize) * (height as usize) * (channels.count() as usize);
        if samples.len() != expected {
            return Err(Error::InvalidSampleCount {
                expected,
                actual: samples.len(),
            });
        }

        Ok(Pixmap {
            width,
            height,
            channels,
            samples,
        })
    }

    /// Get the width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the channel layout
    #[inline]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Index of the first sample of pixel (x, y)
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * (self.channels.count() as usize)
    }

    /// Fail unless this pixmap has the given layout.
    #[inline]
    fn require_channels(&self, expected: Channels) -> Result<()> {
        if self.channels != expected {
            return Err(Error::ChannelMismatch {
                expected: expected.count(),
                actual: self.channels.count(),
            });
        }
        Ok(())
    }

    /// Get the sample at (x, y) of a 1-channel pixmap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelMismatch`] unless the pixmap is 1-channel.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_gray(&self, x: u32, y: u32) -> Result<i32> {
        self.require_channels(Channels::Gray)?;
        Ok(self.samples[self.pixel_index(x, y)])
    }

    /// Get the R, G, B samples at (x, y) of a 3-channel pixmap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelMismatch`] unless the pixmap is 3-channel.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_rgb(&self, x: u32, y: u32) -> Result<[i32; 3]> {
        self.require_channels(Channels::Rgb)?;
        let i = self.pixel_index(x, y);
        Ok([self.samples[i], self.samples[i + 1], self.samples[i + 2]])
    }

    /// Get the A, R, G, B samples at (x, y) of a 4-channel pixmap.
    ///
    /// The alpha sample comes first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelMismatch`] unless the pixmap is 4-channel.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_argb(&self, x: u32, y: u32) -> Result<[i32; 4]> {
        self.require_channels(Channels::Argb)?;
        let i = self.pixel_index(x, y);
        Ok([
            self.samples[i],
            self.samples[i + 1],
            self.samples[i + 2],
            self.samples[i + 3],
        ])
    }

    /// Set the sample at (x, y) of a 1-channel pixmap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelMismatch`] unless the pixmap is 1-channel.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_gray(&mut self, x: u32, y: u32, value: i32) -> Result<()> {
        self.require_channels(Channels::Gray)?;
        let i = self.pixel_index(x, y);
        self.samples[i] = value;
        Ok(())
    }

    /// Set the R, G, B samples at (x, y) of a 3-channel pixmap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelMismatch`] unless the pixmap is 3-channel,
    /// or [`Error::ArityMismatch`] if `rgb` does not hold exactly 3 values.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn set_rgb(&mut self, x: u32, y: u32, rgb: &[i32]) -> Result<()> {
        self.require_channels(Channels::Rgb)?;
        if rgb.len() != 3 {
            return Err(Error::ArityMismatch {
                expected: 3,
                actual: rgb.len(),
            });
        }
        let i = self.pixel_index(x, y);
        self.samples[i..i + 3].copy_from_slice(rgb);
        Ok(())
    }

    /// Set the A, R, G, B samples at (x, y) of a 4-channel pixmap.
    ///
    /// The alpha sample comes first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelMismatch`] unless the pixmap is 4-channel,
    /// or [`Error::ArityMismatch`] if `argb` does not hold exactly 4 values.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn set_argb(&mut self, x: u32, y: u32, argb: &[i32]) -> Result<()> {
        self.require_channels(Channels::Argb)?;
        if argb.len() != 4 {
            return Err(Error::ArityMismatch {
                expected: 4,
                actual: argb.len(),
            });
        }
        let i = self.pixel_index(x, y);
        self.samples[i..i + 4].copy_from_slice(argb);
        Ok(())
    }

    /// Get raw access to the sample data
    #[inline]
    pub fn samples(&self) -> &[i32] {
        &self.samples
    }

    /// Get mutable raw access to the sample data
    #[inline]
    pub fn samples_mut(&mut self) -> &mut [i32] {
        &mut self.samples
    }

    /// Get one row of sample data (`width * channels` samples)
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[i32] {
        let stride = (self.width as usize) * (self.channels.count() as usize);
        let start = (y as usize) * stride;
        &self.samples[start..start + stride]
    }

    /// Get one mutable row of sample data
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [i32] {
        let stride = (self.width as usize) * (self.channels.count() as usize);
        let start = (y as usize) * stride;
        &mut self.samples[start..start + stride]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_from_count() {
        assert_eq!(Channels::from_count(1).unwrap(), Channels::Gray);
        assert_eq!(Channels::from_count(3).unwrap(), Channels::Rgb);
        assert_eq!(Channels::from_count(4).unwrap(), Channels::Argb);

        for n in [0, 2, 5, 8] {
            assert!(matches!(
                Channels::from_count(n),
                Err(Error::InvalidChannelCount(c)) if c == n
            ));
        }
    }

    #[test]
    fn test_new_zero_filled() {
        let pixmap = Pixmap::new(4, 3, Channels::Rgb).unwrap();
        assert_eq!(pixmap.samples().len(), 4 * 3 * 3);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(pixmap.get_rgb(x, y).unwrap(), [0, 0, 0]);
            }
        }
    }

    #[test]
    fn test_new_invalid_dimensions() {
        assert!(matches!(
            Pixmap::new(0, 10, Channels::Gray),
            Err(Error::InvalidDimension { width: 0, height: 10 })
        ));
        assert!(matches!(
            Pixmap::new(10, 0, Channels::Gray),
            Err(Error::InvalidDimension { width: 10, height: 0 })
        ));
    }

    #[test]
    fn test_new_rgb_is_three_channel() {
        let pixmap = Pixmap::new_rgb(2, 2).unwrap();
        assert_eq!(pixmap.channels(), Channels::Rgb);
    }

    #[test]
    fn test_gray_roundtrip() {
        let mut pixmap = Pixmap::new(5, 4, Channels::Gray).unwrap();
        pixmap.set_gray(2, 3, 200).unwrap();
        pixmap.set_gray(0, 0, -7).unwrap();
        assert_eq!(pixmap.get_gray(2, 3).unwrap(), 200);
        assert_eq!(pixmap.get_gray(0, 0).unwrap(), -7);
        assert_eq!(pixmap.get_gray(4, 3).unwrap(), 0);
    }

    #[test]
    fn test_rgb_roundtrip() {
        let mut pixmap = Pixmap::new(3, 3, Channels::Rgb).unwrap();
        pixmap.set_rgb(1, 2, &[10, 20, 30]).unwrap();
        assert_eq!(pixmap.get_rgb(1, 2).unwrap(), [10, 20, 30]);
        // Neighbors untouched
        assert_eq!(pixmap.get_rgb(0, 2).unwrap(), [0, 0, 0]);
        assert_eq!(pixmap.get_rgb(2, 2).unwrap(), [0, 0, 0]);
    }

    #[test]
    fn test_argb_roundtrip_alpha_first() {
        let mut pixmap = Pixmap::new(2, 2, Channels::Argb).unwrap();
        pixmap.set_argb(1, 1, &[255, 1, 2, 3]).unwrap();
        let argb = pixmap.get_argb(1, 1).unwrap();
        assert_eq!(argb[0], 255); // alpha
        assert_eq!(&argb[1..], &[1, 2, 3]);
    }

    #[test]
    fn test_channel_mismatch_pairwise() {
        let gray = Pixmap::new(2, 2, Channels::Gray).unwrap();
        let rgb = Pixmap::new(2, 2, Channels::Rgb).unwrap();
        let argb = Pixmap::new(2, 2, Channels::Argb).unwrap();

        assert!(matches!(
            gray.get_rgb(0, 0),
            Err(Error::ChannelMismatch { expected: 3, actual: 1 })
        ));
        assert!(matches!(
            gray.get_argb(0, 0),
            Err(Error::ChannelMismatch { expected: 4, actual: 1 })
        ));
        assert!(matches!(
            rgb.get_gray(0, 0),
            Err(Error::ChannelMismatch { expected: 1, actual: 3 })
        ));
        assert!(matches!(
            rgb.get_argb(0, 0),
            Err(Error::ChannelMismatch { expected: 4, actual: 3 })
        ));
        assert!(matches!(
            argb.get_gray(0, 0),
            Err(Error::ChannelMismatch { expected: 1, actual: 4 })
        ));
        assert!(matches!(
            argb.get_rgb(0, 0),
            Err(Error::ChannelMismatch { expected: 3, actual: 4 })
        ));
    }

    #[test]
    fn test_setter_channel_mismatch() {
        let mut gray = Pixmap::new(2, 2, Channels::Gray).unwrap();
        let mut rgb = Pixmap::new(2, 2, Channels::Rgb).unwrap();

        assert!(matches!(
            gray.set_rgb(0, 0, &[1, 2, 3]),
            Err(Error::ChannelMismatch { .. })
        ));
        assert!(matches!(
            rgb.set_gray(0, 0, 1),
            Err(Error::ChannelMismatch { .. })
        ));
        assert!(matches!(
            rgb.set_argb(0, 0, &[1, 2, 3, 4]),
            Err(Error::ChannelMismatch { .. })
        ));
    }

    #[test]
    fn test_setter_arity_mismatch() {
        let mut rgb = Pixmap::new(2, 2, Channels::Rgb).unwrap();
        let mut argb = Pixmap::new(2, 2, Channels::Argb).unwrap();

        assert!(matches!(
            rgb.set_rgb(0, 0, &[1, 2]),
            Err(Error::ArityMismatch { expected: 3, actual: 2 })
        ));
        assert!(matches!(
            rgb.set_rgb(0, 0, &[1, 2, 3, 4]),
            Err(Error::ArityMismatch { expected: 3, actual: 4 })
        ));
        assert!(matches!(
            argb.set_argb(0, 0, &[1, 2, 3]),
            Err(Error::ArityMismatch { expected: 4, actual: 3 })
        ));
    }

    #[test]
    fn test_from_samples() {
        let samples: Vec<i32> = (0..12).collect();
        let pixmap = Pixmap::from_samples(2, 2, Channels::Rgb, samples).unwrap();
        assert_eq!(pixmap.get_rgb(0, 0).unwrap(), [0, 1, 2]);
        assert_eq!(pixmap.get_rgb(1, 1).unwrap(), [9, 10, 11]);

        assert!(matches!(
            Pixmap::from_samples(2, 2, Channels::Rgb, vec![0; 11]),
            Err(Error::InvalidSampleCount { expected: 12, actual: 11 })
        ));
    }

    #[test]
    fn test_interleaved_layout() {
        let mut pixmap = Pixmap::new(2, 2, Channels::Rgb).unwrap();
        pixmap.set_rgb(1, 0, &[7, 8, 9]).unwrap();
        // Pixel (1, 0) starts at sample index (0 * 2 + 1) * 3 = 3
        assert_eq!(&pixmap.samples()[3..6], &[7, 8, 9]);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut pixmap = Pixmap::new(2, 2, Channels::Gray).unwrap();
        pixmap.set_gray(0, 0, 42).unwrap();

        let mut copy = pixmap.clone();
        copy.set_gray(0, 0, 99).unwrap();

        assert_eq!(pixmap.get_gray(0, 0).unwrap(), 42);
        assert_eq!(copy.get_gray(0, 0).unwrap(), 99);
    }

    #[test]
    fn test_row_access() {
        let mut pixmap = Pixmap::new(3, 2, Channels::Gray).unwrap();
        for x in 0..3 {
            pixmap.set_gray(x, 1, (x + 1) as i32).unwrap();
        }
        assert_eq!(pixmap.row(1), &[1, 2, 3]);
        assert_eq!(pixmap.row(0), &[0, 0, 0]);

        pixmap.row_mut(0)[1] = 5;
        assert_eq!(pixmap.get_gray(1, 0).unwrap(), 5);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_panics() {
        let pixmap = Pixmap::new(2, 2, Channels::Gray).unwrap();
        let _ = pixmap.get_gray(0, 2);
    }
}
