/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A monochrome image
//!
//! Pixels are stored row major, top row first, one `bool` per pixel
//! where `true` means the pixel is on.
use core::slice::ChunksExact;

/// A decoded monochrome image
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MonotoneBitmapImage {
    width:  usize,
    height: usize,
    pixels: Vec<bool>
}

impl MonotoneBitmapImage {
    /// Create an image from row major pixels
    ///
    /// # Panics
    /// If either dimension is zero or `pixels.len()` is not `width * height`
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<bool>) -> MonotoneBitmapImage {
        assert!(width > 0 && height > 0, "Image dimensions must be non zero");
        assert_eq!(
            width * height,
            pixels.len(),
            "Length mismatch, expected {} pixels for a {}x{} image but found {}",
            width * height,
            width,
            height,
            pixels.len()
        );
        MonotoneBitmapImage {
            width,
            height,
            pixels
        }
    }

    /// Create an image from a list of rows, top row first
    ///
    /// # Panics
    /// If rows are empty or differ in length
    pub fn from_rows(rows: &[Vec<bool>]) -> MonotoneBitmapImage {
        let width = rows.first().map_or(0, Vec::len);

        assert!(
            rows.iter().all(|row| row.len() == width),
            "All rows must have the same length"
        );
        MonotoneBitmapImage::from_pixels(width, rows.len(), rows.concat())
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The pixel at column `x` of row `y`
    ///
    /// # Panics
    /// If the coordinate lies outside the image
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        assert!(x < self.width && y < self.height);
        self.pixels[y * self.width + x]
    }

    /// A single row of the image
    pub fn row(&self, y: usize) -> &[bool] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> ChunksExact<'_, bool> {
        self.pixels.chunks_exact(self.width)
    }

    /// Number of pixels that are on
    pub fn count_on(&self) -> usize {
        self.pixels.iter().filter(|x| **x).count()
    }
}

#[cfg(test)]
mod tests {
    use crate::image::MonotoneBitmapImage;

    #[test]
    fn rows_are_top_to_bottom() {
        let image = MonotoneBitmapImage::from_rows(&[vec![true, false], vec![false, false]]);

        assert_eq!(image.dimensions(), (2, 2));
        assert!(image.pixel(0, 0));
        assert!(!image.pixel(1, 0));
        assert_eq!(image.rows().count(), 2);
        assert_eq!(image.row(1), &[false, false]);
        assert_eq!(image.count_on(), 1);
    }

    #[test]
    #[should_panic]
    fn mismatched_length_panics() {
        let _ = MonotoneBitmapImage::from_pixels(3, 2, vec![false; 5]);
    }
}
