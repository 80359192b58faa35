/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Size of the file header and info header read by the decoder
pub const BMP_HEADER_SIZE: usize = 54;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BmpCompression {
    RGB,
    RLE8,
    RLE4,
    BITFIELDS,
    Unknown
}

impl BmpCompression {
    pub fn from_u32(num: u32) -> BmpCompression {
        match num {
            0 => BmpCompression::RGB,
            1 => BmpCompression::RLE8,
            2 => BmpCompression::RLE4,
            3 => BmpCompression::BITFIELDS,
            _ => BmpCompression::Unknown
        }
    }
}

/// Header fields of a bitmap container
///
/// Only `data_offset`, `file_size`, `width`, `height` and `bits_per_pixel`
/// drive decoding, the rest are kept for inspection.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BmpHeader {
    pub signature:      [u8; 2],
    pub file_size:      u32,
    pub data_offset:    u32,
    pub header_size:    u32,
    pub width:          u32,
    pub height:         u32,
    pub bits_per_pixel: u16,
    pub compression:    u32,
    pub image_size:     u32,
    pub x_resolution:   u32,
    pub y_resolution:   u32
}

impl BmpHeader {
    pub fn compression(&self) -> BmpCompression {
        BmpCompression::from_u32(self.compression)
    }

    /// Bytes making up a single pixel record
    pub const fn bytes_per_pixel(&self) -> usize {
        (self.bits_per_pixel / 8) as usize
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width as usize, self.height as usize)
    }
}
