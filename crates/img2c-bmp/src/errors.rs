/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use img2c_core::bytestream::ByteIoError;

/// BMP errors that can occur during decoding
#[non_exhaustive]
pub enum BmpDecoderErrors {
    /// The file/bytes do not start with `BM`, only raised in strict mode
    InvalidMagicBytes([u8; 2]),
    /// The container is truncated or structurally inconsistent
    MalformedContainer(&'static str),
    /// The pixel region ended before the image was filled,
    /// expected a number of pixels but found another
    TruncatedPixelData(usize, usize),
    /// Bits per pixel other than 24 or 32
    UnsupportedDepth(u16),
    /// Too large dimensions for a given width or
    /// height
    TooLargeDimensions(&'static str, usize, usize),
    IoErrors(ByteIoError)
}

impl BmpDecoderErrors {
    /// Whether this error means the input is not a well formed container
    ///
    /// Callers driving a batch use this to tell bad assets apart
    /// from I/O failures.
    pub const fn is_malformed_container(&self) -> bool {
        matches!(
            self,
            Self::InvalidMagicBytes(_) | Self::MalformedContainer(_) | Self::TruncatedPixelData(..)
        )
    }
}

impl Debug for BmpDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidMagicBytes(magic) => {
                writeln!(
                    f,
                    "Invalid magic bytes {:?}, file does not start with BM",
                    magic
                )
            }
            Self::MalformedContainer(reason) => {
                writeln!(f, "Malformed bitmap container: {}", reason)
            }
            Self::TruncatedPixelData(expected, found) => {
                writeln!(
                    f,
                    "Malformed bitmap container: pixel data ends after {found} of {expected} pixels"
                )
            }
            Self::UnsupportedDepth(depth) => {
                writeln!(
                    f,
                    "Depth {depth} unsupported, only 24 and 32 bit images can be decoded"
                )
            }
            Self::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension} , {found} exceeds {expected}"
                )
            }
            Self::IoErrors(err) => {
                writeln!(f, "{:?}", err)
            }
        }
    }
}

impl Display for BmpDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for BmpDecoderErrors {}

impl From<ByteIoError> for BmpDecoderErrors {
    fn from(value: ByteIoError) -> Self {
        BmpDecoderErrors::IoErrors(value)
    }
}
