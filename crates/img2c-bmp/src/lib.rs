/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A monochrome BMP decoder
//!
//! This crate decodes the uncompressed 24 and 32 bit bitmaps used as
//! firmware assets into a [`MonotoneBitmapImage`](img2c_core::image::MonotoneBitmapImage).
//!
//! A pixel is on when all three of its color channels are non-zero,
//! everything else is off.
//!
//! # Supported formats
//! - Uncompressed 24 bit and 32 bit images, bottom-up row order
//!
//! # Unsupported formats
//! - Paletted images
//! - RLE and bitfield compressed images
//! - Embedded PNG and JPEGs

pub use crate::common::{BmpCompression, BmpHeader, BMP_HEADER_SIZE};
pub use crate::decoder::{probe_bmp, BmpDecoder};
pub use crate::errors::BmpDecoderErrors;

mod common;
mod decoder;
mod errors;
mod serde;
