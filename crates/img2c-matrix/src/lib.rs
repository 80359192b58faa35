/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Bit-matrix packing for monochrome firmware assets
//!
//! A [`MonotoneBitmapImage`](img2c_core::image::MonotoneBitmapImage) is split into
//! fixed size cells and every cell is packed into bytes. Two layouts exist
//!
//! - [`TiledPacking`]: 6x8 tiles, one byte per tile column, top pixel in the
//!   most significant bit. Used for QMK OLED fonts.
//! - [`RowPacking`]: 8x1 runs, one byte per run, leftmost pixel in the least
//!   significant bit. Used for images drawn pixel by pixel.
//!
//! The packed bytes can then be rendered as a C initializer with
//! [`CArrayFormatter`].
pub use crate::encoder::CArrayFormatter;
pub use crate::errors::PackErrors;
pub use crate::rows::RowPacking;
pub use crate::tiled::TiledPacking;
pub use crate::traits::{PackMode, PackStrategy};

mod encoder;
mod errors;
mod rows;
mod tiled;
mod traits;
