/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Tiled packing: 6 pixel wide, 8 pixel tall tiles
//!
//! Every tile column becomes one byte, the column's top pixel
//! is stored in bit 7 and the bottom pixel in bit 0.
//!
//! ```text
//!  tile (6x8)          bytes
//!  ┌──────────┐
//!  │a . . . . │ y=0 -> bit 7
//!  │b . . . . │ y=1 -> bit 6
//!  │...       │
//!  │h . . . . │ y=7 -> bit 0
//!  └──────────┘
//!   ^ column 0 -> byte 0, column 5 -> byte 5
//! ```
use img2c_core::image::MonotoneBitmapImage;

use crate::traits::PackStrategy;

pub const TILE_WIDTH: usize = 6;
pub const TILE_HEIGHT: usize = 8;

/// QMK style tiled packing
#[derive(Copy, Clone, Debug, Default)]
pub struct TiledPacking;

impl PackStrategy for TiledPacking {
    fn name(&self) -> &'static str {
        "tiled"
    }

    fn cell_dimensions(&self) -> (usize, usize) {
        (TILE_WIDTH, TILE_HEIGHT)
    }

    fn bytes_per_cell(&self) -> usize {
        TILE_WIDTH
    }

    fn pack_cell(&self, image: &MonotoneBitmapImage, x: usize, y: usize, out: &mut Vec<u8>) {
        for column in x..x + TILE_WIDTH {
            let mut byte = 0_u8;

            for row in 0..TILE_HEIGHT {
                if image.pixel(column, y + row) {
                    byte |= 1 << (7 - row);
                }
            }
            out.push(byte);
        }
    }
}
