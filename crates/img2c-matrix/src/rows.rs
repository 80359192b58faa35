/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Row packing: 8 horizontal pixels per byte
//!
//! Rows are packed top to bottom, each in runs of 8 pixels from the left,
//! the leftmost pixel of a run is stored in bit 0.
use img2c_core::image::MonotoneBitmapImage;

use crate::traits::PackStrategy;

pub const RUN_WIDTH: usize = 8;

/// Row major 8 bit packing
#[derive(Copy, Clone, Debug, Default)]
pub struct RowPacking;

impl PackStrategy for RowPacking {
    fn name(&self) -> &'static str {
        "rows"
    }

    fn cell_dimensions(&self) -> (usize, usize) {
        (RUN_WIDTH, 1)
    }

    fn bytes_per_cell(&self) -> usize {
        1
    }

    fn pack_cell(&self, image: &MonotoneBitmapImage, x: usize, y: usize, out: &mut Vec<u8>) {
        let run = &image.row(y)[x..x + RUN_WIDTH];

        let byte = run
            .iter()
            .enumerate()
            .fold(0_u8, |acc, (bit, on)| acc | (u8::from(*on) << bit));

        out.push(byte);
    }
}
