/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use log::trace;

use img2c_core::image::MonotoneBitmapImage;

use crate::errors::PackErrors;
use crate::rows::RowPacking;
use crate::tiled::TiledPacking;

/// A way of packing an image into bytes
///
/// Implementors describe a single cell, the image is checked to be
/// made of whole cells and cells are then visited row major.
pub trait PackStrategy {
    /// Get the name of this strategy
    fn name(&self) -> &'static str;

    /// Width and height of a single cell
    fn cell_dimensions(&self) -> (usize, usize);

    /// Number of bytes a single cell packs into
    fn bytes_per_cell(&self) -> usize;

    /// Pack the cell whose top left pixel is `(x, y)` into `out`
    ///
    /// The cell is guaranteed to lie inside the image.
    fn pack_cell(&self, image: &MonotoneBitmapImage, x: usize, y: usize, out: &mut Vec<u8>);

    /// Number of bytes an image of the given dimensions packs into
    fn packed_len(&self, width: usize, height: usize) -> usize {
        let (cell_width, cell_height) = self.cell_dimensions();

        (width / cell_width) * (height / cell_height) * self.bytes_per_cell()
    }

    /// Confirm the image is made of whole cells
    fn check_dimensions(&self, image: &MonotoneBitmapImage) -> Result<(), PackErrors> {
        let (cell_width, cell_height) = self.cell_dimensions();
        let (width, height) = image.dimensions();

        if width % cell_width != 0 {
            return Err(PackErrors::Dimension {
                strategy:  self.name(),
                dimension: "width",
                value:     width,
                multiple:  cell_width
            });
        }
        if height % cell_height != 0 {
            return Err(PackErrors::Dimension {
                strategy:  self.name(),
                dimension: "height",
                value:     height,
                multiple:  cell_height
            });
        }
        Ok(())
    }

    /// Pack an image
    ///
    /// # Errors
    /// If the image dimensions are not multiples of the cell dimensions,
    /// no bytes are produced in that case.
    fn pack(&self, image: &MonotoneBitmapImage) -> Result<Vec<u8>, PackErrors> {
        self.check_dimensions(image)?;

        let (cell_width, cell_height) = self.cell_dimensions();
        let (width, height) = image.dimensions();

        let mut out = Vec::with_capacity(self.packed_len(width, height));

        for y in (0..height).step_by(cell_height) {
            for x in (0..width).step_by(cell_width) {
                self.pack_cell(image, x, y, &mut out);
            }
        }
        debug_assert_eq!(out.len(), self.packed_len(width, height));

        trace!(
            "{} packing of {}x{} image produced {} bytes",
            self.name(),
            width,
            height,
            out.len()
        );
        Ok(out)
    }
}

/// Packing layouts selectable by name
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PackMode {
    /// 6x8 tiles, see [`TiledPacking`]
    Tiled,
    /// 8 pixel row runs, see [`RowPacking`]
    Rows
}

impl PackMode {
    pub fn from_string_result(input: &str) -> Result<Self, String> {
        match input {
            "tiled" | "qmk" => Ok(Self::Tiled),
            "rows" => Ok(Self::Rows),
            _ => Err(format!(
                "Unknown packing mode {input:?}, accepted values are tiled,qmk,rows"
            ))
        }
    }

    /// The strategy implementing this mode
    pub fn strategy(self) -> &'static dyn PackStrategy {
        match self {
            PackMode::Tiled => &TiledPacking,
            PackMode::Rows => &RowPacking
        }
    }

    pub fn pack(self, image: &MonotoneBitmapImage) -> Result<Vec<u8>, PackErrors> {
        self.strategy().pack(image)
    }
}
