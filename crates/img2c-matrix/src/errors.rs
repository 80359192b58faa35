/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

/// Errors raised when packing an image
#[non_exhaustive]
pub enum PackErrors {
    /// A dimension is not a multiple of the strategy's cell size
    Dimension {
        strategy:  &'static str,
        dimension: &'static str,
        value:     usize,
        multiple:  usize
    }
}

impl PackErrors {
    /// The smallest valid dimension larger than the offending one
    pub const fn suggestion(&self) -> usize {
        match self {
            Self::Dimension {
                value, multiple, ..
            } => (*value / *multiple + 1) * *multiple
        }
    }
}

impl Debug for PackErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Dimension {
                strategy,
                dimension,
                value,
                multiple
            } => {
                writeln!(
                    f,
                    "Image {dimension} must be dividable by {multiple} for {strategy} packing \
                     ({dimension} = {value}, maybe round it to {}?)",
                    self.suggestion()
                )
            }
        }
    }
}

impl Display for PackErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for PackErrors {}
