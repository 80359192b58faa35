/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

use img2c_bmp::BmpDecoderErrors;
use img2c_matrix::PackErrors;

/// Errors raised while converting assets
#[non_exhaustive]
pub enum Img2cErrors {
    /// A bitmap could not be decoded
    DecodeErrors(PathBuf, BmpDecoderErrors),
    /// A decoded bitmap does not fit the packing layout
    PackErrors(PathBuf, PackErrors),
    /// A template could not be found or loaded
    TemplateErrors(String),
    IoErrors(std::io::Error),
    GenericString(String)
}

impl Debug for Img2cErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecodeErrors(path, err) => {
                write!(f, "Could not decode {:?}: {:?}", path, err)
            }
            Self::PackErrors(path, err) => {
                write!(f, "Could not pack {:?}: {:?}", path, err)
            }
            Self::TemplateErrors(reason) => {
                writeln!(f, "Template error: {reason}")
            }
            Self::IoErrors(err) => {
                writeln!(f, "I/O error: {err}")
            }
            Self::GenericString(reason) => {
                writeln!(f, "{reason}")
            }
        }
    }
}

impl Display for Img2cErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for Img2cErrors {}

impl From<std::io::Error> for Img2cErrors {
    fn from(value: std::io::Error) -> Self {
        Img2cErrors::IoErrors(value)
    }
}

impl From<String> for Img2cErrors {
    fn from(value: String) -> Self {
        Img2cErrors::GenericString(value)
    }
}
