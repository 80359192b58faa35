/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by all img2c crates
//!
//! This crate provides the pieces shared by the bitmap decoder,
//! the matrix packers and the command line driver.
//!
//! It currently contains
//!
//! - A bytestream reader with endian aware reads over in memory buffers and files
//! - The monochrome image produced by decoders and consumed by packers
//! - Decoder options
//!
pub mod bytestream;
pub mod image;
pub mod options;
