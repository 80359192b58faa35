/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//!
//! Decoders read through [`ByteReader`], which wraps anything implementing
//! [`ByteReaderTrait`]. Two sources are provided, an in memory [`ByteCursor`]
//! and buffered readers over seekable sources, e.g `BufReader<File>`.
pub use reader::{ByteIoError, ByteReader};
pub use traits::{ByteCursor, ByteReaderTrait};

mod reader;
mod traits;
