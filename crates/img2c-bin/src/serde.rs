/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use img2c_bmp::BmpHeader;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Header information of one asset as printed by `--probe`
pub struct Metadata<'a> {
    file:      OsString,
    file_size: u64,
    metadata:  &'a BmpHeader
}

impl<'a> Metadata<'a> {
    pub fn new(file: OsString, file_size: u64, metadata: &'a BmpHeader) -> Metadata<'a> {
        Metadata {
            file,
            file_size,
            metadata
        }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Metadata", 3)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("file_size", &self.file_size)?;
        state.serialize_field("metadata", &self.metadata)?;

        state.end()
    }
}
