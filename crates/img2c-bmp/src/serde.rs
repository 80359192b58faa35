/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![cfg(feature = "serde")]

use serde::ser::*;

use crate::common::{BmpCompression, BmpHeader};

impl Serialize for BmpCompression {
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // compression serialization is simply it's debug value
        serializer.serialize_str(&format!("{:?}", self))
    }
}

impl Serialize for BmpHeader {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("BmpHeader", 10)?;

        state.serialize_field("signature", &*String::from_utf8_lossy(&self.signature))?;
        state.serialize_field("file_size", &self.file_size)?;
        state.serialize_field("data_offset", &self.data_offset)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("bits_per_pixel", &self.bits_per_pixel)?;
        state.serialize_field("compression", &self.compression())?;
        state.serialize_field("image_size", &self.image_size)?;
        state.serialize_field("x_resolution", &self.x_resolution)?;
        state.serialize_field("y_resolution", &self.y_resolution)?;

        state.end()
    }
}
