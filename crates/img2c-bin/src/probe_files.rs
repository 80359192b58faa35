/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs;
use std::path::{Path, PathBuf};

use log::{error, warn};

use img2c_core::options::DecoderOptions;

use crate::errors::Img2cErrors;
use crate::file_io::{list_files, read_bitmap_header};
use crate::serde::Metadata;
use crate::workflow::ConversionOptions;

/// Read the header of `path` and render it as pretty JSON
///
/// Dimension limits of `options` are lifted, every other check applies.
pub fn probe_file(path: &Path, options: DecoderOptions) -> Result<String, Img2cErrors> {
    let size = fs::metadata(path)?.len();
    let options = options
        .set_max_width(usize::MAX)
        .set_max_height(usize::MAX);

    let header = read_bitmap_header(path, options)?;
    let metadata = Metadata::new(path.as_os_str().to_os_string(), size, &header);

    serde_json::to_string_pretty(&metadata)
        .map_err(|e| Img2cErrors::GenericString(format!("Could not serialize metadata: {e}")))
}

/// Assets the probe looks at, font first then images in name order
pub fn probe_targets(options: &ConversionOptions) -> Result<Vec<PathBuf>, Img2cErrors> {
    let mut targets = Vec::new();
    let font = options.font_path();

    if options.include_font && font.is_file() {
        targets.push(font);
    }
    let images = options.images_dir();

    if images.is_dir() {
        targets.extend(list_files(&images)?);
    } else {
        warn!("No images directory at {:?}", images);
    }
    Ok(targets)
}

/// Probe asset files, extract header metadata, and print to standard output.
///
/// Returns the number of files that could not be probed.
pub fn probe_input_files(options: &ConversionOptions) -> Result<usize, Img2cErrors> {
    let mut failures = 0;

    for path in probe_targets(options)? {
        match probe_file(&path, options.decoder_options) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                error!("Could not probe {:?}: {:?}", path, err);
                failures += 1;
            }
        }
    }
    Ok(failures)
}
