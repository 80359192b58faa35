/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Conversion of an assets directory into C sources
//!
//! The assets directory is laid out as
//!
//! ```text
//! assets/
//! ├── font.bmp      -> font.c
//! └── images/
//!     ├── logo.bmp  -> render_logo() in images.c / images.h
//!     └── ...
//! ```
use std::path::{Path, PathBuf};

use log::{error, info, warn};

use img2c_core::image::MonotoneBitmapImage;
use img2c_core::options::DecoderOptions;
use img2c_matrix::{CArrayFormatter, PackMode};

use crate::errors::Img2cErrors;
use crate::file_io::{decode_bitmap_file, list_files, looks_like_bitmap, write_output};
use crate::template::{indent_continuation, TemplateStore};

pub const FONT_FILE: &str = "font.bmp";
pub const IMAGES_DIR: &str = "images";

/// Everything the driver needs to know, no state is shared between runs
#[derive(Clone, Debug)]
pub struct ConversionOptions {
    pub assets_dir:      PathBuf,
    pub output_dir:      PathBuf,
    pub templates_dir:   Option<PathBuf>,
    pub wrap:            usize,
    pub font_packing:    PackMode,
    pub image_packing:   PackMode,
    pub include_font:    bool,
    pub decoder_options: DecoderOptions
}

impl ConversionOptions {
    pub fn new(assets_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> ConversionOptions {
        ConversionOptions {
            assets_dir:      assets_dir.into(),
            output_dir:      output_dir.into(),
            templates_dir:   None,
            wrap:            6,
            font_packing:    PackMode::Tiled,
            image_packing:   PackMode::Rows,
            include_font:    true,
            decoder_options: DecoderOptions::default()
        }
    }

    pub fn font_path(&self) -> PathBuf {
        self.assets_dir.join(FONT_FILE)
    }

    pub fn images_dir(&self) -> PathBuf {
        self.assets_dir.join(IMAGES_DIR)
    }
}

/// A converted image
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImageSummary {
    pub name:   String,
    pub width:  usize,
    pub height: usize,
    pub len:    usize
}

/// Outcome of a conversion run
#[derive(Debug, Default)]
pub struct ConversionReport {
    /// Packed font size, `None` when no font was written
    pub font_len: Option<usize>,
    pub images:   Vec<ImageSummary>,
    /// Assets that could not be converted
    pub skipped:  Vec<(PathBuf, Img2cErrors)>,
    pub written:  Vec<PathBuf>
}

impl ConversionReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

fn decode_and_pack(
    path: &Path, mode: PackMode, options: DecoderOptions
) -> Result<(MonotoneBitmapImage, Vec<u8>), Img2cErrors> {
    let image = decode_bitmap_file(path, options)?;
    let matrix = mode
        .pack(&image)
        .map_err(|e| Img2cErrors::PackErrors(path.to_path_buf(), e))?;

    Ok((image, matrix))
}

/// Name an image after its file, `images/logo.bmp` -> `logo`
fn image_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn convert_font(
    options: &ConversionOptions, templates: &TemplateStore, report: &mut ConversionReport
) -> Result<(), Img2cErrors> {
    let path = options.font_path();

    if !path.is_file() {
        warn!("No font found at {:?}, skipping font generation", path);
        return Ok(());
    }
    info!("Generating fonts");

    let (_, fonts) = match decode_and_pack(&path, options.font_packing, options.decoder_options) {
        Ok(result) => result,
        Err(err) => {
            error!("Skipping font: {:?}", err);
            report.skipped.push((path, err));
            return Ok(());
        }
    };
    let formatter = CArrayFormatter::new(options.wrap);

    let source = templates.hydrate("font.c", &[("font-matrix", formatter.format(&fonts))])?;

    let dest = options.output_dir.join("font.c");
    write_output(&dest, &(source + "\n"))?;

    report.font_len = Some(fonts.len());
    report.written.push(dest);

    Ok(())
}

fn convert_images(
    options: &ConversionOptions, templates: &TemplateStore, report: &mut ConversionReport
) -> Result<(), Img2cErrors> {
    let dir = options.images_dir();

    if !dir.is_dir() {
        warn!("No images directory at {:?}, skipping image generation", dir);
        return Ok(());
    }
    let formatter = CArrayFormatter::new(options.wrap);

    let mut header = String::new();
    let mut image_data_sources = String::new();

    for path in list_files(&dir)? {
        if matches!(looks_like_bitmap(&path), Ok(false)) {
            warn!("{:?} does not start with a bitmap header", path);
        }
        let (image, matrix) =
            match decode_and_pack(&path, options.image_packing, options.decoder_options) {
                Ok(result) => result,
                Err(err) => {
                    error!("Skipping image: {:?}", err);
                    report.skipped.push((path, err));
                    continue;
                }
            };
        let name = image_name(&path);

        info!(
            "Generating images ({} {}x{})",
            name,
            image.width(),
            image.height()
        );

        let matrix_definition = indent_continuation(&formatter.format(&matrix), "    ");

        let signature = templates.hydrate("images-fn-sig.c", &[("name", name.clone())])?;

        header += &templates.hydrate("images-fn.h", &[("signature", signature.clone())])?;
        header.push('\n');

        image_data_sources += &templates.hydrate(
            "images-fn.c",
            &[
                ("signature", signature),
                ("matrix-definition", matrix_definition),
                ("width", image.width().to_string()),
                ("height", image.height().to_string()),
                ("len", matrix.len().to_string())
            ]
        )?;
        image_data_sources.push_str("\n\n");

        report.images.push(ImageSummary {
            name,
            width: image.width(),
            height: image.height(),
            len: matrix.len()
        });
    }

    let header_dest = options.output_dir.join("images.h");
    let header_source = templates.hydrate("images.h", &[("header", header)])?;
    write_output(&header_dest, &(header_source + "\n"))?;
    report.written.push(header_dest);

    let source_dest = options.output_dir.join("images.c");
    let source = templates.hydrate("images.c", &[("image-data", image_data_sources)])?;
    write_output(&source_dest, &(source + "\n"))?;
    report.written.push(source_dest);

    Ok(())
}

/// Convert the font and images of an assets directory
///
/// Writes `font.c`, `images.h` and `images.c` into the output directory.
/// Assets that fail to decode or pack are logged, recorded in the report
/// and skipped, the rest of the batch is still converted.
///
/// # Errors
/// Template and output failures abort the run.
pub fn convert_assets(options: &ConversionOptions) -> Result<ConversionReport, Img2cErrors> {
    info!("Converting assets in {:?}", options.assets_dir);

    if !options.assets_dir.is_dir() {
        return Err(Img2cErrors::GenericString(format!(
            "Assets directory {:?} does not exist",
            options.assets_dir
        )));
    }
    let templates = TemplateStore::new(options.templates_dir.clone());
    let mut report = ConversionReport::default();

    if options.include_font {
        convert_font(options, &templates, &mut report)?;
    }
    convert_images(options, &templates, &mut report)?;

    Ok(report)
}
