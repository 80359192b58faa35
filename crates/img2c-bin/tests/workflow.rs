/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Convert asset directories laid out on disk

use std::fs;
use std::path::Path;

use img2c_bin::errors::Img2cErrors;
use img2c_bin::workflow::{convert_assets, ConversionOptions, ImageSummary};

/// A 24 bit bitmap whose rows are given top row first
fn bitmap(rows: &[&[bool]]) -> Vec<u8> {
    let width = rows[0].len() as u32;
    let height = rows.len() as u32;

    let mut pixels = Vec::new();
    for row in rows.iter().rev() {
        for on in row.iter() {
            let value = if *on { 0xFF } else { 0x00 };
            pixels.extend_from_slice(&[value, value, value]);
        }
    }
    let file_size = 54 + pixels.len() as u32;

    let mut data = Vec::new();
    data.extend_from_slice(b"BM");
    data.extend_from_slice(&file_size.to_le_bytes());
    data.extend_from_slice(&[0; 4]);
    data.extend_from_slice(&54_u32.to_le_bytes());
    data.extend_from_slice(&40_u32.to_le_bytes());
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    data.extend_from_slice(&1_u16.to_le_bytes());
    data.extend_from_slice(&24_u16.to_le_bytes());
    data.extend_from_slice(&[0; 24]);
    data.extend_from_slice(&pixels);
    data
}

fn write_assets(dir: &Path) {
    let mut font = vec![vec![false; 6]; 8];
    font[0][0] = true;
    let font_rows: Vec<&[bool]> = font.iter().map(|r| r.as_slice()).collect();

    fs::write(dir.join("font.bmp"), bitmap(&font_rows)).unwrap();

    let images = dir.join("images");
    fs::create_dir(&images).unwrap();

    let logo: [&[bool]; 2] = [
        &[true, false, false, false, false, false, false, true],
        &[false; 8]
    ];
    fs::write(images.join("a_logo.bmp"), bitmap(&logo)).unwrap();
    // seven columns cannot be packed in runs of eight
    let bad: [&[bool]; 1] = [&[true; 7]];
    fs::write(images.join("b_bad.bmp"), bitmap(&bad)).unwrap();

    let icon: [&[bool]; 1] = [&[true; 8]];
    fs::write(images.join("c_icon.bmp"), bitmap(&icon)).unwrap();
}

#[test]
fn converts_font_and_images() {
    let assets = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_assets(assets.path());

    let options = ConversionOptions::new(assets.path(), out.path().join("generated"));
    let report = convert_assets(&options).unwrap();

    assert_eq!(report.font_len, Some(6));
    assert_eq!(
        report.images,
        [
            ImageSummary {
                name:   "a_logo".to_string(),
                width:  8,
                height: 2,
                len:    2
            },
            ImageSummary {
                name:   "c_icon".to_string(),
                width:  8,
                height: 1,
                len:    1
            }
        ]
    );
    assert_eq!(report.skipped.len(), 1);
    assert!(report.skipped[0].0.ends_with("b_bad.bmp"));
    assert!(matches!(report.skipped[0].1, Img2cErrors::PackErrors(..)));
    assert!(!report.is_complete());

    let generated = out.path().join("generated");

    let font = fs::read_to_string(generated.join("font.c")).unwrap();
    assert!(font.contains("#include \"progmem.h\""));
    assert!(font.ends_with(
        "static const unsigned char font[] PROGMEM = {\n    0x80, 0x0, 0x0, 0x0, 0x0, 0x0, \n    \n};\n"
    ));

    let header = fs::read_to_string(generated.join("images.h")).unwrap();
    assert!(header.starts_with("// Generated by img2c"));
    assert!(header.ends_with(
        "size_t len);\n\nvoid render_a_logo(int ox, int oy);\nvoid render_c_icon(int ox, int oy);\n\n"
    ));

    let source = fs::read_to_string(generated.join("images.c")).unwrap();
    let logo = "void render_a_logo(int ox, int oy) {\n    \
                static const char mat[2] = {\n        0x81, 0x0, \n    };\n    \
                render_pixels(ox, oy, 8, 2, mat, 2);\n}\n\n";
    let icon = "void render_c_icon(int ox, int oy) {\n    \
                static const char mat[1] = {\n        0xff, \n    };\n    \
                render_pixels(ox, oy, 8, 1, mat, 1);\n}\n\n";

    assert!(source.contains(logo));
    assert!(source.ends_with(&format!("{logo}{icon}\n")));
    assert!(!source.contains("b_bad"));
}

#[test]
fn missing_font_is_skipped() {
    let assets = tempfile::tempdir().unwrap();
    fs::create_dir(assets.path().join("images")).unwrap();

    let options = ConversionOptions::new(assets.path(), assets.path());
    let report = convert_assets(&options).unwrap();

    assert_eq!(report.font_len, None);
    assert!(report.images.is_empty());
    assert!(report.is_complete());
    assert!(!assets.path().join("font.c").exists());
    assert!(assets.path().join("images.h").exists());
}

#[test]
fn no_font_option_leaves_font_alone() {
    let assets = tempfile::tempdir().unwrap();
    write_assets(assets.path());

    let mut options = ConversionOptions::new(assets.path(), assets.path());
    options.include_font = false;

    let report = convert_assets(&options).unwrap();

    assert_eq!(report.font_len, None);
    assert_eq!(report.images.len(), 2);
    assert!(!assets.path().join("font.c").exists());
}

#[test]
fn templates_directory_overrides_builtin() {
    let assets = tempfile::tempdir().unwrap();
    let templates = tempfile::tempdir().unwrap();
    write_assets(assets.path());

    fs::write(
        templates.path().join("images-fn-sig.template.c"),
        "void draw_{-name-}(void)\n"
    )
    .unwrap();

    let mut options = ConversionOptions::new(assets.path(), assets.path());
    options.templates_dir = Some(templates.path().to_path_buf());
    convert_assets(&options).unwrap();

    let header = fs::read_to_string(assets.path().join("images.h")).unwrap();
    assert!(header.contains("void draw_a_logo(void);\nvoid draw_c_icon(void);\n"));
}

#[test]
fn missing_assets_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let options = ConversionOptions::new(dir.path().join("missing"), dir.path());

    assert!(convert_assets(&options).is_err());
}

#[test]
fn rejected_headers_are_skipped() {
    let assets = tempfile::tempdir().unwrap();
    let images = assets.path().join("images");
    fs::create_dir(&images).unwrap();

    let row: [&[bool]; 1] = [&[true; 8]];
    fs::write(images.join("a_ok.bmp"), bitmap(&row)).unwrap();

    let mut shallow = bitmap(&row);
    // bits per pixel
    shallow[28..30].copy_from_slice(&16_u16.to_le_bytes());
    fs::write(images.join("b_shallow.bmp"), shallow).unwrap();

    let wide = vec![false; 16];
    let wide_rows: [&[bool]; 1] = [&wide];
    fs::write(images.join("c_wide.bmp"), bitmap(&wide_rows)).unwrap();

    let mut options = ConversionOptions::new(assets.path(), assets.path());
    options.decoder_options = options.decoder_options.set_max_width(8);

    let report = convert_assets(&options).unwrap();

    assert_eq!(report.images.len(), 1);
    assert_eq!(report.images[0].name, "a_ok");

    let reasons: Vec<String> = report
        .skipped
        .iter()
        .map(|(_, err)| format!("{err:?}"))
        .collect();
    assert_eq!(reasons.len(), 2);
    assert!(reasons[0].contains("Depth 16 unsupported"));
    assert!(reasons[1].contains("16 exceeds 8"));
    assert!(report.skipped[0].0.ends_with("b_shallow.bmp"));
    assert!(report.skipped[1].0.ends_with("c_wide.bmp"));
    assert!(matches!(report.skipped[0].1, Img2cErrors::DecodeErrors(..)));
    assert!(matches!(report.skipped[1].1, Img2cErrors::DecodeErrors(..)));

    let source = fs::read_to_string(assets.path().join("images.c")).unwrap();
    assert!(source.contains("render_a_ok"));
    assert!(!source.contains("render_b_shallow"));
    assert!(!source.contains("render_c_wide"));
}
