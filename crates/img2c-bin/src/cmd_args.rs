/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::builder::{PossibleValue, PossibleValuesParser, TypedValueParser};
use clap::{value_parser, Arg, ArgAction, Command};
use img2c_matrix::PackMode;

/// Parse a packing layout name into a [`PackMode`]
fn pack_mode_parser() -> impl TypedValueParser<Value = PackMode> {
    PossibleValuesParser::new([
        PossibleValue::new("tiled").help("6x8 tiles with column bytes, QMK font layout"),
        PossibleValue::new("qmk").help("Same as tiled"),
        PossibleValue::new("rows").help("Runs of 8 pixels along each row")
    ])
    .try_map(|name| PackMode::from_string_result(&name))
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("img2c")
        .about("Compile monochrome bitmap assets into C arrays for QMK OLED displays")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Assets directory holding font.bmp and images/")
            .value_parser(value_parser!(PathBuf))
            .default_value("assets"))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Directory to write font.c, images.c and images.h to")
            .long_help("Directory to write font.c, images.c and images.h to.\nDefaults to the assets directory")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("templates")
            .long("templates")
            .help("Directory with *.template.* files overriding the built-in templates")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("wrap")
            .long("wrap")
            .help("Number of bytes per line of generated arrays, 0 disables wrapping")
            .value_parser(value_parser!(usize))
            .default_value("6"))
        .arg(Arg::new("font-packing")
            .long("font-packing")
            .help("Packing layout of the font")
            .value_parser(pack_mode_parser())
            .default_value("tiled"))
        .arg(Arg::new("image-packing")
            .long("image-packing")
            .help("Packing layout of images")
            .value_parser(pack_mode_parser())
            .default_value("rows"))
        .arg(Arg::new("no-font")
            .long("no-font")
            .action(ArgAction::SetTrue)
            .help("Do not generate font.c"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print asset headers as JSON instead of converting"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the conversion"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Reject bitmaps whose signature is not BM"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of a bitmap")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of a bitmap")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
}
