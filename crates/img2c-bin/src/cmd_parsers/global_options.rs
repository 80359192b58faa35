/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::ArgMatches;
use img2c_matrix::PackMode;
use log::{info, Level};

use crate::cmd_parsers::get_decoder_options;
use crate::workflow::ConversionOptions;

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub conversion: ConversionOptions,
    pub probe:      bool
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let input = options.get_one::<PathBuf>("in").unwrap().clone();
    let output = options
        .get_one::<PathBuf>("out")
        .cloned()
        .unwrap_or_else(|| input.clone());

    let mut conversion = ConversionOptions::new(input, output);

    conversion.templates_dir = options.get_one::<PathBuf>("templates").cloned();
    conversion.wrap = *options.get_one::<usize>("wrap").unwrap();
    conversion.font_packing = *options.get_one::<PackMode>("font-packing").unwrap();
    conversion.image_packing = *options.get_one::<PackMode>("image-packing").unwrap();
    conversion.decoder_options = get_decoder_options(options);

    if options.value_source("no-font") == Some(ValueSource::CommandLine) {
        info!("Skipping font generation");
        conversion.include_font = false;
    }
    if conversion.decoder_options.strict_mode() {
        info!("Strict mode enabled");
    }

    CmdOptions {
        conversion,
        probe: options.get_flag("probe")
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use img2c_matrix::PackMode;

    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::parse_options;

    #[test]
    fn output_defaults_to_input() {
        let matches = create_cmd_args()
            .try_get_matches_from(["img2c", "-i", "keyboard/assets"])
            .unwrap();
        let options = parse_options(&matches);

        assert_eq!(options.conversion.output_dir, PathBuf::from("keyboard/assets"));
        assert_eq!(options.conversion.wrap, 6);
        assert_eq!(options.conversion.font_packing, PackMode::Tiled);
        assert_eq!(options.conversion.image_packing, PackMode::Rows);
        assert!(options.conversion.include_font);
        assert!(!options.probe);
    }

    #[test]
    fn advanced_flags_reach_decoder_options() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "img2c",
                "-o",
                "out",
                "--strict",
                "--max-width",
                "128",
                "--no-font",
                "--wrap",
                "0"
            ])
            .unwrap();
        let options = parse_options(&matches);

        assert_eq!(options.conversion.output_dir, PathBuf::from("out"));
        assert_eq!(options.conversion.wrap, 0);
        assert!(!options.conversion.include_font);
        assert!(options.conversion.decoder_options.strict_mode());
        assert_eq!(options.conversion.decoder_options.max_width(), 128);
        assert_eq!(options.conversion.decoder_options.max_height(), 1 << 14);
    }
}
