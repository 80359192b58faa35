/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Command line driver compiling bitmap assets into C sources
//!
//! The conversion itself is exposed through [`workflow::convert_assets`]
//! for use without the command line.

use std::process::exit;

use log::{error, info};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::Img2cErrors;
use crate::probe_files::probe_input_files;
use crate::workflow::convert_assets;

mod cmd_args;
mod cmd_parsers;
pub mod errors;
mod file_io;
mod probe_files;
mod serde;
pub mod template;
pub mod workflow;

/// Run the workflow selected on the command line
///
/// Returns the number of assets that could not be processed.
fn create_and_exec_workflow_from_cmd(options: &CmdOptions) -> Result<usize, Img2cErrors> {
    if options.probe {
        return probe_input_files(&options.conversion);
    }
    let report = convert_assets(&options.conversion)?;

    if let Some(len) = report.font_len {
        info!("Font: {} bytes", len);
    }
    info!("Images: {}", report.images.len());

    for (path, _) in &report.skipped {
        error!("Skipped {:?}", path);
    }
    Ok(report.skipped.len())
}

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::global_options::setup_logger(&options);

    let parsed_opts = cmd_parsers::global_options::parse_options(&options);

    match create_and_exec_workflow_from_cmd(&parsed_opts) {
        Ok(0) => {}
        Ok(failures) => {
            error!(" {} asset(s) could not be converted", failures);
            exit(1);
        }
        Err(err) => {
            println!();
            error!(" Could not complete workflow, reason {:?}", err);
            println!();
            exit(-1);
        }
    }
}
