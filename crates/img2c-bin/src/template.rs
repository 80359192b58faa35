/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Text templates for generated sources
//!
//! A template named `images.c` lives in `images.template.c`. Placeholders
//! are written `{-name-}` and replaced in a single pass, replacement text is
//! inserted literally and never scanned for further placeholders.
use std::fs::read_to_string;
use std::path::PathBuf;

use log::debug;

use crate::errors::Img2cErrors;

const BUILTIN_TEMPLATES: [(&str, &str); 6] = [
    ("font.c", include_str!("../templates/font.template.c")),
    ("images.c", include_str!("../templates/images.template.c")),
    ("images.h", include_str!("../templates/images.template.h")),
    ("images-fn.c", include_str!("../templates/images-fn.template.c")),
    ("images-fn.h", include_str!("../templates/images-fn.template.h")),
    (
        "images-fn-sig.c",
        include_str!("../templates/images-fn-sig.template.c")
    )
];

/// Loads templates by name
///
/// Templates are looked up in the configured directory first,
/// falling back to the ones compiled into the binary.
#[derive(Clone, Debug, Default)]
pub struct TemplateStore {
    directory: Option<PathBuf>
}

impl TemplateStore {
    pub fn new(directory: Option<PathBuf>) -> TemplateStore {
        TemplateStore { directory }
    }

    /// File name holding the template `name`, e.g `images.c` -> `images.template.c`
    pub fn file_name(name: &str) -> Result<String, Img2cErrors> {
        match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
                Ok(format!("{stem}.template.{ext}"))
            }
            _ => Err(Img2cErrors::TemplateErrors(format!(
                "Template name {name:?} must be of the form <name>.<extension>"
            )))
        }
    }

    /// Load the body of template `name` with surrounding whitespace removed
    pub fn load(&self, name: &str) -> Result<String, Img2cErrors> {
        let file_name = TemplateStore::file_name(name)?;

        if let Some(dir) = &self.directory {
            let path = dir.join(&file_name);

            if path.is_file() {
                debug!("Loading template {:?}", path);
                return Ok(read_to_string(path)?.trim().to_string());
            }
        }
        BUILTIN_TEMPLATES
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .map(|(_, body)| body.trim().to_string())
            .ok_or_else(|| Img2cErrors::TemplateErrors(format!("Unknown template {file_name}")))
    }

    /// Load template `name` and substitute `arguments` into it
    pub fn hydrate(&self, name: &str, arguments: &[(&str, String)]) -> Result<String, Img2cErrors> {
        Ok(substitute(&self.load(name)?, arguments))
    }
}

/// Replace every `{-key-}` whose key is in `arguments`
///
/// Unknown placeholders are left untouched.
pub fn substitute(body: &str, arguments: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(body.len());
    let mut rest = body;

    while let Some(start) = rest.find("{-") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let value = after.find("-}").and_then(|end| {
            let key = &after[..end];
            arguments
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (value, end))
        });

        match value {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("{-");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Prefix every line but the first with `prefix`
///
/// Lines holding only whitespace are left alone.
pub fn indent_continuation(text: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);

    for (i, line) in text.split_inclusive('\n').enumerate() {
        if i != 0 && !line.trim().is_empty() {
            out.push_str(prefix);
        }
        out.push_str(line);
    }
    out
}
