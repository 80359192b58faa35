/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{self, File};
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use tempfile::NamedTempFile;

use img2c_bmp::{probe_bmp, BmpDecoder, BmpHeader, BMP_HEADER_SIZE};
use img2c_core::image::MonotoneBitmapImage;
use img2c_core::options::DecoderOptions;

use crate::errors::Img2cErrors;

fn open_decoder(
    path: &Path, options: DecoderOptions
) -> Result<BmpDecoder<BufReader<File>>, Img2cErrors> {
    let fd = BufReader::new(File::open(path)?);

    Ok(BmpDecoder::new_with_options(fd, options))
}

/// Decode the bitmap stored at `path`
pub fn decode_bitmap_file(
    path: &Path, options: DecoderOptions
) -> Result<MonotoneBitmapImage, Img2cErrors> {
    debug!("Decoding {:?}", path);

    open_decoder(path, options)?
        .decode()
        .map_err(|e| Img2cErrors::DecodeErrors(path.to_path_buf(), e))
}

/// Read only the header of the bitmap at `path`
pub fn read_bitmap_header(path: &Path, options: DecoderOptions) -> Result<BmpHeader, Img2cErrors> {
    open_decoder(path, options)?
        .decode_headers()
        .map_err(|e| Img2cErrors::DecodeErrors(path.to_path_buf(), e))
}

/// Check whether the file at `path` starts like a bitmap container
pub fn looks_like_bitmap(path: &Path) -> Result<bool, Img2cErrors> {
    let mut start = Vec::with_capacity(BMP_HEADER_SIZE);
    File::open(path)?
        .take(BMP_HEADER_SIZE as u64)
        .read_to_end(&mut start)?;

    Ok(probe_bmp(&start))
}

/// List the regular files of `dir` sorted by file name
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>, Img2cErrors> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;

        if entry.file_type()?.is_file() {
            files.push(entry.path());
        } else {
            debug!("Skipping {:?}, not a file", entry.path());
        }
    }
    files.sort();

    Ok(files)
}

fn parent_dir_or_dot(path: &Path) -> &Path {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

/// Write `contents` to `dest` atomically
///
/// Contents go to a temporary file in the destination directory which
/// is then renamed into place, a failed write leaves `dest` untouched.
pub fn write_output(dest: &Path, contents: &str) -> Result<(), Img2cErrors> {
    let dir = parent_dir_or_dot(dest);
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(dest).map_err(|e| e.error)?;

    info!("Wrote {} bytes to {:?}", contents.len(), dest);

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::file_io::{list_files, looks_like_bitmap, write_output};

    #[test]
    fn write_creates_directories_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("nested").join("out.c");

        write_output(&dest, "first").unwrap();
        write_output(&dest, "second").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "second");
    }

    #[test]
    fn listing_is_sorted_and_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.bmp"), b"").unwrap();
        fs::write(dir.path().join("a.bmp"), b"").unwrap();
        fs::create_dir(dir.path().join("c")).unwrap();

        let files = list_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, ["a.bmp", "b.bmp"]);
    }

    #[test]
    fn bitmap_sniffing_reads_the_header_region() {
        let dir = tempfile::tempdir().unwrap();
        let bitmap = dir.path().join("logo.bmp");
        let text = dir.path().join("notes.bmp");

        let mut data = b"BM".to_vec();
        data.resize(54, 0);
        fs::write(&bitmap, &data).unwrap();
        fs::write(&text, b"BM but far too short").unwrap();

        assert!(looks_like_bitmap(&bitmap).unwrap());
        assert!(!looks_like_bitmap(&text).unwrap());
        assert!(looks_like_bitmap(&dir.path().join("missing.bmp")).is_err());
    }
}
