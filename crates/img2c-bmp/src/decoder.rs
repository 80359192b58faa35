/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

// The container read here is the common WinBMPv3 layout
//
// - A 14 byte file header: the magic number ("BM"), file size, 4 reserved
//   bytes and the offset to the pixel data.
// - A 40 byte info header: header size, width, height, planes,
//   bits-per-pixel, compression, image size, x and y resolution
//   and two color counts we have no use for.
// - Pixel data at the offset, stored bottom row first.
//
// Asset bitmaps are produced by image editors with widths that keep rows
// 4 byte aligned, so records are read back to back without row padding.

use log::{debug, trace, warn};

use img2c_core::bytestream::{ByteIoError, ByteReader, ByteReaderTrait};
use img2c_core::image::MonotoneBitmapImage;
use img2c_core::options::DecoderOptions;

use crate::common::{BmpCompression, BmpHeader, BMP_HEADER_SIZE};
use crate::BmpDecoderErrors;

/// Probe some bytes to see
/// if they consist of a BMP image
pub fn probe_bmp(bytes: &[u8]) -> bool {
    bytes.len() >= BMP_HEADER_SIZE && bytes.starts_with(b"BM")
}

/// Map a failed header read to the error callers expect
fn header_error(err: ByteIoError) -> BmpDecoderErrors {
    match err {
        ByteIoError::NotEnoughBytes(..) => {
            BmpDecoderErrors::MalformedContainer("Stream is shorter than the bitmap header")
        }
        err => BmpDecoderErrors::IoErrors(err)
    }
}

/// A BMP decoder producing monochrome images.
///
/// # Usage
///
/// ## Extracting image metadata
/// ```no_run
/// use img2c_bmp::BmpDecoder;
/// use img2c_core::bytestream::ByteCursor;
///
/// fn main() -> Result<(), img2c_bmp::BmpDecoderErrors> {
///     let mut decoder = BmpDecoder::new(ByteCursor::new(b"BMP"));
///     let header = decoder.decode_headers()?;
///     println!("Image width: {}\t Image height: {}", header.width, header.height);
///     Ok(())
/// }
/// ```
///
/// ## Getting the pixels
///
/// ```no_run
/// use img2c_bmp::BmpDecoder;
/// use img2c_core::bytestream::ByteCursor;
///
/// fn main() -> Result<(), img2c_bmp::BmpDecoderErrors> {
///     let mut decoder = BmpDecoder::new(ByteCursor::new(b"BMP"));
///     let image = decoder.decode()?;
///     println!("Pixels on: {}", image.count_on());
///     Ok(())
/// }
/// ```
pub struct BmpDecoder<T>
where
    T: ByteReaderTrait
{
    bytes:   ByteReader<T>,
    options: DecoderOptions,
    header:  Option<BmpHeader>
}

impl<T> BmpDecoder<T>
where
    T: ByteReaderTrait
{
    /// Create a new bmp decoder that reads data from
    /// `data`
    pub fn new(data: T) -> BmpDecoder<T> {
        BmpDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new decoder instance with specified options
    pub fn new_with_options(data: T, options: DecoderOptions) -> BmpDecoder<T> {
        BmpDecoder {
            bytes: ByteReader::new(data),
            options,
            header: None
        }
    }

    fn header_u16(&mut self) -> Result<u16, BmpDecoderErrors> {
        self.bytes.get_u16_le_err().map_err(header_error)
    }

    fn header_u32(&mut self) -> Result<u32, BmpDecoderErrors> {
        self.bytes.get_u32_le_err().map_err(header_error)
    }

    fn read_header(&mut self) -> Result<BmpHeader, BmpDecoderErrors> {
        let signature = self
            .bytes
            .read_fixed_bytes_or_error::<2>()
            .map_err(header_error)?;

        let file_size = self.header_u32()?;
        // reserved
        self.header_u32()?;
        let data_offset = self.header_u32()?;
        let header_size = self.header_u32()?;
        let width = self.header_u32()?;
        let height = self.header_u32()?;
        // planes
        self.header_u16()?;
        let bits_per_pixel = self.header_u16()?;
        let compression = self.header_u32()?;
        let image_size = self.header_u32()?;
        let x_resolution = self.header_u32()?;
        let y_resolution = self.header_u32()?;
        // colors used, important colors
        self.header_u32()?;
        self.header_u32()?;

        trace!("Width: {}", width);
        trace!("Height: {}", height);
        trace!("Depth: {}", bits_per_pixel);
        trace!("File size: {}", file_size);
        trace!("Data offset: {}", data_offset);

        Ok(BmpHeader {
            signature,
            file_size,
            data_offset,
            header_size,
            width,
            height,
            bits_per_pixel,
            compression,
            image_size,
            x_resolution,
            y_resolution
        })
    }

    fn check_header(&self, header: &BmpHeader) -> Result<(), BmpDecoderErrors> {
        if self.options.strict_mode() && &header.signature != b"BM" {
            return Err(BmpDecoderErrors::InvalidMagicBytes(header.signature));
        }
        let (width, height) = header.dimensions();

        if width == 0 {
            return Err(BmpDecoderErrors::MalformedContainer(
                "Width is zero, invalid image"
            ));
        }
        if height == 0 {
            return Err(BmpDecoderErrors::MalformedContainer(
                "Height is zero, invalid image"
            ));
        }
        if width > self.options.max_width() {
            return Err(BmpDecoderErrors::TooLargeDimensions(
                "width",
                self.options.max_width(),
                width
            ));
        }
        if height > self.options.max_height() {
            return Err(BmpDecoderErrors::TooLargeDimensions(
                "height",
                self.options.max_height(),
                height
            ));
        }
        if header.bits_per_pixel != 24 && header.bits_per_pixel != 32 {
            return Err(BmpDecoderErrors::UnsupportedDepth(header.bits_per_pixel));
        }
        if header.compression() != BmpCompression::RGB {
            warn!(
                "Compression {:?} ({}) is ignored, pixels are read uncompressed",
                header.compression(),
                header.compression
            );
        }
        Ok(())
    }

    /// Decode headers stored in the bmp file
    ///
    /// Every field of the fixed header region is consumed, headers
    /// are only read once, later calls return the stored copy.
    /// A header that fails validation is not stored and the stream is
    /// rewound, so later calls report the same error.
    ///
    /// # Returns
    /// - Ok(header): The header fields
    /// - Err: Error that occurred when decoding headers
    pub fn decode_headers(&mut self) -> Result<BmpHeader, BmpDecoderErrors> {
        if let Some(header) = self.header {
            return Ok(header);
        }
        let header = self.read_header()?;

        if let Err(err) = self.check_header(&header) {
            self.bytes.set_position(0)?;
            return Err(err);
        }
        self.header = Some(header);

        Ok(header)
    }

    /// Get the image dimensions as a tuple of `(width, height)`
    ///
    /// Returns `None` if headers haven't been decoded
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.header.map(|header| header.dimensions())
    }

    /// Decode the image, returning the thresholded pixels
    ///
    /// Pixel records are read from the data offset until the
    /// recorded file size is reached, each record is on when its first
    /// three channels are all non-zero.
    ///
    /// # Errors
    /// - `MalformedContainer`: header is truncated or invalid
    /// - `TruncatedPixelData`: the pixel region ends before `width*height`
    ///   records were read
    pub fn decode(&mut self) -> Result<MonotoneBitmapImage, BmpDecoderErrors> {
        let header = self.decode_headers()?;

        let (width, height) = header.dimensions();
        let expected = width * height;
        let bytes_per_pixel = header.bytes_per_pixel();
        let end = u64::from(header.file_size);

        self.bytes.set_position(header.data_offset as usize)?;

        let mut pixels = vec![false; expected];
        let mut record = [0_u8; 4];
        let record = &mut record[..bytes_per_pixel];

        let mut position = u64::from(header.data_offset);
        let mut found = 0;

        while position < end && found < expected {
            match self.bytes.read_exact_bytes(record) {
                Ok(()) => {}
                Err(ByteIoError::NotEnoughBytes(..)) => {
                    return Err(BmpDecoderErrors::TruncatedPixelData(expected, found));
                }
                Err(err) => return Err(BmpDecoderErrors::IoErrors(err))
            }
            position += bytes_per_pixel as u64;

            // rows are stored bottom up
            let x = found % width;
            let y = height - 1 - found / width;

            pixels[y * width + x] = record[..3].iter().all(|channel| *channel != 0);
            found += 1;
        }

        if found < expected {
            return Err(BmpDecoderErrors::TruncatedPixelData(expected, found));
        }
        if position < end {
            debug!(
                "Ignoring {} bytes after the last pixel of a {}x{} image",
                end - position,
                width,
                height
            );
        }

        Ok(MonotoneBitmapImage::from_pixels(width, height, pixels))
    }
}

#[cfg(test)]
mod tests {
    use img2c_core::bytestream::ByteCursor;
    use img2c_core::options::DecoderOptions;

    use crate::{probe_bmp, BmpDecoder, BmpDecoderErrors, BMP_HEADER_SIZE};

    fn container(width: u32, height: u32, bpp: u16, pixels: &[u8]) -> Vec<u8> {
        let file_size = (BMP_HEADER_SIZE + pixels.len()) as u32;
        let mut out = Vec::new();

        out.extend_from_slice(b"BM");
        out.extend_from_slice(&file_size.to_le_bytes());
        out.extend_from_slice(&[0; 4]);
        out.extend_from_slice(&(BMP_HEADER_SIZE as u32).to_le_bytes());
        out.extend_from_slice(&40_u32.to_le_bytes());
        out.extend_from_slice(&width.to_le_bytes());
        out.extend_from_slice(&height.to_le_bytes());
        out.extend_from_slice(&1_u16.to_le_bytes());
        out.extend_from_slice(&bpp.to_le_bytes());
        out.extend_from_slice(&[0; 24]);
        out.extend_from_slice(pixels);
        out
    }

    #[test]
    fn two_pixel_image_is_thresholded() {
        let data = container(2, 1, 24, &[255, 255, 255, 0, 5, 0]);
        let image = BmpDecoder::new(ByteCursor::new(data)).decode().unwrap();

        assert_eq!(image.rows().collect::<Vec<_>>(), vec![&[true, false][..]]);
    }

    #[test]
    fn rows_are_flipped() {
        // bottom row first on disk
        let pixels = [
            1, 1, 1, 0, 0, 0, //
            0, 0, 0, 0, 0, 0
        ];
        let data = container(2, 2, 24, &pixels);
        let image = BmpDecoder::new(ByteCursor::new(data)).decode().unwrap();

        assert_eq!(image.row(0), &[false, false]);
        assert_eq!(image.row(1), &[true, false]);
    }

    #[test]
    fn alpha_byte_is_ignored() {
        let pixels = [9, 9, 9, 0, 9, 9, 0, 255];
        let data = container(2, 1, 32, &pixels);
        let image = BmpDecoder::new(ByteCursor::new(data)).decode().unwrap();

        assert_eq!(image.row(0), &[true, false]);
    }

    #[test]
    fn short_header_is_malformed() {
        let data = container(2, 1, 24, &[0; 6]);
        let err = BmpDecoder::new(ByteCursor::new(&data[..BMP_HEADER_SIZE - 1]))
            .decode()
            .unwrap_err();

        assert!(matches!(err, BmpDecoderErrors::MalformedContainer(_)));
        assert!(err.is_malformed_container());
    }

    #[test]
    fn missing_pixels_are_malformed() {
        let mut data = container(2, 2, 24, &[255; 12]);
        data.truncate(data.len() - 4);

        let err = BmpDecoder::new(ByteCursor::new(data)).decode().unwrap_err();
        assert!(matches!(err, BmpDecoderErrors::TruncatedPixelData(4, 2)));
    }

    #[test]
    fn file_size_ending_early_is_malformed() {
        let mut data = container(2, 2, 24, &[255; 12]);
        // record a file size covering a single pixel
        let short = (BMP_HEADER_SIZE + 3) as u32;
        data[2..6].copy_from_slice(&short.to_le_bytes());

        let err = BmpDecoder::new(ByteCursor::new(data)).decode().unwrap_err();
        assert!(matches!(err, BmpDecoderErrors::TruncatedPixelData(4, 1)));
    }

    #[test]
    fn signature_checked_only_in_strict_mode() {
        let mut data = container(2, 1, 24, &[255; 6]);
        data[0..2].copy_from_slice(b"XX");

        assert!(BmpDecoder::new(ByteCursor::new(&data)).decode().is_ok());

        let options = DecoderOptions::default().set_strict_mode(true);
        let err = BmpDecoder::new_with_options(ByteCursor::new(&data), options)
            .decode()
            .unwrap_err();
        assert!(matches!(err, BmpDecoderErrors::InvalidMagicBytes([b'X', b'X'])));
    }

    #[test]
    fn unsupported_depth_is_rejected() {
        let data = container(8, 1, 8, &[0; 8]);
        let err = BmpDecoder::new(ByteCursor::new(data)).decode().unwrap_err();

        assert!(matches!(err, BmpDecoderErrors::UnsupportedDepth(8)));
    }

    #[test]
    fn large_dimensions_rejected_before_decoding() {
        let data = container(64, 8, 24, &[]);
        let options = DecoderOptions::default().set_max_width(32);
        let err = BmpDecoder::new_with_options(ByteCursor::new(data), options)
            .decode()
            .unwrap_err();

        assert!(matches!(err, BmpDecoderErrors::TooLargeDimensions("width", 32, 64)));
    }

    #[test]
    fn large_height_rejected_before_decoding() {
        let data = container(8, 64, 24, &[]);
        let options = DecoderOptions::default().set_max_height(16);
        let err = BmpDecoder::new_with_options(ByteCursor::new(data), options)
            .decode()
            .unwrap_err();

        assert!(matches!(err, BmpDecoderErrors::TooLargeDimensions("height", 16, 64)));
    }

    #[test]
    fn rejected_header_is_reported_again() {
        let data = container(8, 1, 16, &[255; 16]);
        let mut decoder = BmpDecoder::new(ByteCursor::new(data));

        for _ in 0..2 {
            let err = decoder.decode_headers().unwrap_err();
            assert!(matches!(err, BmpDecoderErrors::UnsupportedDepth(16)));
        }
        assert!(decoder.dimensions().is_none());
    }

    #[test]
    fn sniffing_needs_signature_and_full_header() {
        let data = container(2, 1, 24, &[0; 6]);

        assert!(probe_bmp(&data));
        assert!(!probe_bmp(&data[..BMP_HEADER_SIZE - 1]));
        assert!(!probe_bmp(b"GIF89a"));

        let mut other = data.clone();
        other[0..2].copy_from_slice(b"XX");
        assert!(!probe_bmp(&other));
    }

    #[test]
    fn headers_can_be_read_alone() {
        let data = container(6, 8, 24, &[0; 6 * 8 * 3]);
        let mut decoder = BmpDecoder::new(ByteCursor::new(data));

        assert!(decoder.dimensions().is_none());
        let header = decoder.decode_headers().unwrap();
        assert_eq!(header.bits_per_pixel, 24);
        assert_eq!(decoder.dimensions(), Some((6, 8)));
        assert_eq!(decoder.decode().unwrap().count_on(), 0);
    }
}
