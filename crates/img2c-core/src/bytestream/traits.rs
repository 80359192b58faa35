/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for reading bytes in img2c
//!
//! This exposes the trait and implementations for the sources
//! the bitmap decoder can read from.

use std::io::{BufRead, BufReader, ErrorKind, Read, Seek, SeekFrom};

use crate::bytestream::reader::ByteIoError;

/// The Input trait implemented for readers.
///
/// We implement this for two kinds of sources, [`ByteCursor`] for
/// in memory buffers and [`BufReader`] over anything that can `Read`+`Seek`,
/// which covers files.
pub trait ByteReaderTrait {
    /// Read exact bytes required to fill `buf` or return an error if that isn't possible
    ///
    /// ## Errors
    /// In memory sources do not advance their position on error, buffered
    /// readers may have consumed part of the request.
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError>;

    /// Same as [`read_exact_bytes`](Self::read_exact_bytes) for a fixed size array
    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ByteIoError> {
        self.read_exact_bytes(buf)
    }

    /// Seek into a new position from the buffer
    ///
    /// Returns the new position from the start of the source
    fn z_seek(&mut self, from: SeekFrom) -> Result<u64, ByteIoError>;

    /// Report whether we are at the end of the source
    fn is_eof(&mut self) -> Result<bool, ByteIoError>;

    /// Return the current position from the start of the source
    fn z_position(&mut self) -> Result<u64, ByteIoError>;
}

/// An in memory cursor over bytes
///
/// Seeking beyond the end is allowed, reads from such a position fail.
pub struct ByteCursor<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> ByteCursor<T> {
    pub fn new(buffer: T) -> ByteCursor<T> {
        ByteCursor {
            stream:   buffer,
            position: 0
        }
    }
    /// Bytes remaining from the current position
    pub fn remaining(&self) -> usize {
        self.stream.as_ref().len().saturating_sub(self.position)
    }
}

impl<T: AsRef<[u8]>> ByteReaderTrait for ByteCursor<T> {
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        let remaining = self.remaining();

        if remaining < buf.len() {
            return Err(ByteIoError::NotEnoughBytes(buf.len(), remaining));
        }
        let start = self.position;
        buf.copy_from_slice(&self.stream.as_ref()[start..start + buf.len()]);
        self.position += buf.len();

        Ok(())
    }

    fn z_seek(&mut self, from: SeekFrom) -> Result<u64, ByteIoError> {
        let (base, offset) = match from {
            SeekFrom::Start(pos) => {
                self.position = usize::try_from(pos)?;
                return Ok(pos);
            }
            SeekFrom::End(pos) => (self.stream.as_ref().len(), pos),
            SeekFrom::Current(pos) => (self.position, pos)
        };
        let new_position = i64::try_from(base)?.checked_add(offset).ok_or(
            ByteIoError::SeekError("Seek offset overflowed")
        )?;

        if new_position < 0 {
            return Err(ByteIoError::SeekErrorOwned(format!(
                "Cannot seek to {new_position}, position is before the start of the stream"
            )));
        }
        self.position = usize::try_from(new_position)?;

        Ok(self.position as u64)
    }

    fn is_eof(&mut self) -> Result<bool, ByteIoError> {
        Ok(self.position >= self.stream.as_ref().len())
    }

    fn z_position(&mut self) -> Result<u64, ByteIoError> {
        Ok(self.position as u64)
    }
}

impl<R: Read + Seek> ByteReaderTrait for BufReader<R> {
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        match self.read_exact(buf) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                Err(ByteIoError::NotEnoughBytes(buf.len(), 0))
            }
            Err(e) => Err(e.into())
        }
    }

    fn z_seek(&mut self, from: SeekFrom) -> Result<u64, ByteIoError> {
        Ok(self.seek(from)?)
    }

    fn is_eof(&mut self) -> Result<bool, ByteIoError> {
        Ok(self.fill_buf()?.is_empty())
    }

    fn z_position(&mut self) -> Result<u64, ByteIoError> {
        Ok(self.stream_position()?)
    }
}
