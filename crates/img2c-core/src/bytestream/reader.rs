/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};
use std::io::SeekFrom;

use crate::bytestream::ByteReaderTrait;

/// Errors raised when reading from a byte source
#[non_exhaustive]
pub enum ByteIoError {
    StdIoError(std::io::Error),
    TryFromIntError(core::num::TryFromIntError),
    // requested, available
    NotEnoughBytes(usize, usize),
    Generic(&'static str),
    SeekError(&'static str),
    SeekErrorOwned(String)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {}", err)
            }
            ByteIoError::TryFromIntError(err) => {
                writeln!(f, "Cannot convert to int {}", err)
            }
            ByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
            ByteIoError::SeekError(err) => {
                writeln!(f, "Seek error: {err}")
            }
            ByteIoError::SeekErrorOwned(err) => {
                writeln!(f, "Seek error {err}")
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for ByteIoError {}

impl From<std::io::Error> for ByteIoError {
    fn from(value: std::io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}

impl From<core::num::TryFromIntError> for ByteIoError {
    fn from(value: core::num::TryFromIntError) -> Self {
        ByteIoError::TryFromIntError(value)
    }
}

impl From<&'static str> for ByteIoError {
    fn from(value: &'static str) -> Self {
        ByteIoError::Generic(value)
    }
}

/// Endian aware reader over a [`ByteReaderTrait`] source
pub struct ByteReader<T: ByteReaderTrait> {
    inner: T
}

impl<T: ByteReaderTrait> ByteReader<T> {
    pub fn new(source: T) -> ByteReader<T> {
        ByteReader { inner: source }
    }
    #[inline(always)]
    pub fn skip(&mut self, num: usize) -> Result<u64, ByteIoError> {
        self.inner.z_seek(SeekFrom::Current(i64::try_from(num)?))
    }
    #[inline]
    pub fn set_position(&mut self, position: usize) -> Result<(), ByteIoError> {
        self.inner.z_seek(SeekFrom::Start(position as u64))?;

        Ok(())
    }
    #[inline(always)]
    pub fn position(&mut self) -> Result<u64, ByteIoError> {
        self.inner.z_position()
    }
    #[inline(always)]
    pub fn eof(&mut self) -> Result<bool, ByteIoError> {
        self.inner.is_eof()
    }
    #[inline(always)]
    pub fn read_u8_err(&mut self) -> Result<u8, ByteIoError> {
        let mut buf = [0];
        self.inner.read_const_bytes(&mut buf)?;
        Ok(buf[0])
    }
    #[inline(always)]
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ByteIoError> {
        let mut byte_store: [u8; N] = [0; N];
        self.inner.read_const_bytes(&mut byte_store)?;
        Ok(byte_store)
    }

    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        self.inner.read_exact_bytes(buf)
    }
}

macro_rules! get_single_type {
    ($name_be:tt,$name_le:tt,$int_type:tt) => {
        impl<T: ByteReaderTrait> ByteReader<T> {
            #[doc=concat!("Read ",stringify!($int_type)," as a big endian integer")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name_be(&mut self) -> Result<$int_type, ByteIoError> {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let mut space = [0; SIZE_OF_VAL];
                self.inner.read_const_bytes(&mut space)?;
                Ok($int_type::from_be_bytes(space))
            }

            #[doc=concat!("Read ",stringify!($int_type)," as a little endian integer")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name_le(&mut self) -> Result<$int_type, ByteIoError> {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let mut space = [0; SIZE_OF_VAL];
                self.inner.read_const_bytes(&mut space)?;
                Ok($int_type::from_le_bytes(space))
            }
        }
    };
}

get_single_type!(get_u16_be_err, get_u16_le_err, u16);
get_single_type!(get_u32_be_err, get_u32_le_err, u32);
