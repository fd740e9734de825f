//! BITMAPFILEHEADER: the 14-byte block at the start of every BMP file.

use super::fields::{Cursor, FieldWriter};
use super::{FILE_HEADER_SIZE, INFO_HEADER_MIN_SIZE, INFO_HEADER_V3_SIZE, SIGNATURE};
use crate::error::BmpError;

/// Smallest payload offset a valid file can declare.
const MIN_PAYLOAD_OFFSET: u32 = (FILE_HEADER_SIZE + INFO_HEADER_MIN_SIZE) as u32;

/// Payload offset of every file this crate writes.
const ENCODED_PAYLOAD_OFFSET: u32 = (FILE_HEADER_SIZE + INFO_HEADER_V3_SIZE) as u32;

/// The BMP file header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    signature: u16,
    file_size: u32,
    reserved1: u16,
    reserved2: u16,
    payload_offset: u32,
}

impl FileHeader {
    /// Parse and validate the file header at the start of `data`.
    ///
    /// Checks, in order: at least 14 bytes, the `BM` signature, and a payload
    /// offset that leaves room for at least a 40-byte info header.
    pub fn parse(data: &[u8]) -> Result<Self, BmpError> {
        if data.len() < FILE_HEADER_SIZE {
            return Err(BmpError::UnexpectedEof);
        }
        let mut cur = Cursor::at(data, 0);
        let signature = cur.read::<u16>()?;
        if signature != SIGNATURE {
            return Err(BmpError::UnrecognizedFormat);
        }
        let file_size = cur.read::<u32>()?;
        let reserved1 = cur.read::<u16>()?;
        let reserved2 = cur.read::<u16>()?;
        let payload_offset = cur.read::<u32>()?;

        if payload_offset < MIN_PAYLOAD_OFFSET {
            return Err(BmpError::InvalidHeader(alloc::format!(
                "BMP pixel data offset {payload_offset} is inside the headers (minimum {MIN_PAYLOAD_OFFSET})"
            )));
        }

        Ok(Self {
            signature,
            file_size,
            reserved1,
            reserved2,
            payload_offset,
        })
    }

    /// Header for a file carrying `payload_len` pixel bytes after a 56-byte
    /// info header.
    pub fn for_payload(payload_len: usize) -> Result<Self, BmpError> {
        let file_size = u32::try_from(payload_len)
            .ok()
            .and_then(|len| len.checked_add(ENCODED_PAYLOAD_OFFSET))
            .ok_or(BmpError::PayloadTooLarge(payload_len))?;
        Ok(Self {
            signature: SIGNATURE,
            file_size,
            reserved1: 0,
            reserved2: 0,
            payload_offset: ENCODED_PAYLOAD_OFFSET,
        })
    }

    pub fn to_bytes(&self) -> [u8; FILE_HEADER_SIZE] {
        FieldWriter::<FILE_HEADER_SIZE>::new()
            .put(self.signature)
            .put(self.file_size)
            .put(self.reserved1)
            .put(self.reserved2)
            .put(self.payload_offset)
            .finish()
    }

    /// Declared total file size. Not validated on decode.
    pub fn file_size(&self) -> u32 {
        self.file_size
    }

    pub fn reserved(&self) -> (u16, u16) {
        (self.reserved1, self.reserved2)
    }

    /// Byte offset of the first pixel byte.
    pub fn payload_offset(&self) -> u32 {
        self.payload_offset
    }
}
