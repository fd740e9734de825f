use crate::bmp::{Compression, parse_headers};
use crate::error::BmpError;
use crate::pixel::RowOrder;

/// Header-level facts about a BMP, gathered without copying pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub row_order: RowOrder,
    pub compression: Compression,
    /// Declared info header size.
    pub header_size: u32,
    /// File size as declared in the file header (not checked against the input).
    pub declared_file_size: u32,
    pub payload_offset: usize,
    /// Bytes from the payload offset to the end of the input.
    pub payload_len: usize,
}

impl ImageInfo {
    /// Probe `data` with the same validation [`crate::decode()`] applies.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BmpError> {
        let headers = parse_headers(data)?;
        Ok(Self {
            width: headers.info.width(),
            height: headers.info.height(),
            row_order: headers.info.row_order(),
            compression: headers.info.compression(),
            header_size: headers.info.header_size(),
            declared_file_size: headers.file.file_size(),
            payload_offset: headers.payload_offset,
            payload_len: data.len() - headers.payload_offset,
        })
    }
}
