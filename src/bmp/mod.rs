//! 32-bit BGRA BMP headers and codec.
//!
//! [`FileHeader`] and [`InfoHeader`] are public so callers can inspect or
//! build the raw header blocks; everyday use goes through
//! [`crate::decode()`] and [`crate::Bmp32Image::encode`].

pub(crate) mod decode;
pub(crate) mod encode;
mod fields;
mod file_header;
mod info_header;

pub use file_header::FileHeader;
pub use info_header::{ChannelMasks, Compression, InfoHeader};

use crate::error::BmpError;

/// Size of the BITMAPFILEHEADER block.
pub const FILE_HEADER_SIZE: usize = 14;
/// Smallest info header accepted on decode (BITMAPINFOHEADER).
pub const INFO_HEADER_MIN_SIZE: usize = 40;
/// Info header size written on encode (BITMAPV3INFOHEADER, with masks).
pub const INFO_HEADER_V3_SIZE: usize = 56;
/// `"BM"` read as a little-endian u16.
pub const SIGNATURE: u16 = 0x4D42;

/// Both validated headers plus the payload offset as an index.
pub(crate) struct Headers {
    pub file: FileHeader,
    pub info: InfoHeader,
    pub payload_offset: usize,
}

/// Parse both headers and check that at least one payload byte follows them.
pub(crate) fn parse_headers(data: &[u8]) -> Result<Headers, BmpError> {
    let file = FileHeader::parse(data)?;
    let info = InfoHeader::parse(data)?;
    let payload_offset = file.payload_offset() as usize;
    if data.len() <= payload_offset {
        return Err(BmpError::InvalidData(alloc::format!(
            "no pixel data: offset {payload_offset}, file length {}",
            data.len()
        )));
    }
    log::trace!(
        "BMP {}x{} {:?}, {:?}, info header {} bytes, pixel data at {}",
        info.width(),
        info.height(),
        info.row_order(),
        info.compression(),
        info.header_size(),
        payload_offset
    );
    Ok(Headers {
        file,
        info,
        payload_offset,
    })
}
