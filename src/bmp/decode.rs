//! Pixel payload extraction.

use alloc::vec::Vec;

use enough::Stop;

use super::parse_headers;
use crate::decode::PayloadMode;
use crate::error::BmpError;
use crate::image::Bmp32Image;
use crate::limits::Limits;
use crate::pixel::{BYTES_PER_PIXEL, nominal_len};

/// Decode a 32-bit BMP into an owned image.
pub(crate) fn decode_bmp32(
    data: &[u8],
    limits: Option<&Limits>,
    mode: PayloadMode,
    stop: &dyn Stop,
) -> Result<Bmp32Image, BmpError> {
    let headers = parse_headers(data)?;
    let width = headers.info.width();
    let height = headers.info.height();
    if let Some(limits) = limits {
        limits.check(width, height)?;
    }

    let nominal = nominal_len(width, height)?;
    let payload = &data[headers.payload_offset..];
    let payload = match mode {
        PayloadMode::Remainder => {
            if payload.len() != nominal {
                log::warn!(
                    "BMP pixel data is {} bytes, {width}x{height} needs {nominal}; keeping all of it",
                    payload.len()
                );
            }
            payload
        }
        PayloadMode::Exact => payload.get(..nominal).ok_or_else(|| {
            BmpError::InvalidData(alloc::format!(
                "BMP pixel data is {} bytes, {width}x{height} needs {nominal}",
                payload.len()
            ))
        })?,
    };

    if let Some(limits) = limits {
        limits.check_memory(payload.len())?;
    }
    stop.check()?;

    let row_bytes = (width as usize).saturating_mul(BYTES_PER_PIXEL);
    let pixels = copy_rows(payload, row_bytes, stop)?;
    Ok(Bmp32Image::from_parts(
        width,
        height,
        pixels,
        headers.info.row_order(),
    ))
}

/// Owned copy of `payload`, checking `stop` every 16 rows.
fn copy_rows(payload: &[u8], row_bytes: usize, stop: &dyn Stop) -> Result<Vec<u8>, BmpError> {
    let mut out = Vec::with_capacity(payload.len());
    for (row_idx, row) in payload.chunks(row_bytes.max(1)).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        out.extend_from_slice(row);
    }
    Ok(out)
}
