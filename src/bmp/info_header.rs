//! BITMAPINFOHEADER and its BI_BITFIELDS mask extension.
//!
//! Parsing accepts any header of 40 bytes or more, but only 32-bit pixels
//! stored as BI_RGB or as BI_BITFIELDS with the canonical BGRA masks.
//! Serialization always produces the 56-byte BITMAPV3INFOHEADER form.

use super::fields::{Cursor, FieldWriter};
use super::{FILE_HEADER_SIZE, INFO_HEADER_MIN_SIZE, INFO_HEADER_V3_SIZE};
use crate::error::BmpError;
use crate::pixel::RowOrder;

const BITS_PER_PIXEL: u16 = 32;

// ── Compression enum ────────────────────────────────────────────────

/// Compression modes a 32-bit file can declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Compression {
    /// `BI_RGB` (0): no masks, BGRA byte order implied.
    Rgb,
    /// `BI_BITFIELDS` (3): explicit channel masks follow the header.
    Bitfields,
}

impl Compression {
    pub fn from_u32(num: u32) -> Option<Self> {
        match num {
            0 => Some(Self::Rgb),
            3 => Some(Self::Bitfields),
            _ => None,
        }
    }

    pub fn to_u32(self) -> u32 {
        match self {
            Self::Rgb => 0,
            Self::Bitfields => 3,
        }
    }
}

// ── Channel masks ───────────────────────────────────────────────────

/// Per-channel bit masks of a BI_BITFIELDS header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChannelMasks {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
    pub alpha: u32,
}

impl ChannelMasks {
    /// The only layout accepted: one byte per channel, B G R A in memory.
    pub const BGRA: Self = Self {
        red: 0x00FF_0000,
        green: 0x0000_FF00,
        blue: 0x0000_00FF,
        alpha: 0xFF00_0000,
    };
}

// ── Info header ─────────────────────────────────────────────────────

/// The BMP info header (DIB header).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    header_size: u32,
    width: i32,
    height: i32,
    planes: u16,
    bits_per_pixel: u16,
    compression: Compression,
    image_size: u32,
    x_pels_per_meter: i32,
    y_pels_per_meter: i32,
    colors_used: u32,
    colors_important: u32,
    masks: Option<ChannelMasks>,
}

impl InfoHeader {
    /// Parse and validate the info header that follows the file header in
    /// `data` (the whole file buffer, not a sub-slice).
    pub fn parse(data: &[u8]) -> Result<Self, BmpError> {
        if data.len() < FILE_HEADER_SIZE + INFO_HEADER_MIN_SIZE {
            return Err(BmpError::UnexpectedEof);
        }
        let mut cur = Cursor::at(data, FILE_HEADER_SIZE);
        let header_size = cur.read::<u32>()?;
        let width = cur.read::<i32>()?;
        let height = cur.read::<i32>()?;
        let planes = cur.read::<u16>()?;
        let bits_per_pixel = cur.read::<u16>()?;
        let compression_raw = cur.read::<u32>()?;
        let image_size = cur.read::<u32>()?;
        let x_pels_per_meter = cur.read::<i32>()?;
        let y_pels_per_meter = cur.read::<i32>()?;
        let colors_used = cur.read::<u32>()?;
        let colors_important = cur.read::<u32>()?;

        if (header_size as usize) < INFO_HEADER_MIN_SIZE {
            return Err(BmpError::InvalidHeader(alloc::format!(
                "BMP info header size {header_size} is below {INFO_HEADER_MIN_SIZE}"
            )));
        }
        if width <= 0 {
            return Err(BmpError::InvalidHeader(alloc::format!(
                "BMP width must be positive, got {width}"
            )));
        }
        if height == 0 {
            return Err(BmpError::InvalidHeader("BMP height is zero".into()));
        }
        if bits_per_pixel != BITS_PER_PIXEL {
            return Err(BmpError::UnsupportedVariant(alloc::format!(
                "BMP bit depth {bits_per_pixel} unsupported (only 32)"
            )));
        }
        let compression = Compression::from_u32(compression_raw).ok_or_else(|| {
            BmpError::UnsupportedVariant(alloc::format!(
                "BMP compression {compression_raw} unsupported (only BI_RGB and BI_BITFIELDS)"
            ))
        })?;

        let masks = match compression {
            Compression::Rgb => None,
            Compression::Bitfields => {
                if (header_size as usize) < INFO_HEADER_V3_SIZE {
                    return Err(BmpError::InvalidHeader(alloc::format!(
                        "BI_BITFIELDS needs a {INFO_HEADER_V3_SIZE}-byte info header, got {header_size}"
                    )));
                }
                if data.len() < FILE_HEADER_SIZE + INFO_HEADER_V3_SIZE {
                    return Err(BmpError::UnexpectedEof);
                }
                let masks = ChannelMasks {
                    red: cur.read::<u32>()?,
                    green: cur.read::<u32>()?,
                    blue: cur.read::<u32>()?,
                    alpha: cur.read::<u32>()?,
                };
                if masks != ChannelMasks::BGRA {
                    return Err(BmpError::UnsupportedVariant(alloc::format!(
                        "BMP channel masks r={:#010x} g={:#010x} b={:#010x} a={:#010x} are not BGRA",
                        masks.red,
                        masks.green,
                        masks.blue,
                        masks.alpha
                    )));
                }
                Some(masks)
            }
        };

        Ok(Self {
            header_size,
            width,
            height,
            planes,
            bits_per_pixel,
            compression,
            image_size,
            x_pels_per_meter,
            y_pels_per_meter,
            colors_used,
            colors_important,
            masks,
        })
    }

    /// Header for writing a `width` x `|height|` image; a negative `height`
    /// marks top-down rows.
    pub fn new(width: i32, height: i32) -> Result<Self, BmpError> {
        let image_size = i64::from(width)
            .checked_mul(i64::from(height))
            .and_then(|wh| wh.checked_mul(4))
            .and_then(|size| u32::try_from(size.unsigned_abs()).ok())
            .ok_or(BmpError::DimensionsTooLarge {
                width: width.unsigned_abs(),
                height: height.unsigned_abs(),
            })?;
        Ok(Self {
            header_size: INFO_HEADER_V3_SIZE as u32,
            width,
            height,
            planes: 1,
            bits_per_pixel: BITS_PER_PIXEL,
            compression: Compression::Bitfields,
            image_size,
            x_pels_per_meter: 0,
            y_pels_per_meter: 0,
            colors_used: 0,
            colors_important: 0,
            masks: Some(ChannelMasks::BGRA),
        })
    }

    pub fn to_bytes(&self) -> [u8; INFO_HEADER_V3_SIZE] {
        // Serialized form is always V3; masks default to BGRA for BI_RGB headers.
        let masks = self.masks.unwrap_or(ChannelMasks::BGRA);
        FieldWriter::<INFO_HEADER_V3_SIZE>::new()
            .put(INFO_HEADER_V3_SIZE as u32)
            .put(self.width)
            .put(self.height)
            .put(self.planes)
            .put(self.bits_per_pixel)
            .put(Compression::Bitfields.to_u32())
            .put(self.image_size)
            .put(self.x_pels_per_meter)
            .put(self.y_pels_per_meter)
            .put(self.colors_used)
            .put(self.colors_important)
            .put(masks.red)
            .put(masks.green)
            .put(masks.blue)
            .put(masks.alpha)
            .finish()
    }

    /// Declared header size (40, 56, 108, 124...).
    pub fn header_size(&self) -> u32 {
        self.header_size
    }

    /// Image width in pixels (always positive once parsed).
    pub fn width(&self) -> u32 {
        self.width.unsigned_abs()
    }

    /// Image height in pixels, the magnitude of the signed field.
    pub fn height(&self) -> u32 {
        self.height.unsigned_abs()
    }

    /// Raw signed height as stored in the file.
    pub fn signed_height(&self) -> i32 {
        self.height
    }

    pub fn row_order(&self) -> RowOrder {
        RowOrder::from_signed_height(self.height)
    }

    pub fn planes(&self) -> u16 {
        self.planes
    }

    pub fn bits_per_pixel(&self) -> u16 {
        self.bits_per_pixel
    }

    pub fn compression(&self) -> Compression {
        self.compression
    }

    pub fn image_size(&self) -> u32 {
        self.image_size
    }

    /// Horizontal and vertical resolution in pixels per meter.
    pub fn resolution(&self) -> (i32, i32) {
        (self.x_pels_per_meter, self.y_pels_per_meter)
    }

    pub fn colors_used(&self) -> u32 {
        self.colors_used
    }

    pub fn colors_important(&self) -> u32 {
        self.colors_important
    }

    /// Channel masks; `None` for BI_RGB headers.
    pub fn masks(&self) -> Option<ChannelMasks> {
        self.masks
    }
}
