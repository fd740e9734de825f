use alloc::string::String;
use enough::StopReason;

/// Errors from BMP decoding, encoding and image construction.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("invalid pixel data: {0}")]
    InvalidData(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("field width mismatch: expected {expected} bytes, got {actual}")]
    FieldWidth { expected: usize, actual: usize },

    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("pixel data length mismatch: expected {expected} bytes, got {actual}")]
    PixelDataLength { expected: usize, actual: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("pixel payload of {0} bytes does not fit in a BMP file")]
    PayloadTooLarge(usize),

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl BmpError {
    /// Whether the error rejects the input bytes themselves (truncation, bad
    /// magic, unsupported bit depth/compression/masks, bad payload offset).
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::UnrecognizedFormat
                | Self::InvalidHeader(_)
                | Self::UnsupportedVariant(_)
                | Self::InvalidData(_)
                | Self::UnexpectedEof
                | Self::FieldWidth { .. }
        )
    }
}

impl From<StopReason> for BmpError {
    fn from(r: StopReason) -> Self {
        BmpError::Cancelled(r)
    }
}
