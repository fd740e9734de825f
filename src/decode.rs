use enough::Stop;

use crate::error::BmpError;
use crate::image::Bmp32Image;
use crate::limits::Limits;

/// How much of the data after the payload offset becomes the pixel buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PayloadMode {
    /// Everything from the payload offset to the end of the input, whatever
    /// its length. A padded or truncated file yields a pixel buffer that is
    /// longer or shorter than `width * height * 4`.
    #[default]
    Remainder,
    /// Exactly `width * height * 4` bytes. Trailing bytes are dropped; a
    /// short payload is rejected with [`BmpError::InvalidData`].
    Exact,
}

/// Decode configuration builder.
///
/// ```no_run
/// use zenbmp32::{DecodeRequest, Limits, PayloadMode, Unstoppable};
///
/// let data: &[u8] = &[]; // your BMP bytes
/// let limits = Limits { max_pixels: Some(1 << 24), ..Default::default() };
/// let image = DecodeRequest::new(data)
///     .with_limits(&limits)
///     .with_payload_mode(PayloadMode::Exact)
///     .decode(Unstoppable)?;
/// # Ok::<(), zenbmp32::BmpError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    payload_mode: PayloadMode,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            payload_mode: PayloadMode::default(),
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_payload_mode(mut self, mode: PayloadMode) -> Self {
        self.payload_mode = mode;
        self
    }

    /// Validate the headers and copy the pixel payload out of the input.
    pub fn decode(self, stop: impl Stop) -> Result<Bmp32Image, BmpError> {
        crate::bmp::decode::decode_bmp32(self.data, self.limits, self.payload_mode, &stop)
    }
}
