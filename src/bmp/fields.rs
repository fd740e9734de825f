//! Little-endian fixed-width field codec.
//!
//! BMP headers are a flat run of 16- and 32-bit little-endian integers at
//! fixed offsets. [`LeField`] converts one field, [`Cursor`] walks a buffer
//! reading fields in order and [`FieldWriter`] lays them back out.

use crate::error::BmpError;

/// An integer stored as a fixed-width little-endian field.
pub(crate) trait LeField: Sized + Copy {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Decode from a slice of exactly [`Self::WIDTH`] bytes. Byte 0 is the
    /// least significant; signed types reinterpret the bit pattern as two's
    /// complement.
    fn from_le_slice(bytes: &[u8]) -> Result<Self, BmpError>;

    /// Encode into a slice of exactly [`Self::WIDTH`] bytes.
    fn write_le(self, out: &mut [u8]);
}

macro_rules! impl_le_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl LeField for $ty {
                const WIDTH: usize = core::mem::size_of::<$ty>();

                fn from_le_slice(bytes: &[u8]) -> Result<Self, BmpError> {
                    let raw: [u8; core::mem::size_of::<$ty>()] =
                        bytes.try_into().map_err(|_| BmpError::FieldWidth {
                            expected: Self::WIDTH,
                            actual: bytes.len(),
                        })?;
                    Ok(<$ty>::from_le_bytes(raw))
                }

                fn write_le(self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_le_field!(u16, i16, u32, i32);

// ── Cursor for reading from &[u8] ───────────────────────────────────

/// Sequential field reader over a byte slice.
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Start reading at byte `pos` of `data`.
    pub(crate) fn at(data: &'a [u8], pos: usize) -> Self {
        Self { data, pos }
    }

    pub(crate) fn read<T: LeField>(&mut self) -> Result<T, BmpError> {
        let end = self
            .pos
            .checked_add(T::WIDTH)
            .ok_or(BmpError::UnexpectedEof)?;
        let bytes = self.data.get(self.pos..end).ok_or(BmpError::UnexpectedEof)?;
        let value = T::from_le_slice(bytes)?;
        self.pos = end;
        Ok(value)
    }
}

// ── Writer into a fixed-size block ──────────────────────────────────

/// Sequential field writer into an `N`-byte header block.
pub(crate) struct FieldWriter<const N: usize> {
    buf: [u8; N],
    pos: usize,
}

impl<const N: usize> FieldWriter<N> {
    pub(crate) fn new() -> Self {
        Self {
            buf: [0u8; N],
            pos: 0,
        }
    }

    pub(crate) fn put<T: LeField>(&mut self, value: T) -> &mut Self {
        value.write_le(&mut self.buf[self.pos..self.pos + T::WIDTH]);
        self.pos += T::WIDTH;
        self
    }

    pub(crate) fn finish(&self) -> [u8; N] {
        debug_assert_eq!(self.pos, N, "header block not fully written");
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_is_little_endian() {
        assert_eq!(u16::from_le_slice(&[0x42, 0x4D]).unwrap(), 0x4D42);
        assert_eq!(
            u32::from_le_slice(&[0x78, 0x56, 0x34, 0x12]).unwrap(),
            0x1234_5678
        );
    }

    #[test]
    fn signed_decode_reinterprets_bits() {
        assert_eq!(i32::from_le_slice(&[0xFB, 0xFF, 0xFF, 0xFF]).unwrap(), -5);
        assert_eq!(i16::from_le_slice(&[0xFF, 0xFF]).unwrap(), -1);
        assert_eq!(
            i32::from_le_slice(&[0x00, 0x00, 0x00, 0x80]).unwrap(),
            i32::MIN
        );
    }

    #[test]
    fn wrong_width_is_rejected() {
        assert!(matches!(
            u32::from_le_slice(&[1, 2, 3]),
            Err(BmpError::FieldWidth {
                expected: 4,
                actual: 3
            })
        ));
        assert!(u16::from_le_slice(&[1, 2, 3]).is_err());
        assert!(i32::from_le_slice(&[]).is_err());
    }

    #[test]
    fn encode_signed_as_twos_complement() {
        let mut out = [0u8; 4];
        (-5i32).write_le(&mut out);
        assert_eq!(out, [0xFB, 0xFF, 0xFF, 0xFF]);

        let mut out = [0u8; 2];
        0x4D42u16.write_le(&mut out);
        assert_eq!(&out, b"BM");
    }

    #[test]
    fn cursor_reads_in_order_and_stops_at_end() {
        let data = [0x01, 0x00, 0x02, 0x00, 0x00, 0x00, 0xFF];
        let mut cur = Cursor::at(&data, 0);
        assert_eq!(cur.read::<u16>().unwrap(), 1);
        assert_eq!(cur.read::<u32>().unwrap(), 2);
        assert!(matches!(cur.read::<u16>(), Err(BmpError::UnexpectedEof)));

        let mut cur = Cursor::at(&data, usize::MAX);
        assert!(matches!(cur.read::<u32>(), Err(BmpError::UnexpectedEof)));
    }

    #[test]
    fn writer_lays_out_fields() {
        let mut w = FieldWriter::<6>::new();
        w.put(0x4D42u16).put(-1i32);
        assert_eq!(w.finish(), [0x42, 0x4D, 0xFF, 0xFF, 0xFF, 0xFF]);
    }
}
