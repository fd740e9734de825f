use crate::error::BmpError;

/// Bytes per BGRA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Vertical order of the rows in a pixel buffer.
///
/// In the file, the order is carried by the sign of the info header's height
/// field: negative means top-down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RowOrder {
    /// First row in the buffer is the top of the image.
    TopDown,
    /// First row in the buffer is the bottom of the image (the BMP default).
    #[default]
    BottomUp,
}

impl RowOrder {
    /// Row order implied by a decoded signed height.
    pub fn from_signed_height(height: i32) -> Self {
        if height < 0 {
            Self::TopDown
        } else {
            Self::BottomUp
        }
    }

    pub fn is_top_down(self) -> bool {
        self == Self::TopDown
    }

    /// Signed height field for an image of `height` rows in this order.
    pub(crate) fn signed_height(self, height: i32) -> i32 {
        match self {
            Self::TopDown => -height,
            Self::BottomUp => height,
        }
    }
}

impl From<bool> for RowOrder {
    /// `true` maps to [`RowOrder::TopDown`].
    fn from(top_down: bool) -> Self {
        if top_down {
            Self::TopDown
        } else {
            Self::BottomUp
        }
    }
}

/// `width * height * 4`, or `DimensionsTooLarge` on overflow.
pub(crate) fn nominal_len(width: u32, height: u32) -> Result<usize, BmpError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|wh| wh.checked_mul(BYTES_PER_PIXEL))
        .ok_or(BmpError::DimensionsTooLarge { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_maps_to_order() {
        assert_eq!(RowOrder::from_signed_height(-5), RowOrder::TopDown);
        assert_eq!(RowOrder::from_signed_height(5), RowOrder::BottomUp);
        assert_eq!(RowOrder::TopDown.signed_height(5), -5);
        assert_eq!(RowOrder::BottomUp.signed_height(5), 5);
        assert_eq!(RowOrder::default(), RowOrder::BottomUp);
        assert!(RowOrder::from(true).is_top_down());
    }

    #[test]
    fn nominal_len_overflow() {
        assert_eq!(nominal_len(2, 3).unwrap(), 24);
        assert!(nominal_len(u32::MAX, u32::MAX).is_err());
    }
}
