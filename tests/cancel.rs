use enough::{Stop, StopReason, Unstoppable};
use zenbmp32::*;

/// Stop token that is already cancelled.
struct Cancelled;

impl Stop for Cancelled {
    fn check(&self) -> Result<(), StopReason> {
        Err(StopReason::Cancelled)
    }
}

fn sample() -> Bmp32Image {
    Bmp32Image::new(4, 4, vec![0x55; 64], RowOrder::TopDown).unwrap()
}

#[test]
fn cancelled_decode() {
    let encoded = sample().encode(Unstoppable).unwrap();
    let err = decode(&encoded, Cancelled).unwrap_err();
    assert!(matches!(err, BmpError::Cancelled(_)));
    assert!(!err.is_malformed_input());
}

#[test]
fn cancelled_encode() {
    assert!(matches!(
        sample().encode(Cancelled),
        Err(BmpError::Cancelled(_))
    ));
}

#[test]
fn malformed_input_wins_over_cancellation() {
    // headers are validated before the first stop check
    assert!(matches!(
        decode(b"not a bmp at all", Cancelled),
        Err(BmpError::UnrecognizedFormat)
    ));
}
