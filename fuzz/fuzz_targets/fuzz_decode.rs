#![no_main]
use libfuzzer_sys::fuzz_target;
use zenbmp32::{DecodeRequest, ImageInfo, PayloadMode};

fuzz_target!(|data: &[u8]| {
    // Must never panic, and probe must agree with decode on accept/reject
    let probed = ImageInfo::from_bytes(data);
    let decoded = zenbmp32::decode(data, enough::Unstoppable);
    assert_eq!(probed.is_ok(), decoded.is_ok());

    let _ = DecodeRequest::new(data)
        .with_payload_mode(PayloadMode::Exact)
        .decode(enough::Unstoppable);
});
