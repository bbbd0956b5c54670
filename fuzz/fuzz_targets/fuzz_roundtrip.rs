#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // If the input decodes, re-encoding and decoding again must preserve
    // every pixel (encode is always 24-bit, which is lossless for the
    // color channels of every supported depth).
    let Ok(decoded) = bmpkit::decode(data) else {
        return;
    };

    let reencoded = bmpkit::encode(&decoded).expect("decoded bitmap must encode");
    let decoded2 = bmpkit::decode(&reencoded).expect("re-encoded data failed to decode");

    assert_eq!(decoded.width(), decoded2.width());
    assert_eq!(decoded.height(), decoded2.height());
    for (a, b) in decoded.pixels().iter().zip(decoded2.pixels()) {
        assert_eq!((a.b, a.g, a.r), (b.b, b.g, b.r), "roundtrip pixel mismatch");
    }
});
