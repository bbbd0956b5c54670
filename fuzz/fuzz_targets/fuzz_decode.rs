#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary input must never panic, only return an error.
    let _ = bmpkit::decode(data);
});
