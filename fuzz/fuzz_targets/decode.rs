#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok((content, rest)) = cbe::decode(data) {
        assert!(content.len() + rest.len() <= data.len());
    }
});
