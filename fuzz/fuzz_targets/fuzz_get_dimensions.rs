#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let size = imgdims::get_dimensions_from_bytes(data);
    if let Some((width, height)) = size.dimensions() {
        assert!(width > 0 && height > 0);
    }
});
