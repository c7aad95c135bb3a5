#![no_main]

use libfuzzer_sys::fuzz_target;
use texforge_backend::synthesize;
use texforge_spec::{canonical_spec_hash, validate_spec, TextureSpec};

/// Keeps synthesis cheap; larger specs are still parsed and validated.
const MAX_FUZZ_PIXELS: usize = 64 * 64;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(spec) = TextureSpec::from_json(text) else {
        return;
    };

    let result = validate_spec(&spec);
    let _ = canonical_spec_hash(&spec);

    let dims = spec.dimensions();
    if result.is_ok() && dims.pixel_count() <= MAX_FUZZ_PIXELS {
        let buffer = synthesize(dims, &spec.fill);
        assert_eq!(buffer.pixels().len(), dims.pixel_count());
    }
});
