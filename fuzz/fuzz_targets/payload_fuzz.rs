//! Fuzz test for payload parsing
//!
//! Feeds arbitrary bytes through the entity registry and writes back
//! whatever was resolved. Parsing may fail; it must never panic, and a
//! resolved model must always serialize.
//!
//! Run with: cargo +nightly fuzz run payload_fuzz -- -max_total_time=60

#![no_main]

use betasdk_json::{create_from_bytes, serialize_to_bytes};
use betasdk_models::create_entity_from_discriminator_value;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(Some(model)) = create_from_bytes(data, create_entity_from_discriminator_value) {
        let written = serialize_to_bytes(model.as_ref());
        assert!(written.is_ok(), "resolved model failed to serialize: {:?}", written.err());

        // A written model parses again as the same kind.
        if let Ok(bytes) = written {
            let again = create_from_bytes(&bytes, create_entity_from_discriminator_value);
            assert!(matches!(again, Ok(Some(_))), "rewritten payload did not parse");
        }
    }
});
