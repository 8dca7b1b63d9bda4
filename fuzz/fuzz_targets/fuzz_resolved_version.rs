#![no_main]

use libfuzzer_sys::fuzz_target;
use policy_export::ResolvedVersion;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(version) = ResolvedVersion::parse(input) {
            assert_eq!(version.as_str(), input);
            assert!(!input.starts_with('.') && !input.ends_with('.'));
        }
    }
});
