#![no_main]

use libfuzzer_sys::fuzz_target;
use policy_export::{PolicyLock, ResolvedVersion};

fuzz_target!(|data: &[u8]| {
    // Lock decoding and version checks must never panic
    let Ok(lock) = serde_json::from_slice::<PolicyLock>(data) else {
        return;
    };

    let _ = lock.archive_file_name();
    for (name, cookbook) in &lock.cookbook_locks {
        let _ = ResolvedVersion::parse(cookbook.locked_version());
        let _ = cookbook.source_dir(name, std::path::Path::new("/repo"));
    }
    let _ = serde_json::to_string(&lock);
});
