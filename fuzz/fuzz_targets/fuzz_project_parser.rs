//! Fuzz target for MSBuild project parsing.
//!
//! Goal: the parser should **never panic** on any input.
//! Malformed XML is an error, not a crash.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_project_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = hintguard_repo::fuzz::parse_project(text);
    }
});
