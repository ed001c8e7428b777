//! Fuzz target for the verifier and prefix-list parsing.
//!
//! Goal: arbitrary reference ids, hint paths and comma-separated prefix
//! lists never panic, and no reference yields more than three violations.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_verifier
//! ```

#![no_main]

use arbitrary::Arbitrary;
use camino::Utf8Path;
use hintguard_domain::model::ReferenceDecl;
use hintguard_domain::{FileExistenceChecker, Verifier};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct VerifierInput {
    references: Vec<(String, Option<String>)>,
    excluded: String,
    known: String,
    exists: bool,
}

struct Fixed(bool);

impl FileExistenceChecker for Fixed {
    fn exists(&self, _path: &Utf8Path) -> bool {
        self.0
    }
}

fuzz_target!(|input: VerifierInput| {
    if input.references.len() > 64 {
        return;
    }

    let excluded = hintguard_settings::parse_prefix_list(&input.excluded);
    let known = hintguard_settings::parse_prefix_list(&input.known);
    let references: Vec<ReferenceDecl> = input
        .references
        .iter()
        .map(|(id, hint_path)| ReferenceDecl::new(id.as_str(), hint_path.as_deref()))
        .collect();

    let verifier = Verifier::new(Fixed(input.exists));
    let violations = verifier.verify(&references, Utf8Path::new("/fuzz"), &excluded, &known);

    assert!(violations.len() <= references.len() * 3);
});
