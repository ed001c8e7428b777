//! The individual HintPath rules.
//!
//! Each rule inspects one reference and returns at most one violation. The
//! [`Verifier`](crate::Verifier) decides which rules run and in what order.

pub mod contains_reference_id;
pub mod exists_on_disk;
pub mod known_prefix;
pub mod missing_hint_path;


/// Whether `id` starts with any of the excluded prefixes.
pub fn is_excluded(id: &str, excluded_prefixes: &[String]) -> bool {
    excluded_prefixes
        .iter()
        .any(|prefix| id.starts_with(prefix.as_str()))
}
