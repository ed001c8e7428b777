use crate::violation::{Violation, ViolationKind};

/// Passes when the hint path starts with at least one known prefix.
///
/// An empty prefix matches every hint path; an empty prefix list matches none.
pub fn run(id: &str, hint_path: &str, known_prefixes: &[String]) -> Option<Violation> {
    if known_prefixes
        .iter()
        .any(|prefix| hint_path.starts_with(prefix.as_str()))
    {
        return None;
    }
    Some(Violation::new(
        id,
        Some(hint_path),
        ViolationKind::HintPathWithWrongPrefix,
    ))
}
