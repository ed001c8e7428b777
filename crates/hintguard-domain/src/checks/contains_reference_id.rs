use crate::violation::{Violation, ViolationKind};

pub fn run(id: &str, hint_path: &str) -> Option<Violation> {
    if hint_path.contains(id) {
        return None;
    }
    Some(Violation::new(
        id,
        Some(hint_path),
        ViolationKind::HintPathDoesNotContainReferenceId,
    ))
}
