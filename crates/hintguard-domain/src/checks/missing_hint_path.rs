use crate::model::ReferenceDecl;
use crate::violation::{Violation, ViolationKind};

pub fn run(reference: &ReferenceDecl) -> Option<Violation> {
    if reference.hint_path.is_some() {
        return None;
    }
    Some(Violation::new(
        &reference.id,
        None,
        ViolationKind::MissingHintPath,
    ))
}
