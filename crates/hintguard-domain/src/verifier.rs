use crate::checker::FileExistenceChecker;
use crate::checks::{
    contains_reference_id, exists_on_disk, is_excluded, known_prefix, missing_hint_path,
};
use crate::model::ReferenceDecl;
use crate::policy::RuleSet;
use crate::violation::{Violation, ViolationKind};
use camino::Utf8Path;

/// Evaluates the HintPath rules over reference declarations.
///
/// Per reference, in order:
/// 1. ids starting with an excluded prefix are skipped;
/// 2. a missing hint path yields one violation and nothing else;
/// 3. known prefix, 4. contains reference id, 5. exists on disk are
///    evaluated independently, so one hint path can fail all three.
#[derive(Clone, Debug)]
pub struct Verifier<C> {
    checker: C,
    rules: RuleSet,
}

impl<C: FileExistenceChecker> Verifier<C> {
    pub fn new(checker: C) -> Self {
        Self::with_rules(checker, RuleSet::default())
    }

    pub fn with_rules(checker: C, rules: RuleSet) -> Self {
        Self { checker, rules }
    }

    /// Violations for all references, in document order then rule order.
    pub fn verify(
        &self,
        references: &[ReferenceDecl],
        project_folder: &Utf8Path,
        excluded_prefixes: &[String],
        known_hint_path_prefixes: &[String],
    ) -> Vec<Violation> {
        let mut out = Vec::new();
        for reference in references {
            self.verify_reference(
                reference,
                project_folder,
                excluded_prefixes,
                known_hint_path_prefixes,
                &mut out,
            );
        }
        out
    }

    pub fn verify_reference(
        &self,
        reference: &ReferenceDecl,
        project_folder: &Utf8Path,
        excluded_prefixes: &[String],
        known_hint_path_prefixes: &[String],
        out: &mut Vec<Violation>,
    ) {
        if is_excluded(&reference.id, excluded_prefixes) {
            return;
        }

        let Some(hint_path) = reference.hint_path.as_deref() else {
            if self.rules.is_enabled(ViolationKind::MissingHintPath) {
                out.extend(missing_hint_path::run(reference));
            }
            return;
        };

        let id = reference.id.as_str();
        if self.rules.is_enabled(ViolationKind::HintPathWithWrongPrefix) {
            out.extend(known_prefix::run(id, hint_path, known_hint_path_prefixes));
        }
        if self.rules.is_enabled(ViolationKind::HintPathDoesNotContainReferenceId) {
            out.extend(contains_reference_id::run(id, hint_path));
        }
        if self.rules.is_enabled(ViolationKind::HintPathDoesNotExistOnFileSystem) {
            out.extend(exists_on_disk::run(
                id,
                hint_path,
                project_folder,
                &self.checker,
            ));
        }
    }
}
