//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - exclusion short-circuiting every rule
//! - compliant references producing nothing
//! - ordering and idempotence of verifier output

use crate::engine::evaluate;
use crate::model::ReferenceDecl;
use crate::test_support::{PROJECT_FOLDER, StubChecker, config, project, workspace};
use crate::verifier::Verifier;
use crate::violation::{Violation, ViolationKind};
use camino::Utf8Path;
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Strategy for reference ids (dotted assembly names).
fn arb_reference_id() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][a-zA-Z0-9]{0,10}(\\.[A-Z][a-zA-Z0-9]{0,8}){0,2}").unwrap()
}

/// Strategy for backslash-separated relative hint paths.
fn arb_hint_path() -> impl Strategy<Value = String> {
    prop::string::string_regex("(\\.\\.\\\\){0,2}[a-z][a-z0-9]{0,8}(\\\\[a-zA-Z0-9.]{1,10}){0,3}")
        .unwrap()
}

fn arb_reference() -> impl Strategy<Value = ReferenceDecl> {
    (arb_reference_id(), prop::option::of(arb_hint_path()))
        .prop_map(|(id, hint_path)| ReferenceDecl::new(id, hint_path.as_deref()))
}

fn arb_prefixes() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::string::string_regex("[A-Za-z.\\\\]{0,6}").unwrap(), 0..4)
}

fn folder() -> &'static Utf8Path {
    Utf8Path::new(PROJECT_FOLDER)
}

proptest! {
    #[test]
    fn excluded_references_never_produce_violations(
        id in arb_reference_id(),
        hint_path in prop::option::of(arb_hint_path()),
        known in arb_prefixes(),
        exists in any::<bool>(),
    ) {
        let checker = if exists { StubChecker::all_exist() } else { StubChecker::none_exist() };
        let verifier = Verifier::new(&checker);
        let prefix = id.chars().take(1).collect::<String>();
        let references = vec![ReferenceDecl::new(id.clone(), hint_path.as_deref())];

        let result = verifier.verify(&references, folder(), &[prefix], &known);

        prop_assert!(result.is_empty());
        prop_assert!(checker.calls().is_empty());
    }

    #[test]
    fn compliant_reference_produces_no_violations(
        id in arb_reference_id(),
        prefix in "[a-z]{1,6}\\\\",
        suffix in "[a-z]{0,6}",
    ) {
        let hint_path = format!("{prefix}{id}\\{suffix}.dll");
        let verifier = Verifier::new(StubChecker::all_exist());
        let references = vec![ReferenceDecl::new(id, Some(hint_path.as_str()))];

        let result = verifier.verify(&references, folder(), &[], &[prefix]);

        prop_assert!(result.is_empty());
    }

    #[test]
    fn hint_path_without_id_always_reports_the_pair(
        hint_path in arb_hint_path(),
        known in arb_prefixes(),
        exists in any::<bool>(),
    ) {
        // '#' never appears in generated hint paths.
        let id = "Zz#Reference";
        let checker = if exists { StubChecker::all_exist() } else { StubChecker::none_exist() };
        let verifier = Verifier::new(&checker);
        let references = vec![ReferenceDecl::new(id, Some(hint_path.as_str()))];

        let result = verifier.verify(&references, folder(), &[], &known);

        let expected = Violation::new(
            id,
            Some(hint_path.as_str()),
            ViolationKind::HintPathDoesNotContainReferenceId,
        );
        prop_assert!(result.contains(&expected));
    }

    #[test]
    fn missing_hint_path_yields_exactly_one_violation(
        id in arb_reference_id(),
        known in arb_prefixes(),
    ) {
        let verifier = Verifier::new(StubChecker::none_exist());
        let references = vec![ReferenceDecl::new(id.clone(), None)];

        let result = verifier.verify(&references, folder(), &[], &known);

        prop_assert_eq!(result, vec![Violation::new(&id, None, ViolationKind::MissingHintPath)]);
    }

    #[test]
    fn per_reference_violations_are_bounded_and_in_rule_order(
        references in prop::collection::vec(arb_reference(), 0..12),
        known in arb_prefixes(),
        exists in any::<bool>(),
    ) {
        let checker = if exists { StubChecker::all_exist() } else { StubChecker::none_exist() };
        let verifier = Verifier::new(&checker);

        for reference in &references {
            let mut out = Vec::new();
            verifier.verify_reference(reference, folder(), &[], &known, &mut out);

            prop_assert!(out.len() <= 3);
            let kinds: Vec<ViolationKind> = out.iter().map(|v| v.kind).collect();
            let mut sorted = kinds.clone();
            sorted.sort();
            prop_assert_eq!(kinds, sorted);
            prop_assert!(out.iter().all(|v| v.reference == reference.id));
        }
    }

    #[test]
    fn verify_is_idempotent(
        references in prop::collection::vec(arb_reference(), 0..12),
        excluded in arb_prefixes(),
        known in arb_prefixes(),
    ) {
        let verifier = Verifier::new(StubChecker::all_exist());

        let first = verifier.verify(&references, folder(), &excluded, &known);
        let second = verifier.verify(&references, folder(), &excluded, &known);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn evaluate_findings_match_verifier_output(
        references in prop::collection::vec(arb_reference(), 0..12),
        known in arb_prefixes(),
    ) {
        let verifier = Verifier::new(StubChecker::none_exist());
        let expected = verifier.verify(&references, folder(), &[], &known);

        let known_refs: Vec<&str> = known.iter().map(String::as_str).collect();
        let mut cfg = config(&[], &known_refs);
        cfg.max_findings = usize::MAX;
        let model = workspace(vec![project("App.csproj", references)]);
        let report = evaluate(&model, &cfg, StubChecker::none_exist());

        let actual: Vec<Violation> = report.violations.into_iter().map(|v| v.violation).collect();
        prop_assert_eq!(report.findings.len(), expected.len());
        prop_assert_eq!(actual, expected);
    }
}
