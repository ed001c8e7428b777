use crate::checker::FileExistenceChecker;
use crate::checks::is_excluded;
use crate::fingerprint::fingerprint_for_reference;
use crate::model::{ProjectModel, ReferenceDecl, WorkspaceModel};
use crate::policy::EffectiveConfig;
use crate::report::{DomainReport, LocatedViolation, SeverityCounts};
use crate::verifier::Verifier;
use crate::violation::Violation;
use hintguard_types::{Finding, HintguardData, Severity, Verdict};
use serde_json::json;

/// Run the verifier over every project and assemble the domain report.
///
/// Findings keep verifier order (project, then document, then rule order).
pub fn evaluate<C: FileExistenceChecker>(
    model: &WorkspaceModel,
    cfg: &EffectiveConfig,
    checker: C,
) -> DomainReport {
    let verifier = Verifier::with_rules(checker, cfg.rules);
    let severity = cfg.severity();

    let mut findings: Vec<Finding> = Vec::new();
    let mut violations: Vec<LocatedViolation> = Vec::new();
    let mut references_scanned = 0u32;
    let mut references_excluded = 0u32;

    for project in &model.projects {
        for reference in &project.references {
            references_scanned += 1;
            if is_excluded(&reference.id, &cfg.excluded_reference_prefixes) {
                references_excluded += 1;
                continue;
            }

            let mut found = Vec::new();
            verifier.verify_reference(
                reference,
                &project.folder,
                &cfg.excluded_reference_prefixes,
                &cfg.known_hint_path_prefixes,
                &mut found,
            );

            for violation in found {
                findings.push(to_finding(project, reference, &violation, severity));
                violations.push(LocatedViolation {
                    project: project.path.clone(),
                    project_file: project.file.clone(),
                    project_folder: project.folder.clone(),
                    violation,
                });
            }
        }
    }

    let total = findings.len() as u32;

    let mut emitted = findings;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    let verdict = compute_verdict(!violations.is_empty(), cfg.treat_warnings_as_errors);
    let counts = SeverityCounts::from_findings(&emitted);

    let data = HintguardData {
        projects_scanned: model.projects.len() as u32,
        references_scanned,
        references_excluded,
        treat_warnings_as_errors: cfg.treat_warnings_as_errors,
        findings_total: total,
        findings_emitted: emitted.len() as u32,
        truncated_reason,
    };

    DomainReport {
        verdict,
        findings: emitted,
        violations,
        data,
        counts,
    }
}

fn compute_verdict(has_violations: bool, treat_warnings_as_errors: bool) -> Verdict {
    match (has_violations, treat_warnings_as_errors) {
        (false, _) => Verdict::Pass,
        (true, true) => Verdict::Fail,
        (true, false) => Verdict::Warn,
    }
}

fn to_finding(
    project: &ProjectModel,
    reference: &ReferenceDecl,
    violation: &Violation,
    severity: Severity,
) -> Finding {
    let kind = violation.kind;
    let hint_path = violation.hint_path.as_deref();
    let fingerprint = fingerprint_for_reference(
        kind.check_id(),
        kind.code(),
        project.path.as_str(),
        &violation.reference,
        hint_path,
    );

    let mut data = json!({
        "reference": violation.reference,
        "project": project.path.as_str(),
        "project_folder": project.folder.as_str(),
    });
    if let Some(hint_path) = hint_path {
        data["hint_path"] = json!(hint_path);
    }

    Finding {
        severity,
        check_id: kind.check_id().to_string(),
        code: kind.code().to_string(),
        message: violation.to_string(),
        location: reference.location.clone(),
        help: Some(kind.help().to_string()),
        url: None,
        fingerprint: Some(fingerprint),
        data,
    }
}
