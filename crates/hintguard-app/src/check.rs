//! The `check` use case: verify HintPaths and produce a report plus build log lines.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use hintguard_domain::FileExistenceChecker;
use hintguard_domain::report::{DomainReport, LocatedViolation};
use hintguard_render::{BuildLogContext, BuildMessage, render_build_message};
use hintguard_repo::{FsFileChecker, ScopeInput};
use hintguard_settings::{Overrides, ResolvedConfig};
use hintguard_types::{HintguardReport, ReportEnvelope, SCHEMA_REPORT_V1, Verdict};
use time::OffsetDateTime;

use crate::report::tool_meta;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Repository root path.
    pub repo_root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Explicit project files. Empty means discover them under `repo_root`.
    pub projects: Vec<Utf8PathBuf>,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report (findings may be truncated).
    pub report: HintguardReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
    /// One build log line per violation, never truncated.
    pub log_lines: Vec<BuildMessage>,
}

/// Run the check use case against the real file system.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    run_check_with(input, FsFileChecker)
}

/// Run the check use case with an injected existence checker.
pub fn run_check_with<C: FileExistenceChecker>(
    input: CheckInput<'_>,
    checker: C,
) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        hintguard_settings::HintguardConfigV1::default()
    } else {
        hintguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = hintguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let scope = if input.projects.is_empty() {
        ScopeInput::Discover
    } else {
        ScopeInput::Projects(input.projects.clone())
    };

    let model = hintguard_repo::build_workspace_model(
        input.repo_root,
        scope,
        resolved.project_folder.as_deref(),
    )
    .context("build workspace model")?;

    tracing::debug!(
        projects = model.projects.len(),
        excluded = ?resolved.effective.excluded_reference_prefixes,
        known = ?resolved.effective.known_hint_path_prefixes,
        "verifying hint paths"
    );

    let DomainReport {
        verdict,
        findings,
        violations,
        data,
        counts,
    } = hintguard_domain::evaluate(&model, &resolved.effective, checker);

    tracing::debug!(
        warnings = counts.warning,
        errors = counts.error,
        total = data.findings_total,
        "evaluation finished"
    );

    let log_lines = violations
        .iter()
        .map(|v| build_message(v, &resolved))
        .collect();

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict,
        findings,
        data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
        log_lines,
    })
}

fn build_message(located: &LocatedViolation, resolved: &ResolvedConfig) -> BuildMessage {
    let effective = &resolved.effective;
    let ctx = BuildLogContext {
        project_folder: located.project_folder.as_str(),
        excluded_reference_prefixes: &effective.excluded_reference_prefixes,
        known_hint_path_prefixes: &effective.known_hint_path_prefixes,
        treat_warnings_as_errors: effective.treat_warnings_as_errors,
    };
    let v = &located.violation;
    render_build_message(
        v.message(),
        located.project_file.as_str(),
        &v.reference,
        v.hint_path.as_deref(),
        &ctx,
    )
}

/// Map verdict to exit code: 0 = pass/warn (build continues), 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    if verdict.continues_build() { 0 } else { 2 }
}
