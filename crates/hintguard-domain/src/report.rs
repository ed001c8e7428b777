use crate::violation::Violation;
use camino::Utf8PathBuf;
use hintguard_types::{Finding, HintguardData, RepoPath, Severity, Verdict};

#[derive(Clone, Debug, Default)]
pub struct SeverityCounts {
    pub info: u32,
    pub warning: u32,
    pub error: u32,
}

impl SeverityCounts {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut counts = SeverityCounts::default();
        for f in findings {
            match f.severity {
                Severity::Info => counts.info += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Error => counts.error += 1,
            }
        }
        counts
    }
}

/// A violation together with the project it was found in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocatedViolation {
    pub project: RepoPath,
    pub project_file: Utf8PathBuf,
    pub project_folder: Utf8PathBuf,
    pub violation: Violation,
}

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    /// Findings for the report, possibly truncated.
    pub findings: Vec<Finding>,
    /// Every violation, never truncated; this is what the build log shows.
    pub violations: Vec<LocatedViolation>,
    pub data: HintguardData,
    pub counts: SeverityCounts,
}
