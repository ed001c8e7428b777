use crate::violation::ViolationKind;
use hintguard_types::Severity;

/// Explicit per-rule switches.
///
/// An empty-string entry in the known prefixes also makes the prefix rule pass
/// for every hint path; that behavior is kept, but this is the direct way to
/// turn a rule off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleSet {
    pub missing_hint_path: bool,
    pub known_prefix: bool,
    pub contains_reference_id: bool,
    pub exists_on_disk: bool,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::all()
    }
}

impl RuleSet {
    pub fn all() -> Self {
        Self {
            missing_hint_path: true,
            known_prefix: true,
            contains_reference_id: true,
            exists_on_disk: true,
        }
    }

    pub fn is_enabled(&self, kind: ViolationKind) -> bool {
        match kind {
            ViolationKind::MissingHintPath => self.missing_hint_path,
            ViolationKind::HintPathWithWrongPrefix => self.known_prefix,
            ViolationKind::HintPathDoesNotContainReferenceId => self.contains_reference_id,
            ViolationKind::HintPathDoesNotExistOnFileSystem => self.exists_on_disk,
        }
    }

    pub fn set(&mut self, kind: ViolationKind, enabled: bool) {
        let slot = match kind {
            ViolationKind::MissingHintPath => &mut self.missing_hint_path,
            ViolationKind::HintPathWithWrongPrefix => &mut self.known_prefix,
            ViolationKind::HintPathDoesNotContainReferenceId => &mut self.contains_reference_id,
            ViolationKind::HintPathDoesNotExistOnFileSystem => &mut self.exists_on_disk,
        };
        *slot = enabled;
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    /// Reference ids starting with any of these are skipped entirely.
    pub excluded_reference_prefixes: Vec<String>,
    /// A hint path must start with at least one of these.
    pub known_hint_path_prefixes: Vec<String>,
    pub treat_warnings_as_errors: bool,
    pub max_findings: usize,
    pub rules: RuleSet,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            excluded_reference_prefixes: Vec::new(),
            known_hint_path_prefixes: Vec::new(),
            treat_warnings_as_errors: false,
            max_findings: 200,
            rules: RuleSet::default(),
        }
    }
}

impl EffectiveConfig {
    pub fn severity(&self) -> Severity {
        if self.treat_warnings_as_errors {
            Severity::Error
        } else {
            Severity::Warning
        }
    }
}
