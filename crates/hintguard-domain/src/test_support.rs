use crate::checker::FileExistenceChecker;
use crate::model::{ProjectModel, ReferenceDecl, WorkspaceModel};
use crate::policy::EffectiveConfig;
use camino::{Utf8Path, Utf8PathBuf};
use hintguard_types::RepoPath;
use std::cell::RefCell;
use std::collections::BTreeMap;

pub const PROJECT_FOLDER: &str = "/folder/";

/// File-existence stub: answers `default` unless a path has an override, and
/// records every path it was asked about.
#[derive(Debug, Default)]
pub struct StubChecker {
    default: bool,
    overrides: BTreeMap<Utf8PathBuf, bool>,
    calls: RefCell<Vec<Utf8PathBuf>>,
}

impl StubChecker {
    pub fn all_exist() -> Self {
        Self {
            default: true,
            ..Self::default()
        }
    }

    pub fn none_exist() -> Self {
        Self::default()
    }

    pub fn with_answer(mut self, path: Utf8PathBuf, exists: bool) -> Self {
        self.overrides.insert(path, exists);
        self
    }

    pub fn calls(&self) -> Vec<Utf8PathBuf> {
        self.calls.borrow().clone()
    }
}

impl FileExistenceChecker for StubChecker {
    fn exists(&self, path: &Utf8Path) -> bool {
        self.calls.borrow_mut().push(path.to_path_buf());
        self.overrides.get(path).copied().unwrap_or(self.default)
    }
}

/// Hint path as the verifier resolves it under [`PROJECT_FOLDER`].
pub fn resolved(hint_path: &str) -> Utf8PathBuf {
    Utf8Path::new(PROJECT_FOLDER).join(hint_path.replace('\\', std::path::MAIN_SEPARATOR_STR))
}

pub fn prefixes(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Excluded prefix list that never matches a test reference.
pub fn ignore_excluded_prefix() -> Vec<String> {
    prefixes(&["SomePrefixThatIsNeverUsedInAnyTest"])
}

/// Known prefix list whose empty entry accepts every hint path.
pub fn ignore_hint_path_prefix() -> Vec<String> {
    prefixes(&[""])
}

pub fn project(path: &str, references: Vec<ReferenceDecl>) -> ProjectModel {
    ProjectModel {
        path: RepoPath::new(path),
        file: Utf8Path::new(PROJECT_FOLDER).join(path),
        folder: Utf8PathBuf::from(PROJECT_FOLDER),
        references,
    }
}

pub fn workspace(projects: Vec<ProjectModel>) -> WorkspaceModel {
    WorkspaceModel {
        repo_root: RepoPath::new("."),
        projects,
    }
}

pub fn config(excluded: &[&str], known: &[&str]) -> EffectiveConfig {
    EffectiveConfig {
        excluded_reference_prefixes: prefixes(excluded),
        known_hint_path_prefixes: prefixes(known),
        ..EffectiveConfig::default()
    }
}
