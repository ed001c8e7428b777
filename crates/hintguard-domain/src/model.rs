use camino::Utf8PathBuf;
use hintguard_types::{Location, RepoPath};

#[derive(Clone, Debug, Default)]
pub struct WorkspaceModel {
    pub repo_root: RepoPath,

    /// All project files in scope, in stable path order.
    pub projects: Vec<ProjectModel>,
}

#[derive(Clone, Debug, Default)]
pub struct ProjectModel {
    /// Project file path as reported in findings.
    pub path: RepoPath,

    /// Absolute project file path, as shown in build log lines.
    pub file: Utf8PathBuf,

    /// Folder that relative hint paths are resolved against.
    pub folder: Utf8PathBuf,

    /// `<Reference>` items in document order.
    pub references: Vec<ReferenceDecl>,
}

/// A `<Reference Include="...">` item and its optional `<HintPath>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceDecl {
    pub id: String,
    pub hint_path: Option<String>,
    pub location: Option<Location>,
}

impl ReferenceDecl {
    pub fn new(id: impl Into<String>, hint_path: Option<&str>) -> Self {
        Self {
            id: id.into(),
            hint_path: hint_path.map(str::to_string),
            location: None,
        }
    }
}
