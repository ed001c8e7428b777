//! Repository adapters: discover project files, read and parse MSBuild XML,
//! answer file-existence queries.
//!
//! This crate is allowed to do filesystem IO. Rule evaluation stays in
//! `hintguard-domain`.

#![forbid(unsafe_code)]

mod discover;
mod error;
mod fs;
mod parse;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use hintguard_domain::model::{ProjectModel, WorkspaceModel};
use hintguard_types::RepoPath;
use rayon::prelude::*;

pub use discover::discover_projects;
pub use error::ProjectError;
pub use fs::FsFileChecker;
pub use parse::MSBUILD_NAMESPACE;

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use super::*;

    /// Parse arbitrary text as an MSBuild project file.
    ///
    /// Returns the number of `<Reference>` items on well-formed XML,
    /// `Err(...)` otherwise. **Never panics** on any input.
    pub fn parse_project(text: &str) -> anyhow::Result<usize> {
        let path = RepoPath::new("Fuzz.csproj");
        let refs = parse::parse_project(&path, text)?;
        Ok(refs.len())
    }
}

/// Which project files to load.
#[derive(Clone, Debug)]
pub enum ScopeInput {
    /// Walk the repo root for project files.
    Discover,
    /// Explicit project files; relative paths are taken from the repo root.
    Projects(Vec<Utf8PathBuf>),
}

/// Build the in-memory model the verifier runs on.
///
/// `project_folder` overrides the folder hint paths are resolved against
/// (relative values are taken from the repo root). Without it, each project
/// uses its own directory.
pub fn build_workspace_model(
    repo_root: &Utf8Path,
    scope: ScopeInput,
    project_folder: Option<&Utf8Path>,
) -> anyhow::Result<WorkspaceModel> {
    let project_paths: Vec<Utf8PathBuf> = match scope {
        ScopeInput::Discover => discover::discover_projects(repo_root)
            .context("discover project files")?
            .into_iter()
            .map(|p| p.to_utf8_pathbuf())
            .collect(),
        ScopeInput::Projects(paths) => paths,
    };

    let folder_override = project_folder.map(|f| repo_root.join(f));

    // Parsed in parallel; `collect` keeps input order.
    let projects = project_paths
        .par_iter()
        .map(|p| load_project(repo_root, p, folder_override.as_deref()))
        .collect::<Result<Vec<ProjectModel>, ProjectError>>()?;

    Ok(WorkspaceModel {
        repo_root: RepoPath::from(repo_root),
        projects,
    })
}

/// Read and parse a single project file.
pub fn load_project(
    repo_root: &Utf8Path,
    path: &Utf8Path,
    project_folder: Option<&Utf8Path>,
) -> Result<ProjectModel, ProjectError> {
    let abs = repo_root.join(path);
    let text = std::fs::read_to_string(&abs).map_err(|source| ProjectError::Read {
        path: abs.clone(),
        source,
    })?;

    let repo_path = RepoPath::relative_to(repo_root, &abs);
    let references = parse::parse_project(&repo_path, &text).map_err(|source| {
        ProjectError::Xml {
            path: abs.clone(),
            source,
        }
    })?;

    let folder = match project_folder {
        Some(folder) => folder.to_path_buf(),
        None => abs
            .parent()
            .map(Utf8Path::to_path_buf)
            .unwrap_or_else(|| repo_root.to_path_buf()),
    };

    tracing::debug!(
        project = %repo_path,
        folder = %folder,
        references = references.len(),
        "parsed project file"
    );

    Ok(ProjectModel {
        path: repo_path,
        file: abs,
        folder,
        references,
    })
}
