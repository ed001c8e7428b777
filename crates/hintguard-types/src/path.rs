use camino::{Utf8Path, Utf8PathBuf};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonical repo-relative path used in findings and reports.
///
/// Normalization rules are intentionally simple and deterministic:
/// - always forward slashes (`/`)
/// - no leading `./`
/// - projects outside the repo root keep their absolute path
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct RepoPath(String);

impl Default for RepoPath {
    fn default() -> Self {
        RepoPath::new(".")
    }
}

impl RepoPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while v.starts_with("./") {
            v = v.trim_start_matches("./").to_string();
        }
        if v.is_empty() {
            v = ".".to_string();
        }
        Self(v)
    }

    /// Express `path` relative to `root` when it lives below it.
    pub fn relative_to(root: &Utf8Path, path: &Utf8Path) -> Self {
        match path.strip_prefix(root) {
            Ok(rel) => RepoPath::new(rel.as_str()),
            Err(_) => RepoPath::new(path.as_str()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_utf8_pathbuf(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.0.clone())
    }
}

impl std::fmt::Display for RepoPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&Utf8Path> for RepoPath {
    fn from(value: &Utf8Path) -> Self {
        RepoPath::new(value.as_str())
    }
}

impl From<Utf8PathBuf> for RepoPath {
    fn from(value: Utf8PathBuf) -> Self {
        RepoPath::new(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_backslashes_and_leading_dot() {
        assert_eq!(RepoPath::new(".\\src\\App.csproj").as_str(), "src/App.csproj");
        assert_eq!(RepoPath::new("./././a.csproj").as_str(), "a.csproj");
        assert_eq!(RepoPath::new("").as_str(), ".");
    }

    #[test]
    fn relative_to_strips_root_when_possible() {
        let root = Utf8Path::new("/repo");
        assert_eq!(
            RepoPath::relative_to(root, Utf8Path::new("/repo/src/App/App.csproj")).as_str(),
            "src/App/App.csproj"
        );
        assert_eq!(
            RepoPath::relative_to(root, Utf8Path::new("/elsewhere/Lib.csproj")).as_str(),
            "/elsewhere/Lib.csproj"
        );
    }
}
