use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use hintguard_types::RepoPath;
use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

const PROJECT_EXTENSIONS: [&str; 3] = ["csproj", "vbproj", "fsproj"];
const SKIPPED_DIRS: [&str; 2] = ["bin", "obj"];

/// Discover MSBuild project files below `repo_root`.
///
/// Build output folders (`bin/`, `obj/`) and hidden directories are skipped.
/// The result is sorted by repo-relative path.
pub fn discover_projects(repo_root: &Utf8Path) -> anyhow::Result<Vec<RepoPath>> {
    let mut out: Vec<RepoPath> = Vec::new();

    let walker = WalkDir::new(repo_root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e));

    for entry in walker {
        let entry = entry.with_context(|| format!("walk {}", repo_root))?;
        if !entry.file_type().is_file() || !is_project_file(&entry) {
            continue;
        }
        let Some(abs) = pathbuf_to_utf8(entry.path().to_path_buf()) else {
            tracing::debug!(path = %entry.path().display(), "skipping non-UTF-8 path");
            continue;
        };
        out.push(RepoPath::relative_to(repo_root, &abs));
    }

    out.sort();
    out.dedup();

    tracing::debug!(count = out.len(), root = %repo_root, "discovered project files");
    Ok(out)
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.iter().any(|d| name.eq_ignore_ascii_case(d))
}

fn is_project_file(entry: &DirEntry) -> bool {
    entry
        .path()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| PROJECT_EXTENSIONS.iter().any(|p| ext.eq_ignore_ascii_case(p)))
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    fn write_file(path: &Utf8Path, contents: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, contents).expect("write file");
    }

    #[test]
    fn finds_all_project_kinds_sorted() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        write_file(&root.join("src/Web/Web.vbproj"), "<Project />");
        write_file(&root.join("src/App/App.csproj"), "<Project />");
        write_file(&root.join("tools/Build.fsproj"), "<Project />");
        write_file(&root.join("src/App/App.sln"), "");
        write_file(&root.join("README.md"), "");

        let projects = discover_projects(&root).expect("discover");
        let paths: Vec<&str> = projects.iter().map(|p| p.as_str()).collect();
        assert_eq!(
            paths,
            vec!["src/App/App.csproj", "src/Web/Web.vbproj", "tools/Build.fsproj"]
        );
    }

    #[test]
    fn skips_build_output_and_hidden_directories() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        write_file(&root.join("App/App.csproj"), "<Project />");
        write_file(&root.join("App/bin/Debug/App.csproj"), "<Project />");
        write_file(&root.join("App/obj/App.csproj"), "<Project />");
        write_file(&root.join(".git/App.csproj"), "<Project />");

        let projects = discover_projects(&root).expect("discover");
        let paths: Vec<&str> = projects.iter().map(|p| p.as_str()).collect();
        assert_eq!(paths, vec!["App/App.csproj"]);
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        assert!(discover_projects(&root).expect("discover").is_empty());
    }

    #[test]
    fn pathbuf_to_utf8_rejects_invalid() {
        #[cfg(unix)]
        {
            use std::ffi::OsString;
            use std::os::unix::ffi::OsStringExt;
            let invalid = OsString::from_vec(vec![0xFF, 0xFE, 0xFD]);
            assert!(pathbuf_to_utf8(PathBuf::from(invalid)).is_none());
        }
    }
}
