use crate::checker::FileExistenceChecker;
use crate::violation::{Violation, ViolationKind};
use camino::{Utf8Path, Utf8PathBuf};

pub fn run<C: FileExistenceChecker + ?Sized>(
    id: &str,
    hint_path: &str,
    project_folder: &Utf8Path,
    checker: &C,
) -> Option<Violation> {
    let resolved = resolve_hint_path(project_folder, hint_path);
    if checker.exists(&resolved) {
        return None;
    }
    Some(Violation::new(
        id,
        Some(hint_path),
        ViolationKind::HintPathDoesNotExistOnFileSystem,
    ))
}

/// Join a hint path onto the project folder.
///
/// Backslashes (the separator project files are written with) become the
/// platform separator. `..` segments are kept as-is, and an absolute hint path
/// replaces the folder.
pub fn resolve_hint_path(project_folder: &Utf8Path, hint_path: &str) -> Utf8PathBuf {
    let native = hint_path.replace('\\', std::path::MAIN_SEPARATOR_STR);
    project_folder.join(native)
}
