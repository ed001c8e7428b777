use camino::Utf8Path;
use hintguard_domain::FileExistenceChecker;

/// Answers existence queries against the real file system.
///
/// Only regular files count; a hint path that names a directory is missing.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsFileChecker;

impl FileExistenceChecker for FsFileChecker {
    fn exists(&self, path: &Utf8Path) -> bool {
        path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    #[test]
    fn regular_files_exist_and_directories_do_not() {
        let tmp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path");
        std::fs::create_dir_all(root.join("lib")).expect("mkdir");
        std::fs::write(root.join("lib/Foo.dll"), b"").expect("write");

        assert!(FsFileChecker.exists(&root.join("lib/Foo.dll")));
        assert!(!FsFileChecker.exists(&root.join("lib")));
        assert!(!FsFileChecker.exists(&root.join("lib/Bar.dll")));
    }
}
