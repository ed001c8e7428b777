use camino::Utf8Path;

/// Answers whether a file-system path exists.
///
/// The domain never touches the file system itself; the repo layer supplies the
/// production implementation and tests supply stubs.
pub trait FileExistenceChecker {
    fn exists(&self, path: &Utf8Path) -> bool;
}

impl<T: FileExistenceChecker + ?Sized> FileExistenceChecker for &T {
    fn exists(&self, path: &Utf8Path) -> bool {
        (**self).exists(path)
    }
}

impl<T: FileExistenceChecker + ?Sized> FileExistenceChecker for Box<T> {
    fn exists(&self, path: &Utf8Path) -> bool {
        (**self).exists(path)
    }
}
