use camino::Utf8PathBuf;

/// Failures while loading a project file.
///
/// Rule outcomes are never errors; these only cover files that cannot be
/// read or are not well-formed XML.
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("read {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {path}: {source}")]
    Xml {
        path: Utf8PathBuf,
        #[source]
        source: roxmltree::Error,
    },
}
