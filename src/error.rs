use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub(crate) enum GenerateError {
    /// An insertion used a format specifier outside of the supported set.
    #[error("{report}")]
    MalformedInsertion {
        specifier: String,
        line: usize,
        report: String,
    },
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
