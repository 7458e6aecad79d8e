use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading correspondences or computing statistics over them
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("could not read match file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed match line {line} ({reason}): \"{content}\"")]
    Parse {
        line: usize,
        content: String,
        reason: String,
    },
    #[error("number of features in image 1 ({left}) is different to the number of features in image 2 ({right})")]
    DimensionMismatch { left: usize, right: usize },
    #[error("the correspondence set is empty, mean distance is undefined")]
    EmptyDataset,
    #[error("expected correspondences of {expected} points, found {found}")]
    ArityMismatch { expected: usize, found: usize },
}

/// Failures while reading and validating the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("error opening the configuration file \"{path}\": {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0} parameter is empty")]
    EmptyValue(&'static str),
    #[error("{key}: the path {path} does not exist")]
    PathNotFound { key: &'static str, path: PathBuf },
    #[error("neither FILE_MATCHES2 nor FILE_MATCHES3 is set")]
    NoMatchFile,
    #[error("FILE_MATCHES2 and FILE_MATCHES3 are mutually exclusive")]
    ConflictingMatchFiles,
    #[error("match file name \"{name}\" does not name {expected} images separated by '_'")]
    InvalidMatchName { name: String, expected: usize },
}
