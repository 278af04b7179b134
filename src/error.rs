use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NoveltyError {
    /// A file could not be opened, read, created or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input exists but is not a readable WAV container.
    #[error("failed to read WAV container {}: {source}", path.display())]
    Container {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    #[error("unsupported audio format: {0}")]
    Format(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// hound header errors that describe the sample encoding rather than a
/// damaged container.
const ENCODING_REASONS: &[&str] = &[
    "file contains zero channels",
    "bits per sample is 0",
    "bits per sample is not 32",
    "bits per sample is not 8 or 16",
    "bits per sample is not a multiple of 8",
];

impl NoveltyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        NoveltyError::Io {
            path: path.into(),
            source,
        }
    }

    /// Sorts a hound error into the I/O or format class.
    pub(crate) fn from_wav(path: impl Into<PathBuf>, error: hound::Error) -> Self {
        match error {
            hound::Error::IoError(source) => NoveltyError::io(path, source),
            hound::Error::Unsupported => {
                NoveltyError::Format("sample encoding not supported by the WAV reader".into())
            }
            hound::Error::InvalidSampleFormat => {
                NoveltyError::Format("sample format does not match the declared encoding".into())
            }
            hound::Error::FormatError(reason) if ENCODING_REASONS.contains(&reason) => {
                NoveltyError::Format(reason.into())
            }
            source => NoveltyError::Container {
                path: path.into(),
                source,
            },
        }
    }

    /// True for failures to access a file or parse its container.
    pub fn is_io(&self) -> bool {
        matches!(self, NoveltyError::Io { .. } | NoveltyError::Container { .. })
    }
}

pub type Result<T> = std::result::Result<T, NoveltyError>;
