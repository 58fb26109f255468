use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Error: {} is not a valid directory.", .0.display())]
    NotADirectory(PathBuf),

    #[error("Error: Directory '{}' does not exist.", .0.display())]
    MissingDirectory(PathBuf),

    #[error("failed to access {} with `{source}`", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(
        "failed to read replacement rules from {} with `{source}`",
        path.display()
    )]
    Rules {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(
        "Error: {} and {} would both be written to {}.",
        first.display(),
        second.display(),
        output.display()
    )]
    Collision {
        output: PathBuf,
        first: PathBuf,
        second: PathBuf,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if the error is [`NotADirectory`] or
    /// [`MissingDirectory`].
    ///
    /// [`NotADirectory`]: Error::NotADirectory
    /// [`MissingDirectory`]: Error::MissingDirectory
    #[must_use]
    pub fn is_bad_directory(&self) -> bool {
        matches!(self, Self::NotADirectory(..) | Self::MissingDirectory(..))
    }

    /// Returns `true` if the error is [`Io`].
    ///
    /// [`Io`]: Error::Io
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns `true` if the error is [`Rules`].
    ///
    /// [`Rules`]: Error::Rules
    #[must_use]
    pub fn is_rules(&self) -> bool {
        matches!(self, Self::Rules { .. })
    }

    /// Returns `true` if the error is [`Collision`].
    ///
    /// [`Collision`]: Error::Collision
    #[must_use]
    pub fn is_collision(&self) -> bool {
        matches!(self, Self::Collision { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
