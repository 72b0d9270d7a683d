use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort manifest generation.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("stories.json not found at {}", .path.display())]
    MissingInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not decode JSON from {}", .path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not write to output file {}. Reason: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("Audio directory not found at {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("Could not list audio directory {}. Reason: {source}", .path.display())]
    ListDirectory {
        path: PathBuf,
        source: std::io::Error,
    },
}
