use std::io;
use std::path::PathBuf;

/// Fatal errors that abort a manifest run.
///
/// Per-file problems (an unreadable tool page, an odd filename) are never
/// reported through this type. They end up as [`crate::builder::Warning`]s
/// and the run continues with the filename-derived name.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The source directory could not be listed.
    #[error("Unable to read directory {}: {source}", path.display())]
    ReadDir {
        /// Directory that was scanned
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// One of the two output artifacts could not be written.
    #[error("Unable to write manifest file {}: {source}", path.display())]
    WriteOutput {
        /// Destination that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The manifest could not be serialized to JSON.
    #[error("Unable to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The configuration file or a configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ManifestError {
    /// Process exit code used by the command line for this error.
    ///
    /// Every fatal error maps to `1`, matching what build scripts that wrap
    /// the generator expect.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// The path involved in the failure, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ManifestError::ReadDir { path, .. } | ManifestError::WriteOutput { path, .. } => {
                Some(path)
            }
            ManifestError::Serialize(_) | ManifestError::Config(_) => None,
        }
    }
}
