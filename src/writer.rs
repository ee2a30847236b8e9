//! Writing the two manifest artifacts as one unit.
//!
//! Both files are staged as temporary files next to their destinations and
//! renamed into place afterwards. If the second rename fails the first
//! destination is put back the way it was, so the JSON and the script never
//! disagree after a failed run.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::ManifestError;
use crate::report::print_restore_failure;

/// Content destined for a single output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Returns true if the file on disk already holds exactly this content.
    pub fn is_current(&self) -> bool {
        match fs::read(&self.path) {
            Ok(existing) => existing == self.content.as_bytes(),
            Err(_) => false,
        }
    }
}

/// Writes `first` and `second` so that either both are replaced or neither is.
///
/// # Errors
///
/// Returns [`ManifestError::WriteOutput`] naming the destination that failed.
pub fn write_pair(first: &Artifact, second: &Artifact) -> Result<(), ManifestError> {
    let staged_first = stage(first)?;
    let staged_second = stage(second)?;

    let previous_first = snapshot(&first.path);

    staged_first
        .persist(&first.path)
        .map_err(|e| write_error(&first.path, e.error))?;

    if let Err(e) = staged_second.persist(&second.path) {
        if let Err(restore_error) = restore(&first.path, previous_first) {
            print_restore_failure(&first.path, &restore_error);
        }
        return Err(write_error(&second.path, e.error));
    }

    Ok(())
}

/// Writes the artifact content to a temporary file in the destination's directory.
fn stage(artifact: &Artifact) -> Result<NamedTempFile, ManifestError> {
    let dir = parent_dir(&artifact.path);

    let mut file = tempfile::Builder::new()
        .prefix(".toolmanifest-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| write_error(&artifact.path, e))?;

    file.write_all(artifact.content.as_bytes())
        .and_then(|_| file.as_file().sync_all())
        .map_err(|e| write_error(&artifact.path, e))?;

    Ok(file)
}

/// Previous content of `path`, `None` if it did not exist.
fn snapshot(path: &Path) -> Option<Vec<u8>> {
    fs::read(path).ok()
}

/// Puts `path` back to its previous content, removing it if it did not exist.
fn restore(path: &Path, previous: Option<Vec<u8>>) -> io::Result<()> {
    match previous {
        Some(bytes) => fs::write(path, bytes),
        None => fs::remove_file(path),
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn write_error(path: &Path, source: io::Error) -> ManifestError {
    ManifestError::WriteOutput {
        path: path.to_path_buf(),
        source,
    }
}
