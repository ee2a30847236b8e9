use serde::{Deserialize, Serialize};

use crate::error::ManifestError;

/// A single tool as it appears in the navigation manifest.
///
/// Field order matters: the index page and existing artifacts expect
/// `name` before `file`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Human-readable display name
    pub name: String,
    /// Path of the tool page relative to the project root, e.g. `tools/demo.html`
    pub file: String,
}

impl ManifestEntry {
    /// Creates an entry for `filename` living under `link_prefix`.
    ///
    /// The filename is used exactly as listed by the directory scan; it is
    /// not decoded or normalized.
    pub fn new(name: impl Into<String>, link_prefix: &str, filename: &str) -> Self {
        let file = if link_prefix.is_empty() {
            filename.to_string()
        } else {
            format!("{}/{}", link_prefix, filename)
        };

        Self {
            name: name.into(),
            file,
        }
    }
}

/// The ordered list of tools written to both artifacts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Wraps entries that are already in manifest order.
    pub fn new(entries: Vec<ManifestEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the JSON artifact: a 2-space indented array, no trailing newline.
    pub fn to_json(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    /// Renders the script artifact that assigns the manifest to `window.<global_name>`.
    ///
    /// Pages opened through `file://` cannot fetch the JSON file, so they load
    /// this script instead.
    pub fn to_script(&self, global_name: &str) -> Result<String, ManifestError> {
        Ok(format!("window.{} = {};\n", global_name, self.to_json()?))
    }
}

impl From<Vec<ManifestEntry>> for Manifest {
    fn from(entries: Vec<ManifestEntry>) -> Self {
        Self::new(entries)
    }
}

impl IntoIterator for Manifest {
    type Item = ManifestEntry;
    type IntoIter = std::vec::IntoIter<ManifestEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
