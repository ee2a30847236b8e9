//! Listing the tool directory.
//!
//! Only the immediate entries of the source directory are considered and
//! only their names decide whether they qualify.

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::Path;

use feruca::{Collator, Locale, Tailoring};

use crate::error::ManifestError;
use crate::naming::is_html;

/// A qualifying file found in the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolFile {
    /// Filename as listed by the directory scan
    pub filename: String,
    /// Set when the name on disk was not valid UTF-8 and had to be replaced lossily
    pub lossy: bool,
}

/// Lists the `.html` entries of `dir`, sorted with [`locale_cmp`].
///
/// # Errors
///
/// Returns [`ManifestError::ReadDir`] if the directory or any of its entries
/// cannot be listed. Nothing has been written at that point.
pub fn list_tool_files(dir: &Path) -> Result<Vec<ToolFile>, ManifestError> {
    let read_dir_error = |source: io::Error| ManifestError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let os_name = entry.file_name();

        let file = match os_name.to_str() {
            Some(name) => ToolFile {
                filename: name.to_string(),
                lossy: false,
            },
            None => ToolFile {
                filename: os_name.to_string_lossy().into_owned(),
                lossy: true,
            },
        };

        if is_html(&file.filename) {
            files.push(file);
        }
    }

    let mut collator = root_collator();
    files.sort_by(|a, b| collator.collate(a.filename.as_str(), b.filename.as_str()));
    Ok(files)
}

/// Locale-aware ascending comparison of two names.
///
/// Uses the Unicode collation algorithm with the CLDR root order:
/// punctuation is not ignored (`_` < `-` < `.` < digits < letters), accented
/// letters sort next to their base letter and lowercase precedes uppercase.
/// Names that collate equal are ordered by code point so the order is total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    root_collator().collate(a, b)
}

fn root_collator() -> Collator {
    Collator::new(Tailoring::Cldr(Locale::Root), false, true)
}
