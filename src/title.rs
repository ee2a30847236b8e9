use std::fs;
use std::io;
use std::path::Path;

use lazy_static::lazy_static;
use regress::Regex;

lazy_static! {
    // Tag name is case-insensitive; contents may span lines but never contain `<`.
    static ref TITLE_TAG: Regex =
        Regex::with_flags(r"<title\b[^>]*>([^<]*)</title>", "i").expect("Invalid title pattern");
}

/// Extracts the trimmed text of the first `<title>` element in `html`.
///
/// Returns `None` when there is no matching element or its text is blank.
/// Markup is not parsed: a title with nested tags does not match.
pub fn extract_title(html: &str) -> Option<String> {
    let found = TITLE_TAG.find(html)?;
    let range = found.group(1)?;
    let title = html[range].trim();

    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// Reads `path` as text and extracts its title.
///
/// Invalid UTF-8 is replaced rather than rejected so a single odd byte does
/// not cost the page its title. I/O errors are returned to the caller, which
/// decides whether they are fatal.
pub fn read_title(path: &Path) -> io::Result<Option<String>> {
    let bytes = fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);

    Ok(extract_title(&content))
}
