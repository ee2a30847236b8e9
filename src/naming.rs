//! Display-name derivation for tool pages.
//!
//! Two policies exist. The filename policy only looks at the file's name;
//! the title policy prefers the document's `<title>` and falls back to the
//! filename when the page has none.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const HTML_SUFFIX: &str = ".html";

/// Strategy used to turn a tool page into a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingPolicy {
    /// Decode and prettify the filename.
    Filename,
    /// Use the page's `<title>`, falling back to the filename.
    #[default]
    #[serde(alias = "title", alias = "title-tag")]
    TitleTagWithFallback,
}

impl FromStr for NamingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "filename" => Ok(NamingPolicy::Filename),
            "title" | "title-tag" | "title-tag-with-fallback" => {
                Ok(NamingPolicy::TitleTagWithFallback)
            }
            other => Err(format!(
                "Unknown naming policy '{}', expected 'filename' or 'title-tag-with-fallback'",
                other
            )),
        }
    }
}

impl Display for NamingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NamingPolicy::Filename => write!(f, "filename"),
            NamingPolicy::TitleTagWithFallback => write!(f, "title-tag-with-fallback"),
        }
    }
}

/// Returns true if `name` ends in `.html`, ignoring ASCII case.
///
/// `.htm` and other spellings do not qualify.
pub fn is_html(name: &str) -> bool {
    name.len() >= HTML_SUFFIX.len()
        && name
            .get(name.len() - HTML_SUFFIX.len()..)
            .is_some_and(|suffix| suffix.eq_ignore_ascii_case(HTML_SUFFIX))
}

/// Removes one trailing `.html` (any case). Other names are returned unchanged.
pub fn strip_html_suffix(name: &str) -> &str {
    if is_html(name) {
        &name[..name.len() - HTML_SUFFIX.len()]
    } else {
        name
    }
}

/// Percent-decodes `input` the way a browser decodes a URI component.
///
/// Returns `None` when a `%` is not followed by two hex digits or when the
/// decoded bytes are not valid UTF-8.
pub fn percent_decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let well_formed = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !well_formed {
                return None;
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    urlencoding::decode(input).ok().map(|decoded| decoded.into_owned())
}

/// Percent-decodes `input`, keeping it untouched if decoding fails.
pub fn decode_or_raw(input: &str) -> String {
    percent_decode(input).unwrap_or_else(|| input.to_string())
}

/// Collapses every run of `_` and `-` into a single space.
pub fn normalize_separators(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_run = false;

    for c in input.chars() {
        if c == '_' || c == '-' {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }

    out
}

/// Uppercases the first character of every whitespace-delimited word.
///
/// Everything else, including existing capitals, is left as is.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut word_start = true;

    for c in input.chars() {
        if c.is_whitespace() {
            word_start = true;
            out.push(c);
        } else if word_start {
            out.extend(c.to_uppercase());
            word_start = false;
        } else {
            out.push(c);
        }
    }

    out
}

/// Filename policy: strip `.html`, decode, normalize separators, title-case.
pub fn name_from_filename(filename: &str) -> String {
    let stem = strip_html_suffix(filename);
    title_case(&normalize_separators(&decode_or_raw(stem)))
}

/// Fallback used by the title policy: decode the whole filename first, then
/// strip `.html`, normalize separators and title-case.
pub fn fallback_name(filename: &str) -> String {
    let decoded = decode_or_raw(filename);
    title_case(&normalize_separators(strip_html_suffix(&decoded)))
}
