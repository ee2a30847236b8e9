//! A Rust library for generating the navigation manifest of a static tool site.
//!
//! The library scans a directory of HTML tool pages, derives a display name for
//! each page and writes the result twice: as `tool-manifest.json` and as
//! `tool-manifest.js`, a script assigning the same array to `window.toolManifest`
//! for pages opened without a web server.

#![warn(unused_crate_dependencies)]

/// Manifest building, rendering and checking
pub mod builder;

/// Configuration layers for a manifest run
pub mod config;

/// Manifest data model
pub mod entry;

/// Fatal error types
pub mod error;

/// Display-name policies
pub mod naming;

/// Console output
pub mod report;

/// Directory scanning and ordering
pub mod scan;

/// `<title>` extraction
pub mod title;

/// Writing both artifacts as one unit
pub mod writer;

/// Commonly used types and functions
pub mod prelude {
    pub use super::builder::{BuildReport, CheckReport, ManifestBuilder, Warning};
    pub use super::config::ManifestConfig;
    pub use super::entry::{Manifest, ManifestEntry};
    pub use super::error::ManifestError;
    pub use super::naming::NamingPolicy;
}

/// Command-line interface functionality
pub mod cli {
    /// Base CLI functionality
    pub mod base;
    /// Manifest commands
    pub mod manifest;
}
