//! Base functionality for the toolmanifest CLI
//!
//! This module provides core utilities and traits used across the CLI including:
//! - Global options shared by every subcommand
//! - Turning those options into a [`ManifestConfig`]
//! - The common trait for command processing

use std::path::PathBuf;

use structopt::StructOpt;

use crate::builder::ManifestBuilder;
use crate::config::{ConfigOverrides, ManifestConfig};
use crate::error::ManifestError;
use crate::naming::NamingPolicy;
use crate::report::print_error;

/// Options accepted before any subcommand
#[derive(StructOpt, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Config file (JSON, YAML or TOML)
    #[structopt(short, long, help = "Path to a JSON/YAML/TOML config file")]
    pub config: Option<PathBuf>,

    #[structopt(
        short,
        long,
        help = "Project root that relative paths are resolved against [default: .]"
    )]
    pub root: Option<PathBuf>,

    #[structopt(short, long, help = "Directory containing the tool pages [default: tools]")]
    pub source: Option<PathBuf>,

    #[structopt(long, help = "Destination of the JSON manifest [default: tool-manifest.json]")]
    pub json: Option<PathBuf>,

    #[structopt(long, help = "Destination of the manifest script [default: tool-manifest.js]")]
    pub script: Option<PathBuf>,

    #[structopt(long, help = "Prefix of the `file` field [default: tools]")]
    pub prefix: Option<String>,

    #[structopt(long, help = "Global assigned by the manifest script [default: toolManifest]")]
    pub global: Option<String>,

    #[structopt(
        short,
        long,
        help = "Naming policy: 'filename' or 'title-tag-with-fallback' [default: title-tag-with-fallback]"
    )]
    pub policy: Option<NamingPolicy>,
}

impl GlobalOpts {
    /// Builds the configuration for this invocation.
    pub fn to_config(&self) -> Result<ManifestConfig, ManifestError> {
        let root = self.root.clone().unwrap_or_else(|| PathBuf::from("."));
        let overrides = ConfigOverrides {
            source_dir: self.source.clone(),
            json_output: self.json.clone(),
            script_output: self.script.clone(),
            link_prefix: self.prefix.clone(),
            global_name: self.global.clone(),
            policy: self.policy,
        };

        ManifestConfig::assemble(&root, self.config.as_deref(), overrides)
    }

    /// Builds a [`ManifestBuilder`], printing the error if the configuration is invalid.
    pub fn to_builder(&self) -> Result<ManifestBuilder, i32> {
        match self.to_config() {
            Ok(config) => Ok(ManifestBuilder::new(config)),
            Err(e) => {
                print_error(&e);
                Err(e.exit_code())
            }
        }
    }
}

/// Trait for processing CLI subcommands
///
/// Implementors define how to handle their specific subcommand variant
/// using the provided builder.
pub trait Matcher {
    /// Process this subcommand and return the process exit code
    ///
    /// # Arguments
    /// * `builder` - The ManifestBuilder configured for this run
    fn process(self, builder: &ManifestBuilder) -> i32;
}
