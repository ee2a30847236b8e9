//! Configuration of a manifest run.
//!
//! Values are layered: defaults, then an optional config file (JSON, YAML or
//! TOML), then environment variables, then command-line flags.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ManifestError;
use crate::naming::NamingPolicy;

/// Environment variable pointing at a config file.
pub const CONFIG_ENV: &str = "TOOLMANIFEST_CONFIG";

/// Environment variable selecting the naming policy.
pub const POLICY_ENV: &str = "TOOLMANIFEST_POLICY";

/// Where to read tools from, where to write the artifacts and how to name entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManifestConfig {
    /// Directory scanned for `.html` tool pages
    pub source_dir: PathBuf,
    /// Destination of the JSON artifact
    pub json_output: PathBuf,
    /// Destination of the script artifact
    pub script_output: PathBuf,
    /// Prefix prepended to every filename in the `file` field
    pub link_prefix: String,
    /// Name of the global the script artifact assigns
    pub global_name: String,
    pub policy: NamingPolicy,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("tools"),
            json_output: PathBuf::from("tool-manifest.json"),
            script_output: PathBuf::from("tool-manifest.js"),
            link_prefix: "tools".to_string(),
            global_name: "toolManifest".to_string(),
            policy: NamingPolicy::default(),
        }
    }
}

/// Values given explicitly on the command line. `None` keeps the lower layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub source_dir: Option<PathBuf>,
    pub json_output: Option<PathBuf>,
    pub script_output: Option<PathBuf>,
    pub link_prefix: Option<String>,
    pub global_name: Option<String>,
    pub policy: Option<NamingPolicy>,
}

impl ManifestConfig {
    /// Loads a config file. Keys that are absent keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ManifestError> {
        parse_file(path)
    }

    /// Assembles the configuration for a run rooted at `root`.
    ///
    /// # Arguments
    /// * `root` - Directory relative paths are resolved against
    /// * `config_file` - Explicit config file; falls back to `TOOLMANIFEST_CONFIG`
    /// * `overrides` - Command-line values, applied last
    pub fn assemble(
        root: &Path,
        config_file: Option<&Path>,
        overrides: ConfigOverrides,
    ) -> Result<Self, ManifestError> {
        let env_file = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let config_file = config_file.map(Path::to_path_buf).or(env_file);

        let mut config = match config_file {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Ok(policy) = std::env::var(POLICY_ENV) {
            config.policy = NamingPolicy::from_str(&policy)
                .map_err(|e| ManifestError::Config(format!("{}: {}", POLICY_ENV, e)))?;
        }

        let config = config.apply(overrides).resolve(root);
        config.validate()?;

        Ok(config)
    }

    /// Replaces every field that has an override.
    pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(source_dir) = overrides.source_dir {
            self.source_dir = source_dir;
        }
        if let Some(json_output) = overrides.json_output {
            self.json_output = json_output;
        }
        if let Some(script_output) = overrides.script_output {
            self.script_output = script_output;
        }
        if let Some(link_prefix) = overrides.link_prefix {
            self.link_prefix = link_prefix;
        }
        if let Some(global_name) = overrides.global_name {
            self.global_name = global_name;
        }
        if let Some(policy) = overrides.policy {
            self.policy = policy;
        }
        self
    }

    /// Resolves relative paths against `root` and normalizes the link prefix.
    pub fn resolve(mut self, root: &Path) -> Self {
        self.source_dir = root.join(&self.source_dir);
        self.json_output = root.join(&self.json_output);
        self.script_output = root.join(&self.script_output);
        self.link_prefix = self.link_prefix.trim_end_matches('/').to_string();
        self
    }

    /// Checks values that would otherwise produce a broken artifact.
    pub fn validate(&self) -> Result<(), ManifestError> {
        if !is_js_identifier(&self.global_name) {
            return Err(ManifestError::Config(format!(
                "global name '{}' is not a valid JavaScript identifier",
                self.global_name
            )));
        }

        if self.json_output == self.script_output {
            return Err(ManifestError::Config(format!(
                "JSON and script outputs must differ, both are {}",
                self.json_output.display()
            )));
        }

        Ok(())
    }
}

/// Parses a JSON, YAML or TOML file into the specified type
///
/// The format is picked from the extension. Files without a known extension
/// are tried as JSON and then as YAML.
pub fn parse_file<P, T>(path: P) -> Result<T, ManifestError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        ManifestError::Config(format!("unable to read {}: {}", path.display(), e))
    })?;

    let invalid = |e: &dyn std::fmt::Display| {
        ManifestError::Config(format!("unable to parse {}: {}", path.display(), e))
    };

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => serde_json::from_str(&content).map_err(|e| invalid(&e)),
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| invalid(&e)),
        Some("toml") => toml::from_str(&content).map_err(|e| invalid(&e)),
        _ => {
            if let Ok(content) = serde_json::from_str(&content) {
                Ok(content)
            } else if let Ok(content) = serde_yaml::from_str(&content) {
                Ok(content)
            } else {
                Err(invalid(&"failed to parse the file as either JSON or YAML"))
            }
        }
    }
}

fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => chars
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$'),
        _ => false,
    }
}
