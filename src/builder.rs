//! The manifest builder: scan the tool directory, name every page, write the artifacts.

use std::fmt::Display;
use std::path::PathBuf;

use crate::config::ManifestConfig;
use crate::entry::{Manifest, ManifestEntry};
use crate::error::ManifestError;
use crate::naming::{fallback_name, name_from_filename, NamingPolicy};
use crate::scan::{list_tool_files, ToolFile};
use crate::title::read_title;
use crate::writer::{write_pair, Artifact};

/// A recoverable problem with a single tool page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Filename the warning is about
    pub filename: String,
    pub message: String,
}

impl Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.filename, self.message)
    }
}

/// Result of a scan: the manifest plus anything worth warning about.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub manifest: Manifest,
    pub warnings: Vec<Warning>,
}

/// Outcome of comparing the artifacts on disk with a fresh build.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub build: BuildReport,
    /// Artifacts whose content differs from what would be written
    pub stale: Vec<PathBuf>,
}

impl CheckReport {
    pub fn is_current(&self) -> bool {
        self.stale.is_empty()
    }
}

/// Builds and writes the navigation manifest for one configuration.
#[derive(Debug, Clone)]
pub struct ManifestBuilder {
    config: ManifestConfig,
}

impl ManifestBuilder {
    pub fn new(config: ManifestConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ManifestConfig {
        &self.config
    }

    /// Scans the source directory and derives one entry per `.html` file.
    ///
    /// # Errors
    ///
    /// Fails only if the source directory cannot be listed. Unreadable pages
    /// are named from their filename and reported as warnings.
    pub fn build(&self) -> Result<BuildReport, ManifestError> {
        let files = list_tool_files(&self.config.source_dir)?;

        let mut warnings = Vec::new();
        let entries = files
            .iter()
            .map(|file| {
                if file.lossy {
                    warnings.push(Warning {
                        filename: file.filename.clone(),
                        message: "filename is not valid UTF-8, invalid bytes were replaced"
                            .to_string(),
                    });
                }

                let name = self.display_name(file, &mut warnings);
                ManifestEntry::new(name, &self.config.link_prefix, &file.filename)
            })
            .collect::<Vec<_>>();

        Ok(BuildReport {
            manifest: Manifest::new(entries),
            warnings,
        })
    }

    /// Renders both artifacts for `manifest` without touching the disk.
    pub fn render(&self, manifest: &Manifest) -> Result<(Artifact, Artifact), ManifestError> {
        let json = Artifact::new(&self.config.json_output, manifest.to_json()?);
        let script = Artifact::new(
            &self.config.script_output,
            manifest.to_script(&self.config.global_name)?,
        );

        Ok((json, script))
    }

    /// Builds the manifest and writes both artifacts.
    ///
    /// Both artifacts are rendered before anything is written; the source
    /// directory failing means no output is touched at all.
    pub fn generate(&self) -> Result<BuildReport, ManifestError> {
        let report = self.build()?;
        let (json, script) = self.render(&report.manifest)?;

        write_pair(&json, &script)?;

        Ok(report)
    }

    /// Builds the manifest and compares it with the artifacts currently on disk.
    pub fn check(&self) -> Result<CheckReport, ManifestError> {
        let build = self.build()?;
        let (json, script) = self.render(&build.manifest)?;

        let stale = [json, script]
            .into_iter()
            .filter(|artifact| !artifact.is_current())
            .map(|artifact| artifact.path)
            .collect();

        Ok(CheckReport { build, stale })
    }

    fn display_name(&self, file: &ToolFile, warnings: &mut Vec<Warning>) -> String {
        let name = match self.config.policy {
            NamingPolicy::Filename => name_from_filename(&file.filename),
            NamingPolicy::TitleTagWithFallback => {
                let path = self.config.source_dir.join(&file.filename);
                match read_title(&path) {
                    Ok(Some(title)) => title,
                    Ok(None) => fallback_name(&file.filename),
                    Err(e) => {
                        warnings.push(Warning {
                            filename: file.filename.clone(),
                            message: format!("could not read title ({}), using filename", e),
                        });
                        fallback_name(&file.filename)
                    }
                }
            }
        };

        if name.trim().is_empty() {
            file.filename.clone()
        } else {
            name
        }
    }
}
