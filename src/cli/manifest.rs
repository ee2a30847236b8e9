//! Manifest commands
//!
//! - `generate`: write both artifacts
//! - `preview`: print the manifest without writing anything
//! - `check`: fail when the artifacts on disk are out of date

use structopt::StructOpt;

use crate::builder::ManifestBuilder;
use crate::report::{print_check, print_error, print_manifest, print_warnings, print_written};

use super::base::Matcher;

/// Subcommands operating on the tool manifest
#[derive(StructOpt, Debug, Clone, Default, PartialEq, Eq)]
pub enum ManifestSubCommand {
    /// Scan the tool directory and write the JSON manifest and the manifest script
    #[default]
    #[structopt(about = "Write tool-manifest.json and tool-manifest.js")]
    Generate,

    /// Print the manifest that would be written
    #[structopt(about = "Print the manifest without writing it")]
    Preview,

    /// Compare the artifacts on disk with a fresh scan
    #[structopt(about = "Exit non-zero if the manifest artifacts are out of date")]
    Check,
}

impl Matcher for ManifestSubCommand {
    fn process(self, builder: &ManifestBuilder) -> i32 {
        let config = builder.config();

        match self {
            ManifestSubCommand::Generate => match builder.generate() {
                Ok(report) => {
                    print_warnings(&report.warnings);
                    print_written(
                        report.manifest.len(),
                        &config.json_output,
                        &config.script_output,
                    );
                    exitcode::OK
                }
                Err(e) => {
                    print_error(&e);
                    e.exit_code()
                }
            },
            ManifestSubCommand::Preview => {
                let rendered = builder
                    .build()
                    .and_then(|report| Ok((report.manifest.to_json()?, report)));

                match rendered {
                    Ok((json, report)) => {
                        print_warnings(&report.warnings);
                        print_manifest(&report.manifest, &json);
                        exitcode::OK
                    }
                    Err(e) => {
                        print_error(&e);
                        e.exit_code()
                    }
                }
            }
            ManifestSubCommand::Check => match builder.check() {
                Ok(check) => {
                    print_warnings(&check.build.warnings);
                    print_check(&check);
                    if check.is_current() {
                        exitcode::OK
                    } else {
                        exitcode::DATAERR
                    }
                }
                Err(e) => {
                    print_error(&e);
                    e.exit_code()
                }
            },
        }
    }
}
