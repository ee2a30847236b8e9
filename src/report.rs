use std::path::Path;

use atty::Stream;
use colored::Colorize;
use colored_json::prelude::*;

use crate::builder::{CheckReport, Warning};
use crate::entry::Manifest;
use crate::error::ManifestError;

/// Prints the success lines of a `generate` run.
pub fn print_written(count: usize, json_path: &Path, script_path: &Path) {
    println!(
        "{} Wrote {} entries to {}",
        "✓".green().bold(),
        count,
        json_path.display().to_string().green()
    );
    println!(
        "{} Wrote manifest script to {}",
        "✓".green().bold(),
        script_path.display().to_string().green()
    );
}

/// Prints per-file warnings to stderr. The run is not affected.
pub fn print_warnings(warnings: &[Warning]) {
    for warning in warnings {
        eprintln!("{} {}", "Warning:".yellow().bold(), warning);
    }
}

/// Warns that a partially written manifest could not be rolled back.
///
/// The JSON and the script on disk no longer agree after this.
pub fn print_restore_failure(path: &Path, error: &std::io::Error) {
    eprintln!(
        "{} could not restore {} after a failed write ({}); the manifest artifacts are out of sync",
        "Warning:".yellow().bold(),
        path.display(),
        error
    );
}

/// Prints a fatal error to stderr.
pub fn print_error(error: &ManifestError) {
    eprintln!("\n{} {}\n", "Error:".red().bold(), error);
}

/// Prints the manifest JSON to stdout.
///
/// If users are redirecting the output to a file, only the plain JSON is
/// printed so it can be used in other scripts.
pub fn print_manifest(manifest: &Manifest, json: &str) {
    if atty::is(Stream::Stdout) {
        println!(
            "{} {} - {} entries\n",
            "└── ".bold(),
            "Manifest preview".green().bold(),
            manifest.len()
        );
        match json.to_colored_json_auto() {
            Ok(colored) => println!("{}\n", colored),
            Err(_) => println!("{}\n", json),
        }
    } else {
        println!("{}", json);
    }
}

/// Prints the outcome of a `check` run.
pub fn print_check(check: &CheckReport) {
    if check.is_current() {
        println!(
            "{} Manifest is up to date ({} entries)",
            "✓".green().bold(),
            check.build.manifest.len()
        );
        return;
    }

    for path in &check.stale {
        eprintln!(
            "{} {} is out of date",
            "Stale:".red().bold(),
            path.display()
        );
    }
    eprintln!("Run `toolmanifest generate` to refresh the manifest.");
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::builder::BuildReport;
    use crate::entry::ManifestEntry;

    #[test]
    fn test_print_functions_do_not_panic() {
        let manifest = Manifest::new(vec![ManifestEntry::new("Demo", "tools", "demo.html")]);
        let json = manifest.to_json().unwrap();

        print_written(1, Path::new("tool-manifest.json"), Path::new("tool-manifest.js"));
        print_warnings(&[Warning {
            filename: "broken.html".to_string(),
            message: "could not read title".to_string(),
        }]);
        print_error(&ManifestError::Config("bad".to_string()));
        print_manifest(&manifest, &json);
    }

    #[test]
    fn test_print_check_both_outcomes() {
        let current = CheckReport {
            build: BuildReport::default(),
            stale: vec![],
        };
        let stale = CheckReport {
            build: BuildReport::default(),
            stale: vec![PathBuf::from("tool-manifest.js")],
        };

        print_check(&current);
        print_check(&stale);
    }

    #[test]
    fn test_warning_display() {
        let warning = Warning {
            filename: "broken.html".to_string(),
            message: "could not read title".to_string(),
        };

        assert_eq!(warning.to_string(), "broken.html: could not read title");
    }
}
