use atty::Stream;
use colored::Colorize;
use structopt::StructOpt;

use toolmanifest::cli::base::{GlobalOpts, Matcher};
use toolmanifest::cli::manifest::ManifestSubCommand;

static HEADER: &str = r#"
--- Tool Manifest Generator ---
"#;

#[derive(StructOpt, Debug)]
#[structopt(
    name = "toolmanifest",
    about = "Generate the navigation manifest for a directory of HTML tools"
)]
struct Cli {
    #[structopt(flatten)]
    global: GlobalOpts,

    #[structopt(subcommand)]
    cmd: Option<ManifestSubCommand>,
}

fn main() {
    let cli = Cli::from_args();

    let builder = match cli.global.to_builder() {
        Ok(builder) => builder,
        Err(code) => std::process::exit(code),
    };

    let cmd = cli.cmd.unwrap_or_default();

    // Keep piped `preview` output clean JSON
    if atty::is(Stream::Stdout) && cmd != ManifestSubCommand::Preview {
        println!("{}", HEADER.bold());
    }

    std::process::exit(cmd.process(&builder));
}
