//! Command-line interface definition.
//!
//! sitesnap has a single linear job, so there are no subcommands: invoking
//! the binary with no flags performs the full capture run over the built-in
//! target list.

use clap::Parser;
use std::path::PathBuf;

/// Capture full-page screenshots of the competitor site list.
#[derive(Parser, Debug)]
#[command(
    name = "sitesnap",
    version,
    about = "Capture full-page screenshots of the competitor site list",
    long_about = "sitesnap visits each configured competitor site with a headless\n\
                  Chromium, scrolls it to its full height, and saves a screenshot.\n\
                  Targets that cannot be captured get a placeholder image and a\n\
                  note explaining the failure instead."
)]
pub struct Cli {
    /// Directory the screenshot and placeholder artifacts are written to
    ///
    /// Created if it does not exist. Each run overwrites the previous
    /// artifacts for every target.
    #[arg(long, value_name = "DIR", default_value = "screenshots")]
    pub out_dir: PathBuf,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_screenshots_directory() {
        let cli = Cli::try_parse_from(["sitesnap"]).expect("bare invocation should parse");

        assert_eq!(cli.out_dir, PathBuf::from("screenshots"));
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn accepts_an_output_directory_override() {
        let cli = Cli::try_parse_from(["sitesnap", "--out-dir", "/tmp/shots"])
            .expect("out-dir override should parse");

        assert_eq!(cli.out_dir, PathBuf::from("/tmp/shots"));
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        let result = Cli::try_parse_from(["sitesnap", "--verbose", "--quiet"]);

        assert!(result.is_err());
    }
}
