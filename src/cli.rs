//! CLI module - Command-line interface definition and handler

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::render::{OutputFormat, RenderConfig};

/// curswap - rewrite dollar amounts and USD codes as rupee amounts and INR.
#[derive(Parser, Debug)]
#[command(name = "curswap")]
#[command(
    author,
    version,
    about,
    long_about = r#"curswap walks a source tree once and rewrites, in place, every .ts and .tsx
file outside node_modules:

- `$` followed by optional whitespace and a digit becomes `₹`
- every `USD` becomes `INR`

Files are only written when their content changes, so a second run is a no-op.
There is no dry-run and no undo; commit or back up the tree first.

Examples:
    curswap --root frontend/src
    curswap --root . --format json --pretty
"#
)]
pub struct Cli {
    /// Root directory to convert.
    #[arg(
        long,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Root directory to convert (defaults to the current directory).\n\n\
Any directory whose path contains `node_modules` is skipped entirely."
    )]
    pub root: PathBuf,

    /// Output format (text/json).
    #[arg(
        long,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the output format for the run report.\n\n\
Supported values:\n\
- text (default): summary of up to 10 modified files, errors inline\n\
- json: a single object with scanned, modified and failed entries"
    )]
    pub format: String,

    /// Quiet mode (count only).
    #[arg(
        short,
        long,
        long_help = "Print only the number of updated files in text mode. Per-file error\n\
lines are still printed."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        long_help = "Report skipped directories and traversal errors on stderr."
    )]
    pub verbose: bool,

    /// Pretty-print JSON output with indentation.
    #[arg(
        long,
        long_help = "Pretty-print JSON output with indentation. Has no effect on text output."
    )]
    pub pretty: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_options(format, cli.pretty, cli.quiet);

    // Get absolute root path
    let root = cli.root.canonicalize().unwrap_or(cli.root);

    crate::backends::scan::run_convert(&root, cli.verbose, render_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["curswap"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(cli.format, "text");
        assert!(!cli.quiet);
        assert!(!cli.verbose);
        assert!(!cli.pretty);
    }

    #[test]
    fn test_all_options() {
        let cli = Cli::try_parse_from([
            "curswap", "--root", "web/src", "--format", "json", "-q", "-v", "--pretty",
        ])
        .unwrap();
        assert_eq!(cli.root, PathBuf::from("web/src"));
        assert_eq!(cli.format, "json");
        assert!(cli.quiet);
        assert!(cli.verbose);
        assert!(cli.pretty);
    }

    #[test]
    fn test_rejects_positional() {
        assert!(Cli::try_parse_from(["curswap", "extra"]).is_err());
    }

    #[test]
    fn test_command_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
