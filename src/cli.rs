use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "license-detectr",
    about = "Identify the license of a file or project directory",
    version
)]
pub struct Cli {
    /// License file or project directory to inspect
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Classify license text read from stdin instead of PATH
    #[arg(long, conflicts_with = "path")]
    pub stdin: bool,

    /// Report every classified license file, not just the first
    #[arg(short, long)]
    pub all: bool,

    /// Config file [default: <PATH>/.license-detectr/config.toml, fallback ~/.config/license-detectr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Extra license file name pattern, `*` matches anything (repeatable)
    #[arg(long = "pattern", value_name = "GLOB")]
    pub patterns: Vec<String>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Show the first line of each license and enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print license identifiers
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
