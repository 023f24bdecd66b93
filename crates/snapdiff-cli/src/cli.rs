use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "snapdiff",
    about = "Side-by-side line diff of two job-description snapshots",
    version,
)]
pub struct Cli {
    /// Old snapshot (`-` for stdin)
    pub old: PathBuf,
    /// New snapshot (`-` for stdin)
    pub new: PathBuf,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with `[limits]` and `[render]` tables
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Column width for text output
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Print only the change summary
    #[arg(long)]
    pub summary_only: bool,

    #[arg(long)]
    pub no_color: bool,

    /// Override the per-input character budget
    #[arg(long)]
    pub char_limit: Option<usize>,

    /// Override the line threshold for the exact algorithm
    #[arg(long)]
    pub max_lines: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
