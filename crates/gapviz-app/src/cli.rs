//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "gapviz",
    version,
    about = "Education gender gap dashboard (headless)",
    long_about = "Load the measurement and geography documents, replay a scripted\n\
                  session of UI events and print every rendered frame as JSON.\n\n\
                  Logs go to stderr; set RUST_LOG to change the level."
)]
pub struct Cli {
    /// Measurement document (JSON array, or CSV when the extension is .csv)
    #[arg(long, value_name = "PATH", required_unless_present = "demo")]
    pub data: Option<PathBuf>,

    /// Country to region document (JSON array)
    #[arg(long, value_name = "PATH", required_unless_present = "demo")]
    pub geography: Option<PathBuf>,

    /// JSON config with `dataset` and `presentation` sections
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Event script to replay after the initial render
    #[arg(long, value_name = "PATH")]
    pub events: Option<PathBuf>,

    /// Pretty-print frames instead of one JSON object per line
    #[arg(long)]
    pub pretty: bool,

    /// Use the built-in synthetic dataset
    #[arg(long, conflicts_with_all = ["data", "geography"])]
    pub demo: bool,
}
