use clap::Parser;

use crate::application::dto::SourceMode;

/// Discover and visualize package dependency graphs
#[derive(Parser, Debug)]
#[command(name = "depgraph")]
#[command(version = "0.3.1")]
#[command(about = "Discover and visualize package dependency graphs", long_about = None)]
pub struct Args {
    /// Name of the package to explore
    #[arg(short, long)]
    pub package: Option<String>,

    /// Path to the test repository JSON file (test mode only)
    #[arg(short, long)]
    pub repository: Option<String>,

    /// Dependency source: test, nuget or apt
    #[arg(short, long)]
    pub mode: Option<SourceMode>,

    /// Base name for the generated SVG and PlantUML files
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print the dependency tree in ASCII format
    #[arg(long)]
    pub ascii_tree: bool,

    /// Maximum traversal depth (0 = unlimited)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub max_depth: Option<i64>,

    /// Exclude dependencies containing this substring
    #[arg(long, value_name = "SUBSTRING")]
    pub filter: Option<String>,

    /// Path to the configuration file
    #[arg(short, long, default_value = "config.json")]
    pub config: String,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
