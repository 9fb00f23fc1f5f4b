use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "modplan")]
#[command(about = "A command-driven degree planner for the terminal", long_about = None)]
pub struct Cli {
    /// Directory holding the persisted module list, degree plan, and
    /// requirement categories
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
