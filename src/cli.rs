use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grocer")]
#[command(about = "Purchase frequency tracker for the corner grocer")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Defaults to the interactive menu
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Args, Default)]
pub struct GlobalArgs {
    /// Purchase record to analyse
    #[arg(long, short = 'i', global = true)]
    pub input: Option<PathBuf>,

    /// Where the histogram snapshot is written
    #[arg(long, global = true)]
    pub snapshot: Option<PathBuf>,

    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Character used for histogram bars
    #[arg(long, global = true)]
    pub marker: Option<char>,

    /// Disable terminal colors in the menu
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    /// Show debug logging
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every item with its purchase count
    List(ListArgs),

    /// Show how many times one item was purchased
    Lookup(LookupArgs),

    /// Print a star chart of purchase counts
    Histogram,

    /// Run the interactive menu
    Menu,
}

#[derive(Parser)]
pub struct ListArgs {
    /// Output as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Parser)]
pub struct LookupArgs {
    /// Item name, matched exactly
    pub item: String,
}
