use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "dailyquote")]
#[command(about = "每日金句: one quote a day, from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Optional path to local store file
    #[arg(long, global = true, value_name = "PATH")]
    pub store_path: Option<PathBuf>,

    /// Keep favorites and the daily quote in memory for this run only
    #[arg(long, global = true, conflicts_with = "store_path")]
    pub ephemeral: bool,

    /// Seed for the random source (deterministic picks)
    #[arg(long, global = true, value_name = "N")]
    pub seed: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show today's quote
    Today {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a random quote
    Random {
        /// Category label or slug (e.g. 勵志, inspiration, all)
        #[arg(short, long, value_name = "CATEGORY")]
        category: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add or remove a quote from favorites
    Favorite {
        /// Quote ID (today's quote when omitted)
        id: Option<String>,
    },
    /// List favorited quotes
    Favorites {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Share a quote
    Share {
        /// Quote ID (today's quote when omitted)
        id: Option<String>,
    },
    /// List catalog quotes
    List {
        /// Category label or slug
        #[arg(short, long, value_name = "CATEGORY")]
        category: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List categories
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show catalog and favorites counts
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Open the interactive quote screen
    #[command(alias = "ui")]
    Interactive,
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Manage the CLI config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Initialize or update the config file
    Init {
        /// Store file to use by default
        #[arg(long, value_name = "PATH")]
        store_path: Option<PathBuf>,
        /// Program that receives shared quotes on stdin (e.g. wl-copy, pbcopy)
        #[arg(long, value_name = "COMMAND")]
        share_command: Option<String>,
        /// Remove the configured share command and share to stdout
        #[arg(long, conflicts_with = "share_command")]
        clear_share_command: bool,
    },
    /// Show the resolved configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
