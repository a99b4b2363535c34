//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Gift-boxed orders as a composite price tree
#[derive(Parser, Debug)]
#[command(name = "orderbox")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Config file layered over the global config
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Currency label for amounts (overrides config)
    #[arg(long, global = true)]
    pub currency: Option<String>,

    /// Decimal places for amounts (overrides config)
    #[arg(long, global = true)]
    pub scale: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the built-in sample order
    Demo {
        /// Draw as a tree
        #[arg(long)]
        tree: bool,
    },

    /// Print an order from a TOML file
    Show {
        /// Order file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Draw as a tree
        #[arg(long)]
        tree: bool,
    },

    /// Print the total price of an order file
    Total {
        /// Order file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,
}
