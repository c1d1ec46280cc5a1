//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Inspect and maintain a network of web rings
#[derive(Parser, Debug)]
#[command(name = "webring")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Config file (default: $XDG_CONFIG_HOME/webring/webring.toml)
    #[arg(
        short,
        long,
        global = true,
        env = "WEBRING_CONFIG_FILE",
        value_hint = ValueHint::FilePath
    )]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the network as a tree
    Show {
        /// Network file (default: network_file setting)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Summarise rings, sites and depth
    Stats {
        /// Network file (default: network_file setting)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Print the total number of sites across all rings
    Total {
        /// Network file (default: network_file setting)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Remove rings with fewer than the minimum number of sites
    Purge {
        /// Network file (default: network_file setting)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// Minimum sites a ring must hold to survive
        #[arg(short, long)]
        min_sites: Option<usize>,
        /// Write the result back to the network file
        #[arg(short, long)]
        write: bool,
    },

    /// Remove every site whose name contains the flag word
    DeadLinks {
        /// Network file (default: network_file setting)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// Substring marking a dead link
        #[arg(short, long)]
        flag: Option<String>,
        /// Write the result back to the network file
        #[arg(short, long)]
        write: bool,
    },

    /// Move sites from populous child rings into under-populated parents
    Scavenge {
        /// Network file (default: network_file setting)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// Minimum sites each ring should hold
        #[arg(short, long)]
        min_sites: Option<usize>,
        /// Write the result back to the network file
        #[arg(short, long)]
        write: bool,
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
    /// Show effective configuration
    Show,
    /// Show the global config file location
    Path,
    /// Print a template config file
    Template,
}
