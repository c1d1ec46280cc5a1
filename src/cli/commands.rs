//! Command dispatch: load the network, run one operation, report the outcome.

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{load_network, save_network, NetworkReport};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{RingTree, TreeNodeConvert};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Show { file } => show(&resolve_file(file.as_deref(), &load_settings(cli)?)?),
        Commands::Stats { file } => stats(&resolve_file(file.as_deref(), &load_settings(cli)?)?),
        Commands::Total { file } => total(&resolve_file(file.as_deref(), &load_settings(cli)?)?),
        Commands::Purge {
            file,
            min_sites,
            write,
        } => {
            let settings = load_settings(cli)?;
            purge(
                &resolve_file(file.as_deref(), &settings)?,
                min_sites.unwrap_or(settings.min_sites),
                *write,
            )
        }
        Commands::DeadLinks { file, flag, write } => {
            let settings = load_settings(cli)?;
            dead_links(
                &resolve_file(file.as_deref(), &settings)?,
                flag.as_deref().unwrap_or(&settings.dead_link_flag),
                *write,
            )
        }
        Commands::Scavenge {
            file,
            min_sites,
            write,
        } => {
            let settings = load_settings(cli)?;
            scavenge(
                &resolve_file(file.as_deref(), &settings)?,
                min_sites.unwrap_or(settings.min_sites),
                *write,
            )
        }
        Commands::Config { command } => show_config(cli, command),
        Commands::Completion { shell } => {
            generate(*shell, &mut Cli::command(), "webring", &mut io::stdout());
            Ok(())
        }
    }
}

/// Settings are loaded only by commands that read them.
fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!(?settings, "settings loaded");
    Ok(settings)
}

/// The file argument wins over the `network_file` setting.
fn resolve_file(file: Option<&Path>, settings: &Settings) -> CliResult<PathBuf> {
    file.map(Path::to_path_buf)
        .or_else(|| settings.network_file.clone())
        .ok_or_else(|| {
            CliError::InvalidArgs("no network file given and network_file is not set".into())
        })
}

fn load_non_empty(path: &Path) -> CliResult<RingTree> {
    let tree = load_network(path)?;
    if tree.is_empty() {
        return Err(CliError::EmptyNetwork(path.to_path_buf()));
    }
    Ok(tree)
}

fn finish(tree: &RingTree, path: &Path, write: bool) -> CliResult<()> {
    if write {
        save_network(tree, path)?;
        output::action("Wrote", &path.display());
    }
    Ok(())
}

#[instrument]
fn show(path: &Path) -> CliResult<()> {
    let tree = load_network(path)?;
    output::info(&tree.to_tree_string());
    Ok(())
}

#[instrument]
fn stats(path: &Path) -> CliResult<()> {
    let tree = load_network(path)?;
    output::header(&path.display());
    output::info(&NetworkReport::from_tree(&tree));
    Ok(())
}

#[instrument]
fn total(path: &Path) -> CliResult<()> {
    let tree = load_non_empty(path)?;
    output::info(&tree.total_surf_chain_length());
    Ok(())
}

#[instrument]
fn purge(path: &Path, min_sites: usize, write: bool) -> CliResult<()> {
    let mut tree = load_network(path)?;
    let purged = tree.purge_small_rings(min_sites);
    output::action("Purged", &format!("{purged} ring(s) with fewer than {min_sites} site(s)"));
    finish(&tree, path, write)
}

#[instrument]
fn dead_links(path: &Path, flag: &str, write: bool) -> CliResult<()> {
    if flag.is_empty() {
        return Err(CliError::InvalidArgs("dead link flag must not be empty".into()));
    }
    let mut tree = load_non_empty(path)?;
    let removed = tree.delete_dead_links(flag);
    output::action("Removed", &format!("{removed} dead link(s) containing {flag:?}"));
    finish(&tree, path, write)
}

#[instrument]
fn scavenge(path: &Path, min_sites: usize, write: bool) -> CliResult<()> {
    let mut tree = load_network(path)?;
    let moved = tree.scavenge_neighboring_rings(min_sites);
    output::action("Scavenged", &format!("{moved} site(s)"));
    finish(&tree, path, write)
}

fn show_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&load_settings(cli)?.to_toml()?),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::info("no config directory available on this platform"),
        },
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}
