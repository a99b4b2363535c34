//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::{sample_order, ApplicationError, OrderFile, OrderReport};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{Component, Order};

/// Largest scale a `Decimal` can carry.
const MAX_SCALE: u32 = 28;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Demo { tree }) => cmd_demo(&load_settings(cli)?, *tree),
        Some(Commands::Show { file, tree }) => cmd_show(&load_settings(cli)?, file, *tree),
        Some(Commands::Total { file }) => cmd_total(&load_settings(cli)?, file),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => cmd_config_show(&load_settings(cli)?),
            ConfigCommands::Path => cmd_config_path(cli),
        },
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, see 'orderbox --help'".to_string(),
        )),
    }
}

/// Layered settings with command line overrides on top.
#[instrument(level = "debug", skip(cli))]
pub fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(currency) = &cli.currency {
        settings.currency = currency.clone();
    }
    if let Some(scale) = cli.scale {
        settings.scale = scale;
    }
    if settings.scale > MAX_SCALE {
        return Err(CliError::InvalidArgs(format!(
            "scale {} exceeds maximum of {}",
            settings.scale, MAX_SCALE
        )));
    }
    debug!(?settings, "effective settings");
    Ok(settings)
}

fn load_order(file: &Path) -> CliResult<Order> {
    Ok(OrderFile::load(file)?.into_order()?)
}

fn print_order(settings: &Settings, order: &Order, tree: bool) {
    let report = OrderReport::new(order, settings);
    if tree || settings.tree {
        output::info(&report.to_tree());
        return;
    }
    let mut lines = report.lines().into_iter();
    if let Some(title) = lines.next() {
        output::header(&title);
    }
    for line in lines {
        output::info(&line);
    }
}

#[instrument(level = "debug", skip(settings))]
fn cmd_demo(settings: &Settings, tree: bool) -> CliResult<()> {
    print_order(settings, &sample_order(), tree);
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn cmd_show(settings: &Settings, file: &Path, tree: bool) -> CliResult<()> {
    let order = load_order(file)?;
    debug!(
        products = %order.products().iter().map(|p| p.name()).join(", "),
        depth = order.depth(),
        "loaded order"
    );
    print_order(settings, &order, tree);
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn cmd_total(settings: &Settings, file: &Path) -> CliResult<()> {
    let order = load_order(file)?;
    output::info(&settings.format_amount(order.total_price()));
    Ok(())
}

fn cmd_config_show(settings: &Settings) -> CliResult<()> {
    let rendered = toml::to_string_pretty(settings).map_err(|e| ApplicationError::Config {
        message: format!("serialize settings: {}", e),
    })?;
    output::info(&rendered.trim_end());
    Ok(())
}

fn cmd_config_path(cli: &Cli) -> CliResult<()> {
    match global_config_path() {
        Some(path) => {
            let state = if path.exists() { "" } else { " (not present)" };
            output::action("global", &format!("{}{}", path.display(), state));
        }
        None => output::warning("no home directory, global config disabled"),
    }
    if let Some(path) = &cli.config {
        output::action("explicit", &path.display());
    }
    Ok(())
}
