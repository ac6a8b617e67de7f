//! # CLI Layer
//!
//! The only place that knows about the terminal: it parses arguments, sets up
//! logging and configuration, opens the database through a [`Lifecycle`] for
//! the duration of one command, and prints what the library returns.
//!
//! ## Structure
//!
//! - `run()`: main dispatch (called by `main.rs`)
//! - `init_logging()` / `load_config()`: ambient setup (a broken config file
//!   is fatal everywhere except the hidden completion command)
//! - `handle_*()`: per-command handlers
//!
//! Entity commands are not part of the derived [`Commands`] enum. They are
//! registered at runtime from [`entity_groups`] and dispatched by name.
//!
//! [`Lifecycle`]: sisu::crud::Lifecycle

use super::complete::handle_complete;
use super::input::TerminalInput;
use super::registrar::{entity_groups, find_group, EntityGroup};
use super::render::print_messages;
use super::setup::{
    build_command, print_grouped_help, print_help_for_command, Cli, Commands, CompletionShell,
};
use clap::FromArgMatches;
use sisu::commands::config::{self as config_cmd, ConfigAction};
use sisu::commands::{export, migrate};
use sisu::config::{self, SisuConfig};
use sisu::crud::scoped;
use sisu::error::{Result, SisuError};
use sisu::store::sqlite::SqliteConnector;
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let groups = entity_groups();
    let matches = build_command(&groups).get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_logging(cli.verbose);

    // Completion scripts need neither config nor database
    if let Some(Commands::Completions { shell }) = &cli.command {
        return handle_completions(*shell);
    }

    // Completion must never fail, even on a broken config file
    let config = match &cli.command {
        Some(Commands::Complete { .. }) => load_config().unwrap_or_else(|e| {
            log::debug!("completion falls back to default config: {}", e);
            SisuConfig::default()
        }),
        _ => load_config()?,
    };
    let connector = SqliteConnector::new(config.resolve_db_path(cli.db.as_deref()));
    log::debug!("database: {}", connector.path().display());

    match cli.command {
        Some(Commands::Migrate) => handle_migrate(connector),
        Some(Commands::Export { tables, all, dir }) => {
            let dir = dir.unwrap_or_else(|| PathBuf::from(&config.export_dir));
            handle_export(&groups, connector, tables, all, dir)
        }
        Some(Commands::Config { key, value }) => handle_config(key, value),
        Some(Commands::Completions { shell }) => handle_completions(shell),
        Some(Commands::Complete {
            entity,
            action,
            words,
        }) => handle_complete(&groups, connector, &entity, &action, &words),
        None => match matches.subcommand() {
            Some((name, sub)) => {
                let group = find_group(&groups, name)
                    .ok_or_else(|| SisuError::Api(format!("unknown command: {}", name)))?;
                handle_entity(group, connector, sub)
            }
            None => {
                print_grouped_help(&groups);
                Ok(())
            }
        },
    }
}

/// `warn` by default, `debug` with `-v`; `RUST_LOG` wins over both.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn load_config() -> Result<SisuConfig> {
    match config::config_dir() {
        Ok(dir) => {
            log::debug!("config dir: {}", dir.display());
            SisuConfig::load(dir)
        }
        Err(e) => {
            log::debug!("using default config: {}", e);
            Ok(SisuConfig::default())
        }
    }
}

fn handle_entity(
    group: &dyn EntityGroup,
    connector: SqliteConnector,
    matches: &clap::ArgMatches,
) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let mut input = TerminalInput::new();
    scoped(connector, |lifecycle| {
        group.run(lifecycle, matches, &mut input, today)
    })
}

fn handle_migrate(connector: SqliteConnector) -> Result<()> {
    let result = scoped(connector, |lifecycle| migrate::run(lifecycle.ensure_open()?))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(
    groups: &[Box<dyn EntityGroup>],
    connector: SqliteConnector,
    tables: Vec<String>,
    all: bool,
    dir: PathBuf,
) -> Result<()> {
    let tables: Vec<String> = if all {
        export::TABLES.iter().map(|t| t.to_string()).collect()
    } else {
        tables
    };
    if tables.is_empty() {
        print_help_for_command(groups, "export");
        return Ok(());
    }

    let result = scoped(connector, |lifecycle| {
        export::run(&*lifecycle.ensure_open()?, &tables, &dir)
    })?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let result = config_cmd::run(&config::config_dir()?, action)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_completions(shell: CompletionShell) -> Result<()> {
    match shell {
        CompletionShell::Bash => print!("{}", BASH_COMPLETION_SCRIPT),
        CompletionShell::Zsh => print!("{}", ZSH_COMPLETION_SCRIPT),
    }
    Ok(())
}

const BASH_COMPLETION_SCRIPT: &str = include_str!("bash.completion.sh");
const ZSH_COMPLETION_SCRIPT: &str = include_str!("zsh.completion.sh");
