//! # CLI Layer
//!
//! This module is **one possible client** for remq. It is the only place in
//! the codebase that:
//! - Parses process arguments
//! - Writes to stdout or stderr
//! - Decides the exit status (through `main.rs`)
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: clap errors become [`RemError::Usage`], help and
//!    version print normally
//! 2. **Context Setup**: logging, config, store path and time context
//! 3. **API Dispatch**: call the matching [`RemApi`] method
//! 4. **Output**: exactly one JSON value on stdout, or one error object on
//!    stderr
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `handle_*()`: Per-command handlers that call API and print JSON

use super::logging::init_logging;
use super::print::{print_export, print_json};
use super::setup::{Cli, Commands};
use chrono::{DateTime, Utc};
use clap::error::ErrorKind;
use clap::Parser;
use directories::ProjectDirs;
use remq::api::{RemApi, ReminderQuery};
use remq::config::RemConfig;
use remq::dates::TimeContext;
use remq::error::{RemError, Result};
use remq::export::ExportFormat;
use remq::store::snapshot::SnapshotStore;
use std::path::PathBuf;

struct AppContext {
    api: RemApi<SnapshotStore>,
    pretty: bool,
    now: DateTime<Utc>,
}

pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return handle_parse_error(err),
    };

    init_logging(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Commands::Lists => handle_lists(&ctx),
        Commands::Reminders {
            list,
            completed,
            search,
            due_before,
            due_after,
        } => handle_reminders(
            &ctx,
            ReminderQuery {
                list,
                completed,
                search,
                due_before,
                due_after,
            },
        ),
        Commands::Get { id } => handle_get(&ctx, &id),
        Commands::Stats => handle_stats(&ctx),
        Commands::Overdue { list } => handle_overdue(&ctx, list.as_deref()),
        Commands::Upcoming { days, list } => handle_upcoming(&ctx, list.as_deref(), days),
        Commands::Export {
            list,
            incomplete,
            format,
            output_file,
        } => handle_export(&ctx, list.as_deref(), incomplete, format, output_file),
    }
}

fn handle_parse_error(err: clap::Error) -> Result<()> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            err.print()?;
            Ok(())
        }
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            Err(RemError::Usage("missing command".to_string()))
        }
        _ => Err(RemError::Usage(usage_message(&err.to_string()))),
    }
}

/// First line of a clap error, without its `error: ` label.
fn usage_message(rendered: &str) -> String {
    let first = rendered.lines().next().unwrap_or_default().trim();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dirs = ProjectDirs::from("com", "remq", "remq");

    let config = match &dirs {
        Some(dirs) => RemConfig::load(dirs.config_dir())?,
        None => RemConfig::default(),
    };

    let store_path = resolve_store_path(cli, &config, dirs.as_ref())?;
    let time = match &cli.timezone {
        Some(zone) => zone.parse::<TimeContext>()?,
        None => config.time_context()?,
    };

    log::debug!("store: {}, time zone: {}", store_path.display(), time);

    let store = SnapshotStore::open(&store_path)?;

    Ok(AppContext {
        api: RemApi::new(store, time),
        pretty: cli.pretty || config.pretty,
        now: Utc::now(),
    })
}

fn resolve_store_path(
    cli: &Cli,
    config: &RemConfig,
    dirs: Option<&ProjectDirs>,
) -> Result<PathBuf> {
    if let Some(path) = &cli.store {
        return Ok(path.clone());
    }
    if let Some(path) = &config.store_path {
        return Ok(path.clone());
    }
    dirs.map(|d| config.store_path_or(d.data_dir()))
        .ok_or_else(|| RemError::StoreUnavailable("no home directory for the default store".into()))
}

fn handle_lists(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.lists()?;
    print_json(&result.lists, ctx.pretty)
}

fn handle_reminders(ctx: &AppContext, query: ReminderQuery) -> Result<()> {
    let result = ctx.api.reminders(&query, ctx.now)?;
    print_json(&result.reminders, ctx.pretty)
}

fn handle_get(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.get(id)?;
    match result.reminder {
        Some(reminder) => print_json(&reminder, ctx.pretty),
        None => Err(RemError::ReminderNotFound(id.to_string())),
    }
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats(ctx.now)?;
    match result.stats {
        Some(stats) => print_json(&stats, ctx.pretty),
        None => Ok(()),
    }
}

fn handle_overdue(ctx: &AppContext, list: Option<&str>) -> Result<()> {
    let result = ctx.api.overdue(list, ctx.now)?;
    print_json(&result.reminders, ctx.pretty)
}

fn handle_upcoming(ctx: &AppContext, list: Option<&str>, days: u32) -> Result<()> {
    let result = ctx.api.upcoming(list, days, ctx.now)?;
    print_json(&result.reminders, ctx.pretty)
}

fn handle_export(
    ctx: &AppContext,
    list: Option<&str>,
    incomplete: bool,
    format: ExportFormat,
    output_file: Option<PathBuf>,
) -> Result<()> {
    let result = ctx.api.export(list, incomplete)?;
    print_export(&result.exported, format, output_file.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_message_strips_label() {
        let rendered = "error: unrecognized subcommand 'frobnicate'\n\nUsage: remq <COMMAND>\n";
        assert_eq!(
            usage_message(rendered),
            "unrecognized subcommand 'frobnicate'"
        );
    }

    #[test]
    fn parse_errors_become_usage_errors() {
        let err = Cli::try_parse_from(["remq", "get"]).unwrap_err();
        assert!(matches!(handle_parse_error(err), Err(RemError::Usage(_))));
    }

    #[test]
    fn store_flag_wins_over_config() {
        let cli = Cli::try_parse_from(["remq", "--store", "/tmp/flag.json", "lists"]).unwrap();
        let config = RemConfig {
            store_path: Some(PathBuf::from("/tmp/config.json")),
            ..RemConfig::default()
        };
        assert_eq!(
            resolve_store_path(&cli, &config, None).unwrap(),
            PathBuf::from("/tmp/flag.json")
        );

        let cli = Cli::try_parse_from(["remq", "lists"]).unwrap();
        assert_eq!(
            resolve_store_path(&cli, &config, None).unwrap(),
            PathBuf::from("/tmp/config.json")
        );
    }

    #[test]
    fn no_store_anywhere_is_unavailable() {
        let cli = Cli::try_parse_from(["remq", "lists"]).unwrap();
        assert!(matches!(
            resolve_store_path(&cli, &RemConfig::default(), None),
            Err(RemError::StoreUnavailable(_))
        ));
    }
}
