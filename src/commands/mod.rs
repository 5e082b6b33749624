//! Command handlers.
//!
//! Every handler works on the in-memory [`Registry`] handed to it and writes its
//! user-facing output to `out`. None of them touch `db.json`; the caller persists
//! once after dispatch.

pub mod add;
pub mod config;
pub mod delete;
pub mod goto;
pub mod list;
pub mod new;

use anyhow::Result;
use std::io::Write;

use crate::cli::{Cli, Commands, ConfigCommand};
use crate::registry::Registry;

/// Run the command selected on the command line.
pub fn dispatch<W: Write>(cli: &Cli, registry: &mut Registry, out: &mut W) -> Result<()> {
    match &cli.command {
        Commands::Config { command } => match command {
            ConfigCommand::List => config::list(registry, out),
            ConfigCommand::Get { key } => config::get(registry, key, out),
            ConfigCommand::Set { key, value } => config::set(registry, key, value),
        },
        Commands::New {
            name,
            categories,
            git,
            register_as,
        } => {
            let options = new::NewOptions {
                name,
                categories,
                git: *git,
                register_as: register_as.as_deref(),
                basedir: cli.basedir.as_deref(),
            };
            new::run(registry, &options, out)
        }
        Commands::Add { name, path } => add::run(registry, name, path.as_deref(), out),
        Commands::Delete { name, nocache } => delete::run(registry, name, *nocache, out),
        Commands::Goto { name, editor } => {
            let editor = editor.then(|| std::env::var("EDITOR").unwrap_or_default());
            goto::run(registry, name, editor.as_deref(), out)
        }
        Commands::List => list::run(registry, out),
        Commands::Names => list::names(registry, out),
    }
}
