use anyhow::{Context, Result};
use clap::Parser;

use prj::cli::Cli;
use prj::logging::init_logging;
use prj::registry::RegistryStore;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The guard MUST be held until program exit to ensure logs are flushed
    let _logging_guard = init_logging(cli.verbose)?;

    let mut store = RegistryStore::open().context("Could not load the project registry")?;
    tracing::debug!("Loaded registry from {:?}", store.path());

    let stdout = std::io::stdout();
    let outcome = prj::commands::dispatch(&cli, store.registry_mut(), &mut stdout.lock());

    // Saved even when the command failed; nothing is written before this point
    store
        .persist()
        .context("Could not save the project registry")?;

    outcome
}
