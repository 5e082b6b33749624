use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prj")]
#[command(author, version, about = "A project management tool")]
#[command(propagate_version = true)]
pub struct Cli {
    /// The base directory to use (overrides global configuration)
    #[arg(short, long, global = true)]
    pub basedir: Option<PathBuf>,

    /// Log more to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Change configuration options
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Create a new project
    #[command(visible_alias = "n")]
    New {
        /// Directory name of the project
        name: String,

        /// Organising level created between the base dir and the project dir (repeatable)
        #[arg(short, long)]
        categories: Vec<String>,

        /// Create a git repository
        #[arg(short, long)]
        git: bool,

        /// Name to register the project under, when the directory name would clash
        #[arg(short = 'n', long = "name")]
        register_as: Option<String>,
    },

    /// Add an existing directory (the current one if no path is given)
    Add {
        /// Name for the project
        name: String,

        /// Directory of the project
        path: Option<PathBuf>,
    },

    /// Remove a project from prj
    #[command(visible_aliases = ["remove", "rm"])]
    Delete {
        /// Name of the project to remove
        name: String,

        /// Also remove the directory
        #[arg(short = 'f', long)]
        nocache: bool,
    },

    /// Print a command that changes to the project directory, meant to be eval'ed
    #[command(visible_alias = "g")]
    Goto {
        /// Name of the project
        name: String,

        /// Add an $EDITOR startup command to the output
        #[arg(short, long)]
        editor: bool,
    },

    /// Print your projects with their paths
    #[command(visible_aliases = ["l", "ls"])]
    List,

    /// Print registered project names, one per line (for shell completion)
    #[command(hide = true)]
    Names,
}

/// Subcommands for configuration management.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// List all configuration options
    #[command(visible_aliases = ["l", "ls"])]
    List,

    /// Print a single configuration option
    Get {
        /// Option name, e.g. BaseDir
        key: String,
    },

    /// Set a configuration option
    Set {
        /// Option name: BaseDir, AlwaysGit or EditorInBackground
        key: String,

        /// New value; boolean options are only enabled by "true"
        value: String,
    },
}
