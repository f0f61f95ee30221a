//! gradebook CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod session;

use commands::report::ReportArgs;

#[derive(Parser)]
#[command(name = "gradebook", version, about = "Student grade tracker and report generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage students interactively
    Shell {
        /// Roster .toml file or directory to start from
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Start with the four demo students
        #[arg(long)]
        demo: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print a report for a roster and export it
    Report {
        /// Roster .toml file or directory
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Report on the four demo students
        #[arg(long)]
        demo: bool,

        /// Only include students whose name contains this (case-insensitive)
        #[arg(long)]
        search: Option<String>,

        /// Sort key: name, average-desc, average-asc, highest-desc, lowest-asc
        #[arg(long)]
        sort: Option<String>,

        /// Output formats: text, json, html, svg, all (comma-separated)
        #[arg(long)]
        format: Option<String>,

        /// Output directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print to the terminal only
        #[arg(long)]
        no_export: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate roster TOML files
    Validate {
        /// Path to roster file or directory
        #[arg(long)]
        roster: PathBuf,
    },

    /// Create starter config and example roster
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradebook=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Shell {
            roster,
            demo,
            config,
        } => commands::shell::execute(roster, demo, config),
        Commands::Report {
            roster,
            demo,
            search,
            sort,
            format,
            output,
            no_export,
            config,
        } => commands::report::execute(ReportArgs {
            roster,
            demo,
            search,
            sort,
            format,
            output,
            no_export,
            config,
        }),
        Commands::Validate { roster } => commands::validate::execute(roster),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
