//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use isis_adjacency::output::OutputMode;

/// isis-adjacency - IS-IS neighbor monitoring from ISIS-MIB walks
#[derive(Parser, Debug)]
#[command(
    name = "isis-adjacency",
    version,
    about = "IS-IS neighbor monitoring from ISIS-MIB walks",
    long_about = "Interpret ISIS-MIB adjacency tables collected via SNMP.\n\n\
                  Discovery turns every IS-IS neighbor address into a service,\n\
                  optionally filtered and labeled by subnet rules.\n\
                  Checks map the adjacency state to OK, WARN or CRIT."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// snmpwalk output to read (stdin when omitted)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub walk: Option<PathBuf>,

    /// Config file with discovery rules
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the neighbors parsed from a walk
    Parse,

    /// List the services discovery would create
    Discover,

    /// Check the adjacency state of one neighbor
    Check {
        /// Item (neighbor address) to check
        item: String,
    },

    /// Print the SNMP objects to walk
    Oids,

    /// Show version
    Version,
}

/// Run the CLI, returning the process exit code
pub fn run() -> anyhow::Result<i32> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let walk = cli.walk.as_deref();

    match cli.command {
        Some(Command::Parse) => commands::parse(walk, output_mode).map(|()| 0),
        Some(Command::Discover) => {
            commands::discover(walk, cli.config.as_deref(), output_mode).map(|()| 0)
        },
        Some(Command::Check { item }) => {
            commands::check(walk, &item, output_mode).map(|state| state.exit_code())
        },
        Some(Command::Oids) => {
            commands::oids(output_mode);
            Ok(0)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("isis-adjacency v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(0)
        },
        None => {
            println!("isis-adjacency v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'isis-adjacency --help' for usage");
            Ok(0)
        },
    }
}
