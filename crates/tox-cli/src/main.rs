mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tox",
    version,
    about = "Forensic toxicology reference lookup and dose interpretation"
)]
struct Cli {
    /// Custom catalog JSON file (default: built-in reference data)
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose-log", global = true)]
    verbose_log: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List substances, optionally filtered
    Substances {
        /// Only show this category: pharmaceutical, narcotic or synthetic
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive text matched against names and descriptions
        #[arg(short, long)]
        search: Option<String>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Show reference values and metabolites for one substance
    Show {
        /// Substance identifier
        id: u32,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// List the categories present in the catalog
    Categories,
    /// Interpret a measured level
    Analyze {
        /// Substance identifier
        id: u32,

        /// Measured concentration, in the substance's (or metabolite's) unit
        #[arg(allow_negative_numbers = true)]
        level: f64,

        /// Interpret the level of this metabolite instead of the parent substance
        #[arg(short, long, value_name = "NAME")]
        metabolite: Option<String>,

        /// Show which rule matched and why
        #[arg(long)]
        verbose: bool,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Answer a serialized dose analysis request with a JSON response
    Request {
        /// Path to the request JSON, or "-" for stdin
        input: PathBuf,
    },
    /// Manage and inspect catalogs
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Summarize the active catalog
    Info,
    /// Validate a custom catalog file
    Validate {
        /// Path to catalog JSON file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    tox_core::logging::init_with_level(if cli.verbose_log { "debug" } else { "warn" });

    let catalog_path = cli.catalog.as_deref();

    let result = match cli.command {
        Commands::Substances {
            category,
            search,
            output,
        } => commands::substances::list(catalog_path, category, search, &output),
        Commands::Show { id, output } => commands::substances::show(catalog_path, id, &output),
        Commands::Categories => commands::substances::categories(catalog_path),
        Commands::Analyze {
            id,
            level,
            metabolite,
            verbose,
            output,
        } => commands::analyze::run(catalog_path, id, level, metabolite, &output, verbose),
        Commands::Request { input } => match commands::analyze::request(catalog_path, &input) {
            Ok(true) => Ok(()),
            // The error payload is already on stdout
            Ok(false) => std::process::exit(1),
            Err(e) => Err(e),
        },
        Commands::Catalog { action } => match action {
            CatalogAction::Info => commands::catalog::info(catalog_path),
            CatalogAction::Validate { file } => commands::catalog::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
