use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use petronorm::config::Config;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Simplified CIPW normative minerals calculator", long_about = None)]
struct Cli {
    /// Saved-analyses document (default: ~/.petronorm/saved_analyses.json)
    #[arg(long, global = true, value_name = "FILE")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the normative composition without saving
    Calc {
        /// Oxide value as SYMBOL=VALUE, repeatable; unspecified oxides are 0
        #[arg(short = 'o', long = "oxide", value_name = "SYMBOL=VALUE")]
        oxide: Vec<String>,

        /// Read the analysis from a single-row CSV file (all ten columns required)
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Compute and save a named analysis (re-saving a name replaces it)
    Save {
        /// Oxide value as SYMBOL=VALUE, repeatable; unspecified oxides are 0
        #[arg(short = 'o', long = "oxide", value_name = "SYMBOL=VALUE")]
        oxide: Vec<String>,

        /// Read the analysis from a single-row CSV file (all ten columns required)
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,

        /// Record name (default: Analysis_<timestamp>)
        #[arg(short, long)]
        name: Option<String>,

        /// Free-form note stored with the record
        #[arg(long, default_value = "")]
        note: String,
    },

    /// Show one saved analysis
    Show {
        /// Record name
        name: String,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// List saved analyses
    List {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Delete a saved analysis (no error if the name does not exist)
    Delete {
        /// Record name
        name: String,
    },

    /// Emit the ten-column CSV input template
    Template {
        /// Write to a file instead of stdout (suggested name: CIPW_input_template.csv)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.store)?;

    match cli.command {
        Commands::Calc { oxide, csv, json } => commands::calc::execute(&oxide, csv.as_deref(), json),
        Commands::Save {
            oxide,
            csv,
            name,
            note,
        } => commands::save::execute(&config, &oxide, csv.as_deref(), name, note),
        Commands::Show { name, json } => commands::show::execute(&config, &name, json),
        Commands::List { json } => commands::list::execute(&config, json),
        Commands::Delete { name } => commands::delete::execute(&config, &name),
        Commands::Template { output } => commands::template::execute(output.as_deref()),
    }
}
