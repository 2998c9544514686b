use anyhow::{bail, Result};
use colored::Colorize;

use petronorm::config::Config;
use petronorm::AnalysisStore;

use super::{print_mineral_table, print_oxide_table};

pub fn execute(config: &Config, name: &str, json_output: bool) -> Result<()> {
    let store = AnalysisStore::open(&config.store_path);
    let all = store.load_all();
    let Some(record) = all.get(name) else {
        bail!("No saved analysis named '{name}'. Run 'petronorm list' to see what exists.");
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }

    println!("{}", record.name.bold());
    println!("  saved: {}", record.timestamp.to_rfc3339());
    if !record.note.is_empty() {
        println!("  note:  {}", record.note);
    }
    println!();
    print_oxide_table(&record.oxides);
    println!();
    print_mineral_table(&record.result);
    Ok(())
}
