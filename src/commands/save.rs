use std::path::Path;

use anyhow::Result;
use chrono::Local;
use colored::Colorize;

use petronorm::config::Config;
use petronorm::{AnalysisRecord, AnalysisStore};

use super::{gather_composition, print_mineral_table};

pub fn execute(
    config: &Config,
    entries: &[String],
    csv: Option<&Path>,
    name: Option<String>,
    note: String,
) -> Result<()> {
    let comp = gather_composition(entries, csv)?;
    let name =
        name.unwrap_or_else(|| Local::now().format("Analysis_%Y%m%d_%H%M%S").to_string());

    let record = AnalysisRecord::new(name.as_str(), note, comp);
    let store = AnalysisStore::open(&config.store_path);
    let replaced = store.load_all().contains_key(&name);
    store.save(&record)?;

    print_mineral_table(&record.result);
    println!();
    if replaced {
        println!("{} Replaced '{}' in {}", "✓".green(), name, store.path().display());
    } else {
        println!("{} Saved '{}' to {}", "✓".green(), name, store.path().display());
    }
    Ok(())
}
