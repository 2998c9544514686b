use anyhow::Result;
use colored::Colorize;

use petronorm::config::Config;
use petronorm::AnalysisStore;

pub fn execute(config: &Config, json_output: bool) -> Result<()> {
    let store = AnalysisStore::open(&config.store_path);
    let all = store.load_all();

    if json_output {
        let entries: Vec<serde_json::Value> = all
            .values()
            .map(|r| {
                serde_json::json!({
                    "name": r.name,
                    "timestamp": r.timestamp,
                    "note": r.note,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if all.is_empty() {
        println!("No saved analyses in {}", store.path().display());
        return Ok(());
    }

    println!("{}", format!("Saved analyses ({})", all.len()).bold());
    for record in all.values() {
        let mut line = format!(
            "  {:<28} {}",
            record.name,
            record.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        );
        if !record.note.is_empty() {
            line.push_str(&format!("  - {}", record.note));
        }
        println!("{line}");
    }
    Ok(())
}
