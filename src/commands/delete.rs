use anyhow::Result;
use colored::Colorize;

use petronorm::config::Config;
use petronorm::AnalysisStore;

pub fn execute(config: &Config, name: &str) -> Result<()> {
    let store = AnalysisStore::open(&config.store_path);
    let existed = store.load_all().contains_key(name);
    store.delete(name)?;

    if existed {
        println!("{} Deleted '{name}'", "✓".green());
    } else {
        // Deleting an absent name is a no-op by contract, not an error.
        println!("No saved analysis named '{name}'; nothing deleted.");
    }
    Ok(())
}
