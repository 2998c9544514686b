use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use petronorm::import::{self, CSV_TEMPLATE_NAME};

pub fn execute(output: Option<&Path>) -> Result<()> {
    let template = import::template();
    match output {
        Some(path) => {
            // Given a directory, drop the template into it under its
            // conventional name.
            let target = if path.is_dir() {
                path.join(CSV_TEMPLATE_NAME)
            } else {
                path.to_path_buf()
            };
            fs::write(&target, template)
                .with_context(|| format!("failed to write {}", target.display()))?;
            println!("{} Wrote template to {}", "✓".green(), target.display());
        }
        None => print!("{template}"),
    }
    Ok(())
}
