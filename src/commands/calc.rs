use std::path::Path;

use anyhow::Result;

use petronorm::norm;

use super::{gather_composition, print_mineral_table, print_oxide_table};

pub fn execute(entries: &[String], csv: Option<&Path>, json_output: bool) -> Result<()> {
    let comp = gather_composition(entries, csv)?;
    let result = norm::compute(&comp);

    if json_output {
        let payload = serde_json::json!({
            "oxides": comp,
            "result": result,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print_oxide_table(&comp);
        println!();
        print_mineral_table(&result);
    }
    Ok(())
}
