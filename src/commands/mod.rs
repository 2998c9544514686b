pub mod calc;
pub mod delete;
pub mod list;
pub mod save;
pub mod show;
pub mod template;

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use petronorm::{import, validate, MineralResult, OxideComposition};

/// Build the input composition for `calc`/`save`.
///
/// A CSV file, when given, is read first under the strict import rules (all
/// ten columns, exactly one row). `-o SYMBOL=VALUE` pairs are applied on top
/// and override the file; oxides mentioned by neither stay at 0.0.
pub(crate) fn gather_composition(
    entries: &[String],
    csv: Option<&Path>,
) -> Result<OxideComposition> {
    let mut comp = match csv {
        Some(path) => import::read_single_row_file(path)?,
        None => OxideComposition::default(),
    };
    for entry in entries {
        let (oxide, value) = validate::parse_entry(entry)?;
        comp.set(oxide, value);
    }
    Ok(comp)
}

pub(crate) fn print_oxide_table(comp: &OxideComposition) {
    println!("{}", "Input oxides (wt%)".bold());
    for (oxide, value) in comp.entries() {
        println!("  {:<7} {:>9.4}", oxide.symbol(), value);
    }
}

pub(crate) fn print_mineral_table(result: &MineralResult) {
    println!("{}", "Normative minerals (wt%)".bold());
    for (mineral, weight) in result.entries() {
        println!(
            "  {:<16} {:>9.4}  {}",
            mineral.name(),
            weight,
            mineral.description().dimmed()
        );
    }
    println!("  {:<16} {:>9.4}", "Total", result.total());
}
