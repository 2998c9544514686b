//! Input validation boundary.
//!
//! All oxide input passes through here before the calculator sees it; the
//! calculator itself assumes non-negative, finite values and has no error
//! path of its own.
//!
//! Two entry paths with deliberately different defaulting rules:
//! - direct entry (`SiO2=60.5` pairs): an unspecified oxide defaults to 0.0;
//! - CSV import ([`crate::import`]): every column is required, a missing one
//!   is a hard error.

use thiserror::Error;

use crate::oxides::{Oxide, OxideComposition};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("unknown oxide symbol '{0}' (expected one of: SiO2, Al2O3, Fe2O3, FeO, MgO, CaO, Na2O, K2O, TiO2, P2O5)")]
    UnknownOxide(String),

    #[error("malformed oxide entry '{0}' (expected SYMBOL=VALUE, e.g. SiO2=60.5)")]
    MalformedEntry(String),

    #[error("{oxide}: '{value}' is not a number")]
    NotNumeric { oxide: String, value: String },

    #[error("{oxide}: {value} is negative; oxide wt% must be >= 0")]
    Negative { oxide: String, value: f64 },

    #[error("{oxide}: value must be finite")]
    NotFinite { oxide: String },

    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("expected exactly one data row, found {0}")]
    RowCount(usize),

    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Parse and range-check a single oxide value.
pub fn parse_value(oxide: Oxide, raw: &str) -> Result<f64, InputError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| InputError::NotNumeric {
            oxide: oxide.symbol().to_string(),
            value: raw.trim().to_string(),
        })?;
    if !value.is_finite() {
        return Err(InputError::NotFinite {
            oxide: oxide.symbol().to_string(),
        });
    }
    if value < 0.0 {
        return Err(InputError::Negative {
            oxide: oxide.symbol().to_string(),
            value,
        });
    }
    Ok(value)
}

/// Parse one direct-entry pair, e.g. `SiO2=60.5`.
pub fn parse_entry(entry: &str) -> Result<(Oxide, f64), InputError> {
    let (symbol, raw) = entry
        .split_once('=')
        .ok_or_else(|| InputError::MalformedEntry(entry.to_string()))?;
    let oxide = Oxide::from_symbol(symbol.trim())
        .ok_or_else(|| InputError::UnknownOxide(symbol.trim().to_string()))?;
    let value = parse_value(oxide, raw)?;
    Ok((oxide, value))
}

/// Build a composition from direct-entry pairs. Oxides not mentioned stay at
/// 0.0; a repeated symbol takes the last value given.
pub fn compose_entries<'a, I>(entries: I) -> Result<OxideComposition, InputError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut comp = OxideComposition::default();
    for entry in entries {
        let (oxide, value) = parse_entry(entry)?;
        comp.set(oxide, value);
    }
    Ok(comp)
}

/// Check an already-built composition, e.g. one deserialized from JSON.
pub fn check(comp: &OxideComposition) -> Result<(), InputError> {
    for (oxide, value) in comp.entries() {
        if !value.is_finite() {
            return Err(InputError::NotFinite {
                oxide: oxide.symbol().to_string(),
            });
        }
        if value < 0.0 {
            return Err(InputError::Negative {
                oxide: oxide.symbol().to_string(),
                value,
            });
        }
    }
    Ok(())
}
