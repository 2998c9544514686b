//! Simplified CIPW normative calculation.
//!
//! This is a single-pass proportional allocation, not a full CIPW norm: there
//! is no independent Fe2+/Fe3+ partitioning, no mineral sequence with
//! residual reallocation, and no silica-saturation classification. Each
//! normative mineral is a fixed linear combination of oxide values; the raw
//! weights are then scaled to percent.
//!
//! `compute` is pure and deterministic: no I/O, no shared state, safe to call
//! concurrently. Input is assumed to be validated (non-negative, finite) by
//! the caller before it gets here; see [`crate::validate`].

use crate::minerals::MineralResult;
use crate::oxides::OxideComposition;

/// Molar mass of FeO (g/mol).
pub const MW_FEO: f64 = 71.844;
/// Molar mass of Fe2O3 (g/mol).
pub const MW_FE2O3: f64 = 159.69;

/// Compute the normative mineral composition for a validated oxide analysis.
///
/// When the raw total is positive, the output weights sum to 100 within
/// rounding tolerance (each weight rounded to 4 decimal places, half away
/// from zero). When every raw weight is zero the result is all zeros; the
/// division is guarded, so there is no arithmetic failure path.
pub fn compute(oxides: &OxideComposition) -> MineralResult {
    let raw = raw_weights(oxides);
    let total: f64 = raw.iter().sum();
    if total > 0.0 {
        MineralResult::from_weights(raw.map(|w| round4(w / total * 100.0)))
    } else {
        MineralResult::default()
    }
}

/// Ferrous iron used by the raw-weight formulas.
///
/// When no FeO was reported but Fe2O3 was, impute FeO from Fe2O3 by molar
/// proportion (2 FeO per Fe2O3). Fe2O3 itself is never altered.
fn ferrous_iron(oxides: &OxideComposition) -> f64 {
    if oxides.feo <= 0.0 && oxides.fe2o3 > 0.0 {
        oxides.fe2o3 * (2.0 * MW_FEO / MW_FE2O3)
    } else {
        oxides.feo
    }
}

/// Unnormalized mineral weights in [`crate::minerals::Mineral::ALL`] order.
///
/// The coefficients are part of the calculation contract, not tunable.
/// Quartz is the only mineral that can go negative from the formulas, so it
/// is the only one clipped at zero.
fn raw_weights(oxides: &OxideComposition) -> [f64; 9] {
    let feo = ferrous_iron(oxides);
    [
        (oxides.sio2 - (oxides.al2o3 * 2.0 + oxides.cao + oxides.mgo)).max(0.0),
        oxides.k2o * 6.58,
        oxides.na2o * 8.52,
        oxides.cao * 2.35,
        (oxides.cao + oxides.mgo) * 1.1,
        (oxides.mgo + feo) * 0.9,
        oxides.fe2o3 * 1.43,
        oxides.tio2 * 1.89,
        oxides.p2o5 * 3.33,
    ]
}

/// Round to 4 decimal places, half away from zero (`f64::round` semantics).
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
