//! Normative mineral result model.
//!
//! The calculator always reports the same nine normative minerals, each with
//! a fixed descriptive text. The descriptions are a static catalog keyed by
//! mineral, never derived from the input analysis.

use serde::{Deserialize, Serialize};

/// The nine normative minerals, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mineral {
    Quartz,
    Orthoclase,
    Albite,
    Anorthite,
    Diopside,
    Olivine,
    Magnetite,
    Ilmenite,
    Apatite,
}

impl Mineral {
    pub const ALL: [Mineral; 9] = [
        Mineral::Quartz,
        Mineral::Orthoclase,
        Mineral::Albite,
        Mineral::Anorthite,
        Mineral::Diopside,
        Mineral::Olivine,
        Mineral::Magnetite,
        Mineral::Ilmenite,
        Mineral::Apatite,
    ];

    /// Display name with the conventional abbreviation.
    pub fn name(self) -> &'static str {
        match self {
            Mineral::Quartz => "Quartz (Q)",
            Mineral::Orthoclase => "Orthoclase (Or)",
            Mineral::Albite => "Albite (Ab)",
            Mineral::Anorthite => "Anorthite (An)",
            Mineral::Diopside => "Diopside (Di)",
            Mineral::Olivine => "Olivine (Ol)",
            Mineral::Magnetite => "Magnetite (Mt)",
            Mineral::Ilmenite => "Ilmenite (Il)",
            Mineral::Apatite => "Apatite (Ap)",
        }
    }

    /// Static descriptive text shown alongside the computed weight.
    pub fn description(self) -> &'static str {
        match self {
            Mineral::Quartz => "Silicon dioxide — common in acidic and felsic rocks.",
            Mineral::Orthoclase => "Potassium feldspar (KAlSi3O8) — common in silicic rocks.",
            Mineral::Albite => "Sodium feldspar (NaAlSi3O8) — typical in many silicic rocks.",
            Mineral::Anorthite => "Calcium feldspar (CaAl2Si2O8) — indicates higher Ca content.",
            Mineral::Diopside => {
                "Calcium–magnesium pyroxene — common in mafic to intermediate rocks."
            }
            Mineral::Olivine => "Mg–Fe silicate — typical of mafic and ultramafic rocks.",
            Mineral::Magnetite => "Iron oxide — an indicator of oxidation state (Fe3+).",
            Mineral::Ilmenite => "Titanium–iron oxide — indicator of Ti presence.",
            Mineral::Apatite => "Calcium phosphate — phosphorus carrier.",
        }
    }
}

impl std::fmt::Display for Mineral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Normative mineral weights in percent, ordered as [`Mineral::ALL`].
///
/// Serializes to a flat map keyed by display name, e.g.
/// `{"Quartz (Q)": 12.3456, ...}`. Invariant: either every weight is exactly
/// 0.0 (nothing to normalize) or the weights sum to 100 within rounding
/// tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MineralResult {
    #[serde(rename = "Quartz (Q)")]
    pub quartz: f64,
    #[serde(rename = "Orthoclase (Or)")]
    pub orthoclase: f64,
    #[serde(rename = "Albite (Ab)")]
    pub albite: f64,
    #[serde(rename = "Anorthite (An)")]
    pub anorthite: f64,
    #[serde(rename = "Diopside (Di)")]
    pub diopside: f64,
    #[serde(rename = "Olivine (Ol)")]
    pub olivine: f64,
    #[serde(rename = "Magnetite (Mt)")]
    pub magnetite: f64,
    #[serde(rename = "Ilmenite (Il)")]
    pub ilmenite: f64,
    #[serde(rename = "Apatite (Ap)")]
    pub apatite: f64,
}

impl MineralResult {
    /// Build from weights given in [`Mineral::ALL`] order.
    pub fn from_weights(weights: [f64; 9]) -> Self {
        Self {
            quartz: weights[0],
            orthoclase: weights[1],
            albite: weights[2],
            anorthite: weights[3],
            diopside: weights[4],
            olivine: weights[5],
            magnetite: weights[6],
            ilmenite: weights[7],
            apatite: weights[8],
        }
    }

    pub fn get(&self, mineral: Mineral) -> f64 {
        match mineral {
            Mineral::Quartz => self.quartz,
            Mineral::Orthoclase => self.orthoclase,
            Mineral::Albite => self.albite,
            Mineral::Anorthite => self.anorthite,
            Mineral::Diopside => self.diopside,
            Mineral::Olivine => self.olivine,
            Mineral::Magnetite => self.magnetite,
            Mineral::Ilmenite => self.ilmenite,
            Mineral::Apatite => self.apatite,
        }
    }

    /// Weights with their minerals, in reporting order.
    pub fn entries(&self) -> impl Iterator<Item = (Mineral, f64)> + '_ {
        Mineral::ALL.iter().map(move |&m| (m, self.get(m)))
    }

    pub fn total(&self) -> f64 {
        self.entries().map(|(_, w)| w).sum()
    }
}
