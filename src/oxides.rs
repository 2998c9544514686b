//! Major-oxide input model.
//!
//! A bulk-rock analysis is expressed as weight percent of ten major oxides.
//! The set is closed: these ten symbols are the whole input vocabulary, and
//! anything else is rejected at the validation boundary before a calculation
//! is attempted.

use serde::{Deserialize, Serialize};

/// The ten major oxides accepted as input, in canonical column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Oxide {
    SiO2,
    Al2O3,
    Fe2O3,
    FeO,
    MgO,
    CaO,
    Na2O,
    K2O,
    TiO2,
    P2O5,
}

impl Oxide {
    /// Canonical order, used for CSV columns and display.
    pub const ALL: [Oxide; 10] = [
        Oxide::SiO2,
        Oxide::Al2O3,
        Oxide::Fe2O3,
        Oxide::FeO,
        Oxide::MgO,
        Oxide::CaO,
        Oxide::Na2O,
        Oxide::K2O,
        Oxide::TiO2,
        Oxide::P2O5,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Oxide::SiO2 => "SiO2",
            Oxide::Al2O3 => "Al2O3",
            Oxide::Fe2O3 => "Fe2O3",
            Oxide::FeO => "FeO",
            Oxide::MgO => "MgO",
            Oxide::CaO => "CaO",
            Oxide::Na2O => "Na2O",
            Oxide::K2O => "K2O",
            Oxide::TiO2 => "TiO2",
            Oxide::P2O5 => "P2O5",
        }
    }

    /// Look up an oxide by its chemical symbol (case-sensitive).
    pub fn from_symbol(symbol: &str) -> Option<Oxide> {
        Oxide::ALL.iter().copied().find(|ox| ox.symbol() == symbol)
    }
}

impl std::fmt::Display for Oxide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A bulk-rock composition in oxide weight percent.
///
/// Serializes to a flat `{"SiO2": 60.0, ...}` map. Fields absent from the
/// serialized form default to 0.0, matching the direct-entry convention that
/// an unspecified oxide means "not present", not "invalid".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OxideComposition {
    #[serde(rename = "SiO2")]
    pub sio2: f64,
    #[serde(rename = "Al2O3")]
    pub al2o3: f64,
    #[serde(rename = "Fe2O3")]
    pub fe2o3: f64,
    #[serde(rename = "FeO")]
    pub feo: f64,
    #[serde(rename = "MgO")]
    pub mgo: f64,
    #[serde(rename = "CaO")]
    pub cao: f64,
    #[serde(rename = "Na2O")]
    pub na2o: f64,
    #[serde(rename = "K2O")]
    pub k2o: f64,
    #[serde(rename = "TiO2")]
    pub tio2: f64,
    #[serde(rename = "P2O5")]
    pub p2o5: f64,
}

impl OxideComposition {
    pub fn get(&self, oxide: Oxide) -> f64 {
        match oxide {
            Oxide::SiO2 => self.sio2,
            Oxide::Al2O3 => self.al2o3,
            Oxide::Fe2O3 => self.fe2o3,
            Oxide::FeO => self.feo,
            Oxide::MgO => self.mgo,
            Oxide::CaO => self.cao,
            Oxide::Na2O => self.na2o,
            Oxide::K2O => self.k2o,
            Oxide::TiO2 => self.tio2,
            Oxide::P2O5 => self.p2o5,
        }
    }

    pub fn set(&mut self, oxide: Oxide, value: f64) {
        match oxide {
            Oxide::SiO2 => self.sio2 = value,
            Oxide::Al2O3 => self.al2o3 = value,
            Oxide::Fe2O3 => self.fe2o3 = value,
            Oxide::FeO => self.feo = value,
            Oxide::MgO => self.mgo = value,
            Oxide::CaO => self.cao = value,
            Oxide::Na2O => self.na2o = value,
            Oxide::K2O => self.k2o = value,
            Oxide::TiO2 => self.tio2 = value,
            Oxide::P2O5 => self.p2o5 = value,
        }
    }

    /// All ten values in canonical column order.
    pub fn entries(&self) -> impl Iterator<Item = (Oxide, f64)> + '_ {
        Oxide::ALL.iter().map(move |&ox| (ox, self.get(ox)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_round_trip() {
        for ox in Oxide::ALL {
            assert_eq!(Oxide::from_symbol(ox.symbol()), Some(ox));
        }
        assert_eq!(Oxide::from_symbol("MnO"), None);
        assert_eq!(Oxide::from_symbol("sio2"), None); // case-sensitive
    }

    #[test]
    fn missing_keys_default_to_zero() {
        let parsed: OxideComposition = serde_json::from_str(r#"{"SiO2": 48.5}"#).unwrap();
        assert_eq!(parsed.sio2, 48.5);
        assert_eq!(parsed.al2o3, 0.0);
        assert_eq!(parsed.p2o5, 0.0);
    }

    #[test]
    fn serializes_with_chemical_symbols() {
        let mut comp = OxideComposition::default();
        comp.set(Oxide::TiO2, 1.25);
        let json = serde_json::to_value(comp).unwrap();
        assert_eq!(json["TiO2"], 1.25);
        assert_eq!(json["SiO2"], 0.0);
    }
}
