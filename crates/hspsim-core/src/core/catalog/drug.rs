use crate::engine::error::SimError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Typed identifier for the built-in HSP90 inhibitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrugId {
    /// 17-AAG (tanespimycin), first-generation geldanamycin derivative.
    Aag17,
    /// XL-888, orally bioavailable ATP-competitive inhibitor.
    Xl888,
    /// Debio-0932, second-generation oral inhibitor.
    Debio0932,
}

impl FromStr for DrugId {
    type Err = SimError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        DrugId::from_name(name).ok_or_else(|| SimError::UnknownDrug(name.to_string()))
    }
}

impl DrugId {
    pub const ALL: [DrugId; 3] = [DrugId::Aag17, DrugId::Xl888, DrugId::Debio0932];

    /// Resolves a catalog key (e.g. "17-AAG") to an identifier.
    pub fn from_name(name: &str) -> Option<DrugId> {
        match name {
            "17-AAG" => Some(DrugId::Aag17),
            "XL-888" => Some(DrugId::Xl888),
            "Debio-0932" => Some(DrugId::Debio0932),
            _ => None,
        }
    }

    /// Builds the pharmacokinetic record for this drug.
    pub fn parameters(self) -> DrugPk {
        match self {
            DrugId::Aag17 => DrugPk::new("17-AAG", 1.0, 4.0, 100.0),
            // IC50 is the midpoint of the reported 40-80 nM range.
            DrugId::Xl888 => DrugPk::new("XL-888", 1.0, 4.0, 60.0),
            DrugId::Debio0932 => DrugPk::new("Debio-0932", 1.0, 4.0, 50.0),
        }
    }
}

/// Pharmacokinetic constants of a single HSP90 inhibitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugPk {
    pub name: String,
    /// Time from administration to peak concentration, hours.
    pub peak_time_hours: f64,
    /// Plasma elimination half-life, hours.
    pub half_life_hours: f64,
    /// Half-maximal inhibitory concentration, nM.
    pub ic50_nm: f64,
}

impl DrugPk {
    pub fn new(name: &str, peak_time_hours: f64, half_life_hours: f64, ic50_nm: f64) -> Self {
        DrugPk {
            name: name.to_string(),
            peak_time_hours,
            half_life_hours,
            ic50_nm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_name_round_trips_through_from_name() {
        assert_eq!(DrugId::from_name("17-AAG"), Some(DrugId::Aag17));
        assert_eq!(DrugId::from_name("XL-888"), Some(DrugId::Xl888));
        assert_eq!(DrugId::from_name("Debio-0932"), Some(DrugId::Debio0932));
        assert_eq!(DrugId::from_name("Ganetespib"), None);
    }

    #[test]
    fn parsing_a_catalog_key_yields_its_identifier() {
        let id: DrugId = "XL-888".parse().unwrap();
        assert_eq!(id, DrugId::Xl888);
    }

    #[test]
    fn parsing_an_unknown_key_names_the_offender() {
        let result = "Ganetespib".parse::<DrugId>();
        assert_eq!(result, Err(SimError::UnknownDrug("Ganetespib".to_string())));
    }

    #[test]
    fn catalog_entries_carry_positive_pk_constants() {
        for id in DrugId::ALL {
            let pk = id.parameters();
            assert!(pk.peak_time_hours > 0.0, "{}", pk.name);
            assert!(pk.half_life_hours > 0.0, "{}", pk.name);
            assert!(pk.ic50_nm > 0.0, "{}", pk.name);
        }
    }

    #[test]
    fn potency_ordering_matches_reported_ic50s() {
        let aag = DrugId::Aag17.parameters().ic50_nm;
        let xl = DrugId::Xl888.parameters().ic50_nm;
        let debio = DrugId::Debio0932.parameters().ic50_nm;
        assert!(debio < xl && xl < aag);
    }
}
