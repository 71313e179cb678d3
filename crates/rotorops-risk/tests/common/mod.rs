//! Shared record builders for risk tests.

#![allow(dead_code)]

use rotorops_core::types::{Control, HazardRecord, Rating};

pub fn rating(v: u8) -> Rating {
    Rating::new(v).unwrap()
}

pub fn hazard(id: &str, category: &str, inherent: (u8, u8), residual: (u8, u8)) -> HazardRecord {
    HazardRecord {
        id: id.to_string(),
        hazard: format!("Hazard {id}"),
        description: String::new(),
        consequences: Vec::new(),
        inherent_likelihood: rating(inherent.0),
        inherent_severity: rating(inherent.1),
        residual_likelihood: rating(residual.0),
        residual_severity: rating(residual.1),
        controls: vec![Control {
            id: format!("{id}-c"),
            description: "control".to_string(),
        }],
        responsible_person: "Chief Pilot".to_string(),
        monitoring_method: "Reports".to_string(),
        category: category.to_string(),
    }
}

pub fn ids<'a>(records: impl IntoIterator<Item = &'a HazardRecord>) -> Vec<&'a str> {
    records.into_iter().map(|r| r.id.as_str()).collect()
}
