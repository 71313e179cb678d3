//! Built-in demo register, served when the hazard store is unreachable.

use rotorops_core::types::{Control, HazardRecord, Rating};

struct Seed {
    id: &'static str,
    hazard: &'static str,
    description: &'static str,
    consequences: &'static [&'static str],
    inherent: (usize, usize),
    controls: &'static [(&'static str, &'static str)],
    residual: (usize, usize),
    responsible_person: &'static str,
    monitoring_method: &'static str,
    category: &'static str,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "risk-001",
        hazard: "Weather Deterioration",
        description: "Sudden degradation of visibility during monsoon season operations",
        consequences: &[
            "Forced landing in unsuitable terrain",
            "Spatial disorientation",
            "Controlled flight into terrain (CFIT)",
            "Passenger injuries",
        ],
        inherent: (4, 5),
        controls: &[
            ("control-001", "Conservative weather minimums above regulatory requirements"),
            ("control-002", "Extensive local weather knowledge training"),
            ("control-003", "Multiple weather information sources"),
            ("control-004", "Predetermined turn-back points and protocols"),
            ("control-005", "Weather radar equipment in all aircraft"),
        ],
        residual: (2, 5),
        responsible_person: "Director of Flight Operations",
        monitoring_method: "Weather-related incident reports, pilot feedback, flight data monitoring",
        category: "Weather",
    },
    Seed {
        id: "risk-002",
        hazard: "Bird Strike",
        description: "Collision with birds during low-altitude scenic flights",
        consequences: &[
            "Windshield penetration",
            "Engine damage or failure",
            "Control surface damage",
            "Forced landing",
        ],
        inherent: (4, 4),
        controls: &[
            ("control-006", "Bird hazard awareness in route planning"),
            ("control-007", "Avoidance of known bird concentration areas"),
            ("control-008", "Reduced airspeed in high-risk areas"),
            ("control-009", "Enhanced windshield specifications"),
        ],
        residual: (3, 3),
        responsible_person: "Chief Pilot",
        monitoring_method: "Bird strike reports, seasonal migration pattern updates",
        category: "Wildlife",
    },
    Seed {
        id: "risk-003",
        hazard: "Confined Area Operations",
        description: "Landing in confined areas with limited approach/departure paths",
        consequences: &[
            "Tail rotor strike",
            "Main rotor strike",
            "Dynamic rollover",
            "Brownout/whiteout conditions",
        ],
        inherent: (3, 5),
        controls: &[
            ("control-010", "Confined area operations training for all pilots"),
            ("control-011", "Pre-approved landing site database with hazard information"),
            ("control-012", "Ground reconnaissance procedures"),
            ("control-013", "Dual-pilot operations for new landing sites"),
            ("control-014", "Minimum approach/departure path requirements"),
        ],
        residual: (2, 4),
        responsible_person: "Chief Pilot",
        monitoring_method: "Landing site assessment reports, incident data tracking",
        category: "Landing Sites",
    },
    Seed {
        id: "risk-004",
        hazard: "Engine Failure",
        description: "Single engine failure during critical phases of flight",
        consequences: &[
            "Forced autorotation landing",
            "Aircraft damage",
            "Passenger injuries",
            "Fatal accident",
        ],
        inherent: (2, 5),
        controls: &[
            ("control-015", "Enhanced maintenance program exceeding manufacturer requirements"),
            ("control-016", "Regular emergency procedures training in simulator"),
            ("control-017", "Continuous flight path assessment training"),
            ("control-018", "Route planning to maximize autorotation landing options"),
            ("control-019", "Enhanced engine monitoring systems"),
        ],
        residual: (1, 5),
        responsible_person: "Director of Maintenance",
        monitoring_method: "Engine trend monitoring, borescope inspections, parts replacement tracking",
        category: "Mechanical",
    },
    Seed {
        id: "risk-005",
        hazard: "FOD Ingestion",
        description: "Foreign Object Debris ingestion during takeoff/landing at unprepared sites",
        consequences: &[
            "Engine damage",
            "Engine power loss",
            "Compressor stalls",
            "Forced landing",
        ],
        inherent: (3, 4),
        controls: &[
            ("control-020", "FOD inspection procedures for all landing sites"),
            ("control-021", "Particle separator systems on all aircraft"),
            ("control-022", "Pilot training on FOD avoidance techniques"),
            ("control-023", "Ground crew FOD awareness training"),
        ],
        residual: (2, 3),
        responsible_person: "Director of Maintenance",
        monitoring_method: "FOD incident reports, engine inspection findings",
        category: "Mechanical",
    },
    Seed {
        id: "risk-006",
        hazard: "Passenger Behavior",
        description: "Unsafe passenger behavior during flight operations",
        consequences: &[
            "Interference with flight controls",
            "Distraction of pilot",
            "Disruption of center of gravity",
            "Personal injuries",
        ],
        inherent: (3, 3),
        controls: &[
            ("control-024", "Comprehensive pre-flight passenger briefing"),
            ("control-025", "Passenger management training for pilots"),
            ("control-026", "Physical barriers to prevent access to controls"),
            ("control-027", "Clear and visible safety placards in multiple languages"),
        ],
        residual: (2, 2),
        responsible_person: "Chief Pilot",
        monitoring_method: "Passenger behavior incident reports, pilot feedback",
        category: "Passengers",
    },
    Seed {
        id: "risk-007",
        hazard: "Night Operations",
        description: "Operations during hours of darkness, particularly in areas with limited ground lighting",
        consequences: &[
            "Spatial disorientation",
            "Controlled flight into terrain",
            "Loss of situational awareness",
            "Landing in unsuitable areas",
        ],
        inherent: (3, 5),
        controls: &[
            ("control-028", "Enhanced night operations training beyond regulatory requirements"),
            ("control-029", "Night vision imaging systems (NVIS) for critical operations"),
            ("control-030", "Illuminated landing site equipment"),
            ("control-031", "Multi-crew operations for complex night missions"),
            ("control-032", "Conservative weather minimums for night operations"),
        ],
        residual: (2, 4),
        responsible_person: "Director of Flight Operations",
        monitoring_method: "Night operations tracking, incident reports, NVIS equipment checks",
        category: "Operations",
    },
    Seed {
        id: "risk-008",
        hazard: "Pilot Fatigue",
        description: "Pilot fatigue due to irregular scheduling, consecutive duty days, or circadian disruption",
        consequences: &[
            "Impaired decision making",
            "Reduced situational awareness",
            "Slower reaction times",
            "Procedural errors",
        ],
        inherent: (4, 4),
        controls: &[
            ("control-033", "Fatigue risk management system beyond regulatory requirements"),
            ("control-034", "Conservative duty time limitations"),
            ("control-035", "Fatigue awareness training for pilots and schedulers"),
            ("control-036", "Non-punitive fatigue reporting system"),
            ("control-037", "Bio-mathematical fatigue modeling for complex schedules"),
        ],
        residual: (2, 3),
        responsible_person: "Director of Flight Operations",
        monitoring_method: "Fatigue reports, duty time monitoring, sleep quality assessments",
        category: "Human Factors",
    },
    Seed {
        id: "risk-009",
        hazard: "Maintenance Error",
        description: "Critical maintenance error leading to in-flight system failure",
        consequences: &[
            "Aircraft system malfunction",
            "Control system failure",
            "Forced landing",
            "Aircraft damage or loss",
        ],
        inherent: (3, 5),
        controls: &[
            ("control-038", "Detailed task cards with verification steps"),
            ("control-039", "Independent inspection requirements for critical systems"),
            ("control-040", "Maintenance human factors training program"),
            ("control-041", "Non-punitive error reporting system"),
            ("control-042", "Maintenance quality assurance program"),
        ],
        residual: (1, 5),
        responsible_person: "Director of Maintenance",
        monitoring_method: "Maintenance error reports, quality assurance findings, test flight reports",
        category: "Maintenance",
    },
];

// Seed ratings are literals on the 1..=5 scale.
fn rating(value: usize) -> Rating {
    Rating::ALL[value - 1]
}

/// The demo register, in register order.
pub fn demo_register() -> Vec<HazardRecord> {
    SEEDS
        .iter()
        .map(|s| HazardRecord {
            id: s.id.to_string(),
            hazard: s.hazard.to_string(),
            description: s.description.to_string(),
            consequences: s.consequences.iter().map(|c| c.to_string()).collect(),
            inherent_likelihood: rating(s.inherent.0),
            inherent_severity: rating(s.inherent.1),
            residual_likelihood: rating(s.residual.0),
            residual_severity: rating(s.residual.1),
            controls: s
                .controls
                .iter()
                .map(|(id, description)| Control {
                    id: id.to_string(),
                    description: description.to_string(),
                })
                .collect(),
            responsible_person: s.responsible_person.to_string(),
            monitoring_method: s.monitoring_method.to_string(),
            category: s.category.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_ids_are_unique_and_ordered() {
        let records = demo_register();
        assert_eq!(records.len(), 9);
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        let expected: Vec<String> = (1..=9).map(|n| format!("risk-{n:03}")).collect();
        assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn residual_never_exceeds_inherent() {
        for r in demo_register() {
            let inherent = r.inherent_likelihood.get() * r.inherent_severity.get();
            let residual = r.residual_likelihood.get() * r.residual_severity.get();
            assert!(residual <= inherent, "{}", r.id);
        }
    }
}
