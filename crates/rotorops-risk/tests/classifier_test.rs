//! Classification, cell membership, and category grouping.

mod common;

use common::{hazard, ids, rating};
use rotorops_core::types::Rating;
use rotorops_risk::seed::demo_register;
use rotorops_risk::{cell_members, classify, filter_by_category, group_by_category, RiskBand};

#[test]
fn test_score_is_product_for_every_cell() {
    for l in Rating::ALL {
        for s in Rating::ALL {
            let a = classify(l, s);
            assert_eq!(a.score, l.get() * s.get());
            assert!(RiskBand::ALL.contains(&a.band));
        }
    }
}

#[test]
fn test_band_table_on_real_cells() {
    // (likelihood, severity, band)
    let cases = [
        (1, 5, RiskBand::Low),     // 5
        (2, 3, RiskBand::Medium),  // 6
        (3, 4, RiskBand::Medium),  // 12
        (4, 4, RiskBand::High),    // 16
        (3, 5, RiskBand::High),    // 15
        (4, 5, RiskBand::Extreme), // 20
        (5, 5, RiskBand::Extreme), // 25
    ];
    for (l, s, band) in cases {
        assert_eq!(classify(rating(l), rating(s)).band, band, "({l},{s})");
    }
}

#[test]
fn test_weather_deterioration_scenario() {
    let records = demo_register();
    let weather = &records[0];
    assert_eq!(weather.hazard, "Weather Deterioration");

    let inherent = classify(weather.inherent_likelihood, weather.inherent_severity);
    assert_eq!((inherent.score, inherent.band), (20, RiskBand::Extreme));
    let residual = classify(weather.residual_likelihood, weather.residual_severity);
    assert_eq!((residual.score, residual.band), (10, RiskBand::Medium));

    assert!(ids(cell_members(&records, rating(4), rating(5), false)).contains(&"risk-001"));
    assert!(ids(cell_members(&records, rating(2), rating(5), true)).contains(&"risk-001"));
    assert!(!ids(cell_members(&records, rating(4), rating(5), true)).contains(&"risk-001"));
    assert!(!ids(cell_members(&records, rating(2), rating(5), false)).contains(&"risk-001"));
}

#[test]
fn test_cell_members_is_stable_and_idempotent() {
    let records = vec![
        hazard("c", "Weather", (3, 3), (1, 1)),
        hazard("a", "Weather", (3, 3), (2, 2)),
        hazard("x", "Weather", (2, 3), (1, 1)),
        hazard("b", "Mechanical", (3, 3), (1, 1)),
    ];
    let first = cell_members(&records, rating(3), rating(3), false);
    let second = cell_members(&records, rating(3), rating(3), false);
    assert_eq!(ids(first.iter().copied()), vec!["c", "a", "b"]);
    assert_eq!(first, second);

    assert_eq!(
        ids(cell_members(&records, rating(1), rating(1), true)),
        vec!["c", "x", "b"]
    );
}

#[test]
fn test_empty_input_and_empty_cells() {
    for l in Rating::ALL {
        for s in Rating::ALL {
            assert!(cell_members(&[], l, s, false).is_empty());
            assert!(cell_members(&[], l, s, true).is_empty());
        }
    }
    let records = demo_register();
    assert!(cell_members(&records, rating(5), rating(1), false).is_empty());
}

#[test]
fn test_every_record_lands_in_exactly_one_cell_per_view() {
    let records = demo_register();
    for use_residual in [false, true] {
        let mut total = 0;
        for l in Rating::ALL {
            for s in Rating::ALL {
                total += cell_members(&records, l, s, use_residual).len();
            }
        }
        assert_eq!(total, records.len());
    }
}

#[test]
fn test_group_by_category_first_seen_order() {
    let records = demo_register();
    let groups = group_by_category(&records);
    assert_eq!(
        groups.categories(),
        vec![
            "Weather",
            "Wildlife",
            "Landing Sites",
            "Mechanical",
            "Passengers",
            "Operations",
            "Human Factors",
            "Maintenance",
        ]
    );
    assert_eq!(
        ids(groups.get("Mechanical").unwrap().iter().copied()),
        vec!["risk-004", "risk-005"]
    );
    let total: usize = groups.iter().map(|(_, rs)| rs.len()).sum();
    assert_eq!(total, records.len());
}

#[test]
fn test_group_by_category_interleaved() {
    let records = vec![
        hazard("1", "B", (1, 1), (1, 1)),
        hazard("2", "A", (1, 1), (1, 1)),
        hazard("3", "B", (1, 1), (1, 1)),
        hazard("4", "A", (1, 1), (1, 1)),
        hazard("5", "C", (1, 1), (1, 1)),
    ];
    let groups = group_by_category(&records);
    assert_eq!(groups.categories(), vec!["B", "A", "C"]);
    assert_eq!(groups.len(), 3);
    assert_eq!(ids(groups.get("B").unwrap().iter().copied()), vec!["1", "3"]);
    assert_eq!(ids(groups.get("A").unwrap().iter().copied()), vec!["2", "4"]);
    assert!(groups.get("D").is_none());
}

#[test]
fn test_filter_by_category() {
    let records = demo_register();
    assert_eq!(filter_by_category(&records, None).len(), records.len());
    assert_eq!(
        ids(filter_by_category(&records, Some("Mechanical"))),
        vec!["risk-004", "risk-005"]
    );
    assert!(filter_by_category(&records, Some("Fleet")).is_empty());
}
