//! Property-based tests for the classifier.

mod common;

use proptest::prelude::*;

use common::hazard;
use rotorops_core::types::{HazardRecord, Rating};
use rotorops_risk::{cell_members, classify, group_by_category, RiskBand, RiskMatrix, RiskView};

fn any_rating() -> impl Strategy<Value = Rating> {
    (1u8..=5).prop_map(|v| Rating::new(v).unwrap())
}

fn any_record() -> impl Strategy<Value = HazardRecord> {
    (
        0u32..10_000,
        prop::sample::select(vec!["Weather", "Wildlife", "Mechanical", "Passengers"]),
        (1u8..=5, 1u8..=5),
        (1u8..=5, 1u8..=5),
    )
        .prop_map(|(n, category, inherent, residual)| {
            hazard(&format!("h{n}"), category, inherent, residual)
        })
}

proptest! {
    #[test]
    fn prop_score_and_band(l in any_rating(), s in any_rating()) {
        let a = classify(l, s);
        prop_assert_eq!(a.score, l.get() * s.get());
        prop_assert!((1..=25).contains(&a.score));
        prop_assert!(a.band.score_range().contains(&a.score));
        prop_assert_eq!(a.band, RiskBand::from_score(a.score));
    }

    #[test]
    fn prop_cell_members_is_a_stable_filter(
        records in prop::collection::vec(any_record(), 0..40),
        l in any_rating(),
        s in any_rating(),
        use_residual in any::<bool>(),
    ) {
        let members = cell_members(&records, l, s, use_residual);
        prop_assert_eq!(&members, &cell_members(&records, l, s, use_residual));

        // Members appear in input order: their positions strictly increase.
        let mut last = None;
        for m in &members {
            let pos = records.iter().position(|r| std::ptr::eq(r, *m)).unwrap();
            prop_assert!(last.map_or(true, |p| pos > p));
            last = Some(pos);
            let pair = RiskView::from_residual_flag(use_residual).ratings(m);
            prop_assert_eq!((pair.likelihood, pair.severity), (l, s));
        }
    }

    #[test]
    fn prop_matrix_partitions_records(
        records in prop::collection::vec(any_record(), 0..40),
        use_residual in any::<bool>(),
    ) {
        let matrix = RiskMatrix::build(&records, RiskView::from_residual_flag(use_residual));
        prop_assert_eq!(matrix.hazard_count(), records.len());
        prop_assert_eq!(matrix.band_counts().total(), records.len());
    }

    #[test]
    fn prop_group_by_category_partitions(records in prop::collection::vec(any_record(), 0..40)) {
        let groups = group_by_category(&records);
        let mut seen = 0;
        for (category, members) in groups.iter() {
            seen += members.len();
            let expected: Vec<&HazardRecord> =
                records.iter().filter(|r| r.category == category).collect();
            prop_assert_eq!(members.to_vec(), expected);
        }
        prop_assert_eq!(seen, records.len());

        let mut first_seen: Vec<&str> = Vec::new();
        for r in &records {
            if !first_seen.contains(&r.category.as_str()) {
                first_seen.push(&r.category);
            }
        }
        prop_assert_eq!(groups.categories(), first_seen);
    }
}
