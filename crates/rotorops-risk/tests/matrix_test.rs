//! Risk matrix layout, membership, and detail labels.

mod common;

use common::{hazard, ids, rating};
use rotorops_core::types::Rating;
use rotorops_risk::matrix::{legend, BandCounts};
use rotorops_risk::seed::demo_register;
use rotorops_risk::{cell_members, HazardDetail, RiskBand, RiskMatrix, RiskView};

#[test]
fn test_grid_layout_top_row_is_almost_certain() {
    let records = demo_register();
    let matrix = RiskMatrix::build(&records, RiskView::Inherent);
    assert_eq!(matrix.cells().len(), 25);

    let rows: Vec<_> = matrix.rows().collect();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].0.get(), 5);
    assert_eq!(rows[0].1, "Almost Certain");
    assert_eq!(rows[4].1, "Rare");

    let top_left = &rows[0].2[0];
    assert_eq!((top_left.likelihood.get(), top_left.severity.get()), (5, 1));
    assert_eq!(top_left.assessment.score, 5);
    let top_right = &rows[0].2[4];
    assert_eq!(top_right.assessment.band, RiskBand::Extreme);

    let axis: Vec<&str> = matrix.severity_axis().iter().map(|(_, n)| *n).collect();
    assert_eq!(axis, vec!["Negligible", "Minor", "Moderate", "Major", "Catastrophic"]);
}

#[test]
fn test_cells_agree_with_cell_members() {
    let records = demo_register();
    for view in [RiskView::Inherent, RiskView::Residual] {
        let matrix = RiskMatrix::build(&records, view);
        for l in Rating::ALL {
            for s in Rating::ALL {
                let expected = cell_members(&records, l, s, view.is_residual());
                let cell = matrix.cell(l, s);
                assert_eq!((cell.likelihood, cell.severity), (l, s));
                assert_eq!(cell.members.to_vec(), expected, "{view:?} ({l},{s})");
            }
        }
        assert_eq!(matrix.hazard_count(), records.len());
    }
}

#[test]
fn test_toggling_view_moves_hazards() {
    let records = vec![hazard("h", "Weather", (4, 5), (2, 5))];
    let inherent = RiskMatrix::build(&records, RiskView::Inherent);
    let residual = RiskMatrix::build(&records, inherent.view().toggled());

    assert_eq!(residual.view(), RiskView::Residual);
    assert_eq!(ids(inherent.cell(rating(4), rating(5)).members.iter().copied()), vec!["h"]);
    assert!(inherent.cell(rating(2), rating(5)).is_empty());
    assert_eq!(ids(residual.cell(rating(2), rating(5)).members.iter().copied()), vec!["h"]);
    assert!(residual.cell(rating(4), rating(5)).is_empty());
}

#[test]
fn test_band_counts_for_demo_register() {
    let records = demo_register();
    let inherent = RiskMatrix::build(&records, RiskView::Inherent).band_counts();
    assert_eq!(
        inherent,
        BandCounts {
            low: 0,
            medium: 3,
            high: 5,
            extreme: 1,
        }
    );
    let residual = RiskMatrix::build(&records, RiskView::Residual).band_counts();
    assert_eq!(
        residual,
        BandCounts {
            low: 3,
            medium: 6,
            high: 0,
            extreme: 0,
        }
    );
    assert_eq!(residual.total(), 9);
    assert_eq!(residual.get(RiskBand::Medium), 6);
}

#[test]
fn test_titles_and_captions() {
    let empty: Vec<rotorops_core::types::HazardRecord> = Vec::new();
    let m = RiskMatrix::build(&empty, RiskView::from_residual_flag(false));
    assert_eq!(m.title(), "Inherent Risk Matrix (Before Controls)");
    assert_eq!(m.view().caption(), "Showing Inherent Risk");
    assert_eq!(m.hazard_count(), 0);
    assert!(m.cells().iter().all(|c| c.is_empty()));
    assert_eq!(RiskView::Residual.title(), "Residual Risk Matrix (After Controls)");
}

#[test]
fn test_legend() {
    let labels: Vec<String> = legend().iter().map(|e| e.label()).collect();
    assert_eq!(
        labels,
        vec!["Low (1-5)", "Medium (6-12)", "High (13-19)", "Extreme (20-25)"]
    );
}

#[test]
fn test_detail_labels_are_derived() {
    let records = demo_register();
    let engine = records.iter().find(|r| r.id == "risk-004").unwrap();
    let detail = HazardDetail::of(engine);
    // (2,5) = 10 and (1,5) = 5
    assert_eq!(detail.inherent_label(), "Medium (10)");
    assert_eq!(detail.residual_label(), "Low (5)");
    assert_eq!(detail.score_reduction(), 5);

    let weather = HazardDetail::of(&records[0]);
    assert_eq!(weather.inherent_label(), "Extreme (20)");
    assert_eq!(weather.residual_label(), "Medium (10)");
}
