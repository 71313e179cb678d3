//! JSON reporter output.

use rotorops_risk::reporters::{JsonReporter, Reporter};
use rotorops_risk::seed::demo_register;
use rotorops_risk::{group_by_category, RiskMatrix, RiskView};

#[test]
fn test_json_shape() {
    let records = demo_register();
    let matrix = RiskMatrix::build(&records, RiskView::Residual);
    let categories = group_by_category(&records).categories();

    let reporter = JsonReporter;
    assert_eq!(reporter.name(), "json");
    let text = reporter.generate(&matrix, &categories).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["view"], "residual");
    assert_eq!(value["title"], "Residual Risk Matrix (After Controls)");
    assert_eq!(value["hazard_count"], 9);
    assert_eq!(value["band_counts"]["medium"], 6);
    assert_eq!(value["rows"].as_array().unwrap().len(), 5);
    assert_eq!(value["rows"][0]["label"], "Almost Certain");
    assert_eq!(value["severity_axis"][4]["label"], "Catastrophic");
    assert_eq!(value["legend"][3]["label"], "Extreme (20-25)");
    assert_eq!(value["categories"][0], "Weather");

    // Residual (2,5): row index 3 (likelihood 2), column index 4.
    let cell = &value["rows"][3]["cells"][4];
    assert_eq!(cell["score"], 10);
    assert_eq!(cell["band"], "Medium");
    assert_eq!(cell["hazards"][0]["id"], "risk-001");
}
