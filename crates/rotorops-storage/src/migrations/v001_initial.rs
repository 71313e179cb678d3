//! V001: risk_assessments.
//!
//! Ratings are plain INTEGER columns without CHECK constraints: rows written
//! by other clients of the shared backend may hold anything, and they are
//! validated when read.

pub const MIGRATION_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS risk_assessments (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    id TEXT NOT NULL UNIQUE,
    hazard TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    consequences_json TEXT NOT NULL DEFAULT '[]',
    inherent_likelihood INTEGER NOT NULL,
    inherent_severity INTEGER NOT NULL,
    residual_likelihood INTEGER NOT NULL,
    residual_severity INTEGER NOT NULL,
    controls_json TEXT NOT NULL DEFAULT '[]',
    responsible_person TEXT NOT NULL DEFAULT '',
    monitoring_method TEXT NOT NULL DEFAULT '',
    category TEXT NOT NULL,
    updated_at INTEGER NOT NULL DEFAULT (unixepoch())
) STRICT;

CREATE INDEX IF NOT EXISTS idx_risk_assessments_category
    ON risk_assessments(category);
"#;
