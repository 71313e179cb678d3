//! Queries for the risk_assessments table.

use rotorops_core::errors::{RecordError, StorageError};
use rotorops_core::types::{Control, HazardRecord, Rating};
use rusqlite::{params, Connection, OptionalExtension};

/// A risk_assessments row exactly as stored, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessmentRow {
    pub id: String,
    pub hazard: String,
    pub description: String,
    pub consequences_json: String,
    pub inherent_likelihood: i64,
    pub inherent_severity: i64,
    pub residual_likelihood: i64,
    pub residual_severity: i64,
    pub controls_json: String,
    pub responsible_person: String,
    pub monitoring_method: String,
    pub category: String,
}

impl RiskAssessmentRow {
    /// Flatten a record into its stored form.
    pub fn from_record(record: &HazardRecord) -> Result<Self, StorageError> {
        let consequences_json =
            serde_json::to_string(&record.consequences).map_err(|e| StorageError::Serialization {
                column: "consequences_json".to_string(),
                message: e.to_string(),
            })?;
        let controls_json =
            serde_json::to_string(&record.controls).map_err(|e| StorageError::Serialization {
                column: "controls_json".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self {
            id: record.id.clone(),
            hazard: record.hazard.clone(),
            description: record.description.clone(),
            consequences_json,
            inherent_likelihood: i64::from(record.inherent_likelihood.get()),
            inherent_severity: i64::from(record.inherent_severity.get()),
            residual_likelihood: i64::from(record.residual_likelihood.get()),
            residual_severity: i64::from(record.residual_severity.get()),
            controls_json,
            responsible_person: record.responsible_person.clone(),
            monitoring_method: record.monitoring_method.clone(),
            category: record.category.clone(),
        })
    }

    /// Validate the row into a `HazardRecord`.
    ///
    /// Ratings outside 1..=5 and malformed JSON columns are rejected.
    pub fn into_record(self) -> Result<HazardRecord, RecordError> {
        let rating = |field: &'static str, value: i64| {
            Rating::try_from(value).map_err(|source| RecordError::InvalidRating {
                id: self.id.clone(),
                field,
                source,
            })
        };
        let inherent_likelihood = rating("inherentLikelihood", self.inherent_likelihood)?;
        let inherent_severity = rating("inherentSeverity", self.inherent_severity)?;
        let residual_likelihood = rating("residualLikelihood", self.residual_likelihood)?;
        let residual_severity = rating("residualSeverity", self.residual_severity)?;

        let consequences: Vec<String> =
            serde_json::from_str(&self.consequences_json).map_err(|e| {
                RecordError::InvalidColumn {
                    id: self.id.clone(),
                    column: "consequences",
                    message: e.to_string(),
                }
            })?;
        let controls: Vec<Control> =
            serde_json::from_str(&self.controls_json).map_err(|e| RecordError::InvalidColumn {
                id: self.id.clone(),
                column: "controls",
                message: e.to_string(),
            })?;

        Ok(HazardRecord {
            id: self.id,
            hazard: self.hazard,
            description: self.description,
            consequences,
            inherent_likelihood,
            inherent_severity,
            residual_likelihood,
            residual_severity,
            controls,
            responsible_person: self.responsible_person,
            monitoring_method: self.monitoring_method,
            category: self.category,
        })
    }
}

const SELECT_COLUMNS: &str = "id, hazard, description, consequences_json,
    inherent_likelihood, inherent_severity, residual_likelihood, residual_severity,
    controls_json, responsible_person, monitoring_method, category";

/// Insert a row, or update the row with the same id in place.
/// Updating keeps the row's original position in `query_all`.
pub fn upsert(conn: &Connection, row: &RiskAssessmentRow) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO risk_assessments (id, hazard, description, consequences_json,
            inherent_likelihood, inherent_severity, residual_likelihood, residual_severity,
            controls_json, responsible_person, monitoring_method, category)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
         ON CONFLICT(id) DO UPDATE SET
            hazard = excluded.hazard,
            description = excluded.description,
            consequences_json = excluded.consequences_json,
            inherent_likelihood = excluded.inherent_likelihood,
            inherent_severity = excluded.inherent_severity,
            residual_likelihood = excluded.residual_likelihood,
            residual_severity = excluded.residual_severity,
            controls_json = excluded.controls_json,
            responsible_person = excluded.responsible_person,
            monitoring_method = excluded.monitoring_method,
            category = excluded.category,
            updated_at = unixepoch()",
        params![
            row.id,
            row.hazard,
            row.description,
            row.consequences_json,
            row.inherent_likelihood,
            row.inherent_severity,
            row.residual_likelihood,
            row.residual_severity,
            row.controls_json,
            row.responsible_person,
            row.monitoring_method,
            row.category,
        ],
    )
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    Ok(())
}

/// Upsert a batch of rows in one transaction.
pub fn upsert_batch(conn: &Connection, rows: &[RiskAssessmentRow]) -> Result<(), StorageError> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    for row in rows {
        upsert(&tx, row)?;
    }
    tx.commit()
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// All rows in insertion order.
pub fn query_all(conn: &Connection) -> Result<Vec<RiskAssessmentRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "SELECT {SELECT_COLUMNS} FROM risk_assessments ORDER BY seq ASC"
        ))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let rows = stmt
        .query_map([], map_row)
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// One row by id.
pub fn query_by_id(conn: &Connection, id: &str) -> Result<Option<RiskAssessmentRow>, StorageError> {
    conn.query_row(
        &format!("SELECT {SELECT_COLUMNS} FROM risk_assessments WHERE id = ?1"),
        params![id],
        map_row,
    )
    .optional()
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Rows in one category, insertion order.
pub fn query_by_category(
    conn: &Connection,
    category: &str,
) -> Result<Vec<RiskAssessmentRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "SELECT {SELECT_COLUMNS} FROM risk_assessments WHERE category = ?1 ORDER BY seq ASC"
        ))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let rows = stmt
        .query_map(params![category], map_row)
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Delete by id. Returns the number of rows removed.
pub fn delete(conn: &Connection, id: &str) -> Result<usize, StorageError> {
    conn.execute("DELETE FROM risk_assessments WHERE id = ?1", params![id])
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Count all rows.
pub fn count(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM risk_assessments", [], |row| row.get(0))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

fn map_row(row: &rusqlite::Row) -> rusqlite::Result<RiskAssessmentRow> {
    Ok(RiskAssessmentRow {
        id: row.get(0)?,
        hazard: row.get(1)?,
        description: row.get(2)?,
        consequences_json: row.get(3)?,
        inherent_likelihood: row.get(4)?,
        inherent_severity: row.get(5)?,
        residual_likelihood: row.get(6)?,
        residual_severity: row.get(7)?,
        controls_json: row.get(8)?,
        responsible_person: row.get(9)?,
        monitoring_method: row.get(10)?,
        category: row.get(11)?,
    })
}
