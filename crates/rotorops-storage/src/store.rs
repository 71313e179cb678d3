//! SqliteHazardStore: `HazardStore` over a `DatabaseManager`.

use std::path::Path;

use rotorops_core::config::StoreConfig;
use rotorops_core::errors::{LoadResult, StorageError};
use rotorops_core::traits::HazardStore;
use rotorops_core::types::HazardRecord;

use crate::connection::DatabaseManager;
use crate::queries::risk_assessments::{self, RiskAssessmentRow};

pub struct SqliteHazardStore {
    db: DatabaseManager,
}

impl SqliteHazardStore {
    pub fn new(db: DatabaseManager) -> Self {
        Self { db }
    }

    /// Open a file-backed store.
    pub fn open(path: &Path, config: &StoreConfig) -> Result<Self, StorageError> {
        Ok(Self::new(DatabaseManager::open(path, config)?))
    }

    /// Open an in-memory store.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self::new(DatabaseManager::open_in_memory()?))
    }

    /// Insert or replace many records in one transaction.
    pub fn upsert_all(&self, records: &[HazardRecord]) -> Result<(), StorageError> {
        let rows = records
            .iter()
            .map(RiskAssessmentRow::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        self.db
            .with_conn(|conn| risk_assessments::upsert_batch(conn, &rows))?;
        tracing::debug!(count = rows.len(), "hazards upserted");
        Ok(())
    }

    /// Write a raw row without validation, as another backend client might.
    pub fn upsert_row(&self, row: &RiskAssessmentRow) -> Result<(), StorageError> {
        self.db.with_conn(|conn| risk_assessments::upsert(conn, row))
    }

    /// Hazards in one category, validated.
    pub fn fetch_category(
        &self,
        category: &str,
    ) -> Result<LoadResult<Vec<HazardRecord>>, StorageError> {
        let rows = self
            .db
            .with_conn(|conn| risk_assessments::query_by_category(conn, category))?;
        Ok(ingest(rows))
    }
}

impl HazardStore for SqliteHazardStore {
    fn fetch_hazards(&self) -> Result<LoadResult<Vec<HazardRecord>>, StorageError> {
        let rows = self.db.with_conn(risk_assessments::query_all)?;
        let result = ingest(rows);
        tracing::debug!(
            records = result.data.len(),
            rejected = result.error_count(),
            "hazards fetched"
        );
        Ok(result)
    }

    fn get_hazard(&self, id: &str) -> Result<Option<HazardRecord>, StorageError> {
        let row = self
            .db
            .with_conn(|conn| risk_assessments::query_by_id(conn, id))?;
        match row {
            None => Ok(None),
            Some(row) => row.into_record().map(Some).map_err(|e| {
                tracing::warn!(id = %e.record_id(), error = %e, "stored hazard failed validation");
                StorageError::from(e)
            }),
        }
    }

    fn upsert_hazard(&self, record: &HazardRecord) -> Result<(), StorageError> {
        let row = RiskAssessmentRow::from_record(record)?;
        self.db.with_conn(|conn| risk_assessments::upsert(conn, &row))
    }

    fn delete_hazard(&self, id: &str) -> Result<bool, StorageError> {
        let removed = self
            .db
            .with_conn(|conn| risk_assessments::delete(conn, id))?;
        Ok(removed > 0)
    }

    fn check_connection(&self) -> bool {
        match self.db.with_conn(risk_assessments::count) {
            Ok(_) => true,
            Err(e) => {
                tracing::error!(error = %e, "hazard store connection check failed");
                false
            }
        }
    }
}

/// Validate rows, keeping the good ones in order and collecting the rest.
fn ingest(rows: Vec<RiskAssessmentRow>) -> LoadResult<Vec<HazardRecord>> {
    let mut result = LoadResult::new(Vec::with_capacity(rows.len()));
    for row in rows {
        match row.into_record() {
            Ok(record) => result.data.push(record),
            Err(e) => {
                tracing::warn!(id = %e.record_id(), error = %e, "rejected hazard row");
                result.add_error(e);
            }
        }
    }
    result
}
