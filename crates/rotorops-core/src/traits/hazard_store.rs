//! HazardStore trait: data access for the `risk_assessments` collection.
//!
//! Hosts inject an implementation instead of reaching for a shared client.
//! Implementations validate rows as they are read; rows that fail validation
//! are reported in the returned `LoadResult` rather than failing the fetch.

use crate::errors::{LoadResult, StorageError};
use crate::types::HazardRecord;

pub trait HazardStore: Send + Sync {
    /// Fetch every hazard in stable store order.
    fn fetch_hazards(&self) -> Result<LoadResult<Vec<HazardRecord>>, StorageError>;

    /// Fetch one hazard by id.
    ///
    /// `Ok(None)` means no row has that id. A row that exists but fails
    /// validation is `StorageError::InvalidRecord`.
    fn get_hazard(&self, id: &str) -> Result<Option<HazardRecord>, StorageError>;

    /// Insert a hazard, or replace the one with the same id.
    fn upsert_hazard(&self, record: &HazardRecord) -> Result<(), StorageError>;

    /// Delete a hazard. Returns whether a row was removed.
    fn delete_hazard(&self, id: &str) -> Result<bool, StorageError>;

    /// Cheap probe of whether the store answers queries.
    fn check_connection(&self) -> bool;
}
