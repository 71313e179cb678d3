//! Connection management: one serialized connection per database.

pub mod pragmas;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rotorops_core::config::StoreConfig;
use rotorops_core::errors::StorageError;
use rusqlite::Connection;

use self::pragmas::apply_pragmas;
use crate::migrations;

/// Owns the SQLite connection backing a hazard store.
///
/// The register is small and read in one pass per render, so a single
/// mutex-guarded connection serves both reads and writes.
pub struct DatabaseManager {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl DatabaseManager {
    /// Open a database at the given path, apply pragmas, run migrations.
    pub fn open(path: &Path, config: &StoreConfig) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| StorageError::Unavailable {
                    message: format!("cannot create {}: {e}", parent.display()),
                })?;
            }
        }
        let conn = Connection::open(path).map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;
        Self::init(conn, Some(path.to_path_buf()), config)
    }

    /// Open an in-memory database.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;
        Self::init(conn, None, &StoreConfig::default())
    }

    fn init(
        conn: Connection,
        path: Option<PathBuf>,
        config: &StoreConfig,
    ) -> Result<Self, StorageError> {
        apply_pragmas(&conn, config.effective_busy_timeout_ms())?;
        migrations::run_migrations(&conn)?;
        tracing::debug!(path = ?path, "database opened");
        Ok(Self {
            conn: Mutex::new(conn),
            path,
        })
    }

    /// Run `f` with exclusive access to the connection.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let guard = self.conn.lock().map_err(|_| StorageError::SqliteError {
            message: "connection lock poisoned".to_string(),
        })?;
        f(&guard)
    }

    /// Get the database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
