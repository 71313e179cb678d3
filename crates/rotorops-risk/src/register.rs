//! Loading the risk register from a hazard store.

use rotorops_core::config::RiskConfig;
use rotorops_core::errors::{RecordError, RegisterError, RotoropsErrorCode};
use rotorops_core::events::types::{
    ErrorEvent, NotificationEvent, NotificationLevel, RecordRejectedEvent, RegisterLoadedEvent,
    RegisterSource,
};
use rotorops_core::events::EventDispatcher;
use rotorops_core::traits::HazardStore;
use rotorops_core::types::HazardRecord;

use crate::classifier::{filter_by_category, group_by_category, CategoryGroups};
use crate::matrix::RiskMatrix;
use crate::seed;
use crate::types::RiskView;

/// Title of the toast shown when the store cannot be read.
pub const FETCH_ERROR_TITLE: &str = "Error fetching risk data";

/// Hazards available for display, plus where they came from.
#[derive(Debug)]
pub struct RiskRegister {
    records: Vec<HazardRecord>,
    source: RegisterSource,
    rejected: Vec<RecordError>,
}

impl RiskRegister {
    /// Wrap an already-fetched set of records.
    pub fn from_records(records: Vec<HazardRecord>, source: RegisterSource) -> Self {
        Self {
            records,
            source,
            rejected: Vec::new(),
        }
    }

    /// Fetch the register from `store`, reporting through `dispatcher`.
    ///
    /// Rejected rows are skipped and announced one by one. If the fetch fails,
    /// the demo register is served when `config` allows it; otherwise the
    /// error is returned.
    pub fn load(
        store: &dyn HazardStore,
        dispatcher: &EventDispatcher,
        config: &RiskConfig,
    ) -> Result<Self, RegisterError> {
        let register = match store.fetch_hazards() {
            Ok(result) => {
                for error in &result.errors {
                    dispatcher.emit_record_rejected(&RecordRejectedEvent {
                        record_id: error.record_id().to_string(),
                        message: error.to_string(),
                    });
                    dispatcher.emit_error(&ErrorEvent {
                        message: error.to_string(),
                        error_code: error.error_code().to_string(),
                    });
                }
                Self {
                    records: result.data,
                    source: RegisterSource::Store,
                    rejected: result.errors,
                }
            }
            Err(e) => {
                dispatcher.emit_notification(&NotificationEvent {
                    level: NotificationLevel::Destructive,
                    title: FETCH_ERROR_TITLE.to_string(),
                    description: e.to_string(),
                });
                dispatcher.emit_error(&ErrorEvent {
                    message: e.to_string(),
                    error_code: e.error_code().to_string(),
                });
                if !config.effective_fallback_to_demo() {
                    return Err(RegisterError::from(e));
                }
                tracing::warn!(error = %e, "serving demo risk register");
                Self::from_records(seed::demo_register(), RegisterSource::Demo)
            }
        };

        dispatcher.emit_register_loaded(&RegisterLoadedEvent {
            source: register.source,
            record_count: register.records.len(),
            rejected_count: register.rejected.len(),
        });
        Ok(register)
    }

    pub fn records(&self) -> &[HazardRecord] {
        &self.records
    }

    pub fn source(&self) -> RegisterSource {
        self.source
    }

    /// Rows the store held but that failed validation.
    pub fn rejected(&self) -> &[RecordError] {
        &self.rejected
    }

    pub fn get(&self, id: &str) -> Option<&HazardRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn categories(&self) -> Vec<&str> {
        self.by_category().categories()
    }

    pub fn by_category(&self) -> CategoryGroups<'_> {
        group_by_category(&self.records)
    }

    /// The grid for `view`, restricted to `category` when given.
    pub fn matrix(&self, view: RiskView, category: Option<&str>) -> RiskMatrix<'_> {
        RiskMatrix::build(filter_by_category(&self.records, category), view)
    }

    /// The grid as first shown, using the configured view and category.
    pub fn initial_matrix(&self, config: &RiskConfig) -> RiskMatrix<'_> {
        let view = RiskView::from_residual_flag(config.effective_show_residual());
        self.matrix(view, config.effective_default_category())
    }
}
