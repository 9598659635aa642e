use sea_orm::DatabaseConnection;

use crate::domain::SampleRange;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    db: Option<DatabaseConnection>,
    /// Value domains used when dealing cards and drawing calls
    pub sample_range: SampleRange,
}

impl AppState {
    pub fn new(db: DatabaseConnection, sample_range: SampleRange) -> Self {
        Self {
            db: Some(db),
            sample_range,
        }
    }

    /// State with no database attached; every data route answers 503.
    pub fn without_db(sample_range: SampleRange) -> Self {
        Self {
            db: None,
            sample_range,
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
