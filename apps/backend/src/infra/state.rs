use crate::config::db::DbSettings;
use crate::domain::SampleRange;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
#[derive(Default)]
pub struct StateBuilder {
    db_settings: Option<DbSettings>,
    sample_range: SampleRange,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_db(mut self, settings: DbSettings) -> Self {
        self.db_settings = Some(settings);
        self
    }

    pub fn with_sample_range(mut self, sample_range: SampleRange) -> Self {
        self.sample_range = sample_range;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        if let Some(settings) = self.db_settings {
            // single entrypoint: connect + migrate
            let conn = bootstrap_db(&settings).await?;
            Ok(AppState::new(conn, self.sample_range))
        } else {
            Ok(AppState::without_db(self.sample_range))
        }
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
