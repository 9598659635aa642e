use bingo::config::DbSettings;
use bingo::domain::SampleRange;
use bingo::infra::state::build_state;
use bingo::state::app_state::AppState;
use sea_orm::DatabaseConnection;

/// Fresh, migrated in-memory database with the default sample range.
pub async fn build_test_state() -> AppState {
    build_test_state_with_range(SampleRange::default()).await
}

pub async fn build_test_state_with_range(range: SampleRange) -> AppState {
    build_state()
        .with_db(DbSettings::sqlite_memory())
        .with_sample_range(range)
        .build()
        .await
        .expect("in-memory state")
}

pub fn db(state: &AppState) -> &DatabaseConnection {
    state.db().expect("state has a database")
}
