use bingo::adapters::games_sea::{self, GameCreate};
use bingo::config::{DbKind, DbSettings};
use bingo::infra::db::bootstrap_db;

#[tokio::test]
async fn file_database_is_created_migrated_and_persistent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("bingo_test.db");
    let settings = DbSettings::sqlite_file(&path);
    assert_eq!(settings.kind, DbKind::SqliteFile);

    let conn = bootstrap_db(&settings).await.unwrap();
    assert!(path.exists());
    games_sea::create_game(&conn, GameCreate::new().with_title("Persisted"))
        .await
        .unwrap();
    conn.close().await.unwrap();

    // Second bootstrap re-runs migrations as a no-op and sees the row.
    let conn = bootstrap_db(&settings).await.unwrap();
    let all = games_sea::list_all(&conn).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "Persisted");
    assert_eq!(
        migration::count_applied_migrations(&conn).await.unwrap(),
        1
    );
    conn.close().await.unwrap();
}
