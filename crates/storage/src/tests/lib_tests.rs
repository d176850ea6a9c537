use super::*;

#[tokio::test]
async fn health_check_succeeds_for_live_pool() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage.health_check().await.expect("health check");
}

#[tokio::test]
async fn missing_key_reads_as_none() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    assert_eq!(storage.get_item("absent").await.expect("read"), None);
    assert_eq!(storage.session_token().await.expect("read"), None);
}

#[tokio::test]
async fn set_item_overwrites_previous_value() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage.set_item("theme", "dark").await.expect("write");
    storage.set_item("theme", "light").await.expect("overwrite");
    assert_eq!(
        storage.get_item("theme").await.expect("read").as_deref(),
        Some("light")
    );
}

#[tokio::test]
async fn session_token_round_trips_under_its_key() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage.store_session_token("tok-1").await.expect("store");

    assert_eq!(
        storage.get_item(SESSION_TOKEN_KEY).await.expect("read").as_deref(),
        Some("tok-1")
    );
    assert!(storage
        .session_token_updated_at()
        .await
        .expect("timestamp")
        .is_some());

    assert!(storage.clear_session_token().await.expect("clear"));
    assert!(!storage.clear_session_token().await.expect("clear twice"));
    assert_eq!(storage.session_token().await.expect("read"), None);
}

#[tokio::test]
async fn values_survive_reopening_the_database() {
    let temp_root = tempfile::tempdir().expect("tempdir");
    let db_path = temp_root.path().join("nested").join("client.db");
    let database_url = format!("sqlite://{}", db_path.to_string_lossy().replace('\\', "/"));

    let storage = Storage::new(&database_url).await.expect("db");
    storage.store_session_token("persisted").await.expect("store");
    storage.pool().close().await;
    drop(storage);

    assert!(
        db_path.exists(),
        "database file should exist: {}",
        db_path.display()
    );

    let reopened = Storage::new(&database_url).await.expect("reopen");
    assert_eq!(
        reopened.session_token().await.expect("read").as_deref(),
        Some("persisted")
    );
}

#[test]
fn sqlite_path_ignores_memory_and_foreign_urls() {
    assert_eq!(sqlite_path("sqlite::memory:"), None);
    assert_eq!(sqlite_path("postgres://localhost/db"), None);
    assert_eq!(
        sqlite_path("sqlite://./data/client.db?mode=rwc"),
        Some(PathBuf::from("./data/client.db"))
    );
}
