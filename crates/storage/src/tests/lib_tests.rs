use super::*;

#[tokio::test]
async fn health_check_succeeds_for_live_pool() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage.health_check().await.expect("health check");
}

#[tokio::test]
async fn absent_key_reads_as_none() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    let blob = storage.get_blob("user_profile").await.expect("read");
    assert!(blob.is_none());
}

#[tokio::test]
async fn stores_and_reads_back_a_blob() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage
        .set_blob("user_profile", br#"{"name":"Alice"}"#)
        .await
        .expect("write");

    let blob = storage.get_blob("user_profile").await.expect("read");
    assert_eq!(blob.as_deref(), Some(br#"{"name":"Alice"}"#.as_slice()));
}

#[tokio::test]
async fn overwrites_existing_blob_in_place() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage.set_blob("k", b"first").await.expect("write");
    storage.set_blob("k", b"second").await.expect("rewrite");

    let blob = storage.get_blob("k").await.expect("read");
    assert_eq!(blob.as_deref(), Some(b"second".as_slice()));
}

#[tokio::test]
async fn delete_reports_whether_key_existed() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage.set_blob("k", b"v").await.expect("write");

    assert!(storage.delete_blob("k").await.expect("delete"));
    assert!(!storage.delete_blob("k").await.expect("redelete"));
    assert!(storage.get_blob("k").await.expect("read").is_none());
}

#[tokio::test]
async fn creates_database_file_when_missing() {
    let temp_root = tempfile::tempdir().expect("tempdir");
    let db_path = temp_root.path().join("nested").join("storage.db");
    let database_url = format!("sqlite://{}", db_path.to_string_lossy().replace('\\', "/"));

    let storage = Storage::new(&database_url).await.expect("db");
    storage.set_blob("k", b"v").await.expect("write");
    drop(storage);

    assert!(
        db_path.exists(),
        "database file should exist: {}",
        db_path.display()
    );
}
