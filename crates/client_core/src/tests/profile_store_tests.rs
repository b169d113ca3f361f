use super::*;
use shared::domain::Gender;
use storage::Storage;

fn sample_record() -> ProfileRecord {
    ProfileRecord {
        email: "alice@example.com".to_string(),
        name: "Alice".to_string(),
        age: "29".to_string(),
        gender: Some(Gender::Female),
        description: "hello".to_string(),
        images: vec!["file:///a.png".to_string()],
        interests: vec!["Music".to_string()],
        custom_interests: vec!["Bouldering".to_string()],
    }
}

#[tokio::test]
async fn load_returns_none_before_first_save() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    let loaded = storage.load_profile().await.expect("load");
    assert!(loaded.is_none());
}

#[tokio::test]
async fn saved_profile_loads_back_identically() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    let record = sample_record();

    storage.save_profile(&record).await.expect("save");
    let loaded = storage.load_profile().await.expect("load");
    assert_eq!(loaded, Some(record));
}

#[tokio::test]
async fn resave_overwrites_the_single_blob() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    let mut record = sample_record();
    storage.save_profile(&record).await.expect("save");

    record.description = "updated".to_string();
    storage.save_profile(&record).await.expect("resave");

    let loaded = storage.load_profile().await.expect("load").expect("some");
    assert_eq!(loaded.description, "updated");
}

#[tokio::test]
async fn corrupt_blob_surfaces_as_an_error_not_a_panic() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage
        .set_blob(PROFILE_STORAGE_KEY, b"not json at all")
        .await
        .expect("write");

    let result = storage.load_profile().await;
    assert!(result.is_err());
}
