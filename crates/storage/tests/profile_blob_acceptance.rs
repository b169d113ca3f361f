//! Acceptance check for the profile persistence path: a JSON profile blob
//! written under the app's well-known key survives a storage reopen.

use storage::Storage;

const PROFILE_KEY: &str = "user_profile";

#[tokio::test]
async fn profile_blob_survives_storage_reopen() {
    let temp_root = tempfile::tempdir().expect("tempdir");
    let db_path = temp_root.path().join("client.sqlite3");
    let database_url = format!("sqlite://{}", db_path.to_string_lossy().replace('\\', "/"));

    let blob = br#"{"name":"Alice","age":"29","images":[],"interests":["Music"]}"#;
    {
        let storage = Storage::new(&database_url).await.expect("open");
        storage.set_blob(PROFILE_KEY, blob).await.expect("write");
    }

    let reopened = Storage::new(&database_url).await.expect("reopen");
    let read_back = reopened.get_blob(PROFILE_KEY).await.expect("read");
    assert_eq!(read_back.as_deref(), Some(blob.as_slice()));
}
