//! Profile persistence over the on-device blob store.
//!
//! The whole profile lives as one JSON blob under a single well-known key.

use anyhow::{Context, Result};
use async_trait::async_trait;
use shared::domain::ProfileRecord;
use tracing::info;

pub const PROFILE_STORAGE_KEY: &str = "user_profile";

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn load_profile(&self) -> Result<Option<ProfileRecord>>;
    async fn save_profile(&self, record: &ProfileRecord) -> Result<()>;
}

#[async_trait]
impl ProfileStore for storage::Storage {
    async fn load_profile(&self) -> Result<Option<ProfileRecord>> {
        let Some(blob) = self
            .get_blob(PROFILE_STORAGE_KEY)
            .await
            .context("failed to read stored profile")?
        else {
            return Ok(None);
        };
        let record = serde_json::from_slice(&blob).context("stored profile blob is not valid")?;
        Ok(Some(record))
    }

    async fn save_profile(&self, record: &ProfileRecord) -> Result<()> {
        let blob = serde_json::to_vec(record).context("failed to serialize profile")?;
        self.set_blob(PROFILE_STORAGE_KEY, &blob)
            .await
            .context("failed to write profile")?;
        info!(bytes = blob.len(), "profile saved");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/profile_store_tests.rs"]
mod tests;
