//! Backend commands queued from UI to the storage worker.

use shared::domain::ProfileRecord;

pub enum BackendCommand {
    LoadProfile,
    SaveProfile(ProfileRecord),
}
