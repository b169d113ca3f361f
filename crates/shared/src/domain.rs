use serde::{Deserialize, Serialize};

/// Stable identifier for a displayable profile entry in the swipe stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub String);

impl CandidateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// A profile entry shown on the home screen. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub interests: String,
    pub bio: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// The user's own profile, serialized as a single JSON blob under one
/// well-known storage key. Field names stay camelCase so blobs written by
/// earlier builds of the app keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    #[serde(default)]
    pub email: String,
    pub name: String,
    pub age: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub custom_interests: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_record_round_trips_through_json() {
        let record = ProfileRecord {
            email: "alice@example.com".to_string(),
            name: "Alice".to_string(),
            age: "29".to_string(),
            gender: Some(Gender::Female),
            description: "hello".to_string(),
            images: vec!["file:///a.png".to_string()],
            interests: vec!["Music".to_string()],
            custom_interests: vec!["Bouldering".to_string()],
        };

        let text = serde_json::to_string(&record).expect("serialize");
        let parsed: ProfileRecord = serde_json::from_str(&text).expect("parse");
        assert_eq!(parsed, record);
    }

    #[test]
    fn profile_record_uses_camel_case_field_names() {
        let record = ProfileRecord {
            name: "Bob".to_string(),
            age: "31".to_string(),
            custom_interests: vec!["Chess".to_string()],
            ..ProfileRecord::default()
        };

        let text = serde_json::to_string(&record).expect("serialize");
        assert!(text.contains("\"customInterests\""));
        assert!(!text.contains("custom_interests"));
    }

    #[test]
    fn minimal_legacy_blob_still_parses() {
        let parsed: ProfileRecord =
            serde_json::from_str(r#"{"name":"Cleo","age":"24"}"#).expect("parse");
        assert_eq!(parsed.name, "Cleo");
        assert!(parsed.images.is_empty());
        assert!(parsed.gender.is_none());
    }
}
