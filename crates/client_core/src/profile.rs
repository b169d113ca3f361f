//! The user's editable profile draft.
//!
//! Both the onboarding screen and the profile editor mutate the same
//! [`ProfileDraft`] value, passed by ownership into whichever screen is
//! active, so the two editors cannot drift apart. Nothing here touches
//! storage; validation failures leave the draft untouched.

use shared::{
    domain::{Gender, ProfileRecord},
    error::ValidationError,
};

pub const MAX_PROFILE_IMAGES: usize = 5;

/// Preset interest chips offered by both editors.
pub const SUGGESTED_INTERESTS: [&str; 10] = [
    "Sports",
    "Music",
    "Cooking",
    "Travel",
    "Reading",
    "Movies",
    "Gaming",
    "Fitness",
    "Art",
    "Photography",
];

/// Credentials captured on the first onboarding step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountDraft {
    pub email: String,
    pub password: String,
}

impl AccountDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(())
    }
}

/// Result of merging freshly picked image URIs into the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageAddOutcome {
    pub added: usize,
    /// URIs skipped because they were already in the gallery. Surfaced as a
    /// one-time notice, never an error.
    pub duplicates_skipped: usize,
    /// URIs dropped because the gallery hit the cap mid-batch.
    pub truncated: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub email: String,
    pub name: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub description: String,
    pub images: Vec<String>,
    pub interests: Vec<String>,
    pub custom_interests: Vec<String>,
}

impl ProfileDraft {
    pub fn from_record(record: ProfileRecord) -> Self {
        Self {
            email: record.email,
            name: record.name,
            age: record.age,
            gender: record.gender,
            description: record.description,
            images: record.images,
            interests: record.interests,
            custom_interests: record.custom_interests,
        }
    }

    pub fn to_record(&self) -> ProfileRecord {
        ProfileRecord {
            email: self.email.clone(),
            name: self.name.clone(),
            age: self.age.clone(),
            gender: self.gender,
            description: self.description.clone(),
            images: self.images.clone(),
            // Preset and custom selections are stored in separate fields;
            // `interests` never duplicates a custom entry.
            interests: self
                .interests
                .iter()
                .filter(|i| !self.custom_interests.contains(i))
                .cloned()
                .collect(),
            custom_interests: self.custom_interests.clone(),
        }
    }

    pub fn remaining_image_slots(&self) -> usize {
        MAX_PROFILE_IMAGES.saturating_sub(self.images.len())
    }

    /// Merges picked URIs into the gallery. Rejects outright when the
    /// gallery is already full, without mutating the list; within a batch,
    /// duplicates (by URI equality) are skipped silently and anything past
    /// the cap is dropped.
    pub fn add_images(
        &mut self,
        uris: impl IntoIterator<Item = String>,
    ) -> Result<ImageAddOutcome, ValidationError> {
        if self.images.len() >= MAX_PROFILE_IMAGES {
            return Err(ValidationError::ImageLimitReached {
                max: MAX_PROFILE_IMAGES,
            });
        }

        let mut outcome = ImageAddOutcome::default();
        for uri in uris {
            if self.images.contains(&uri) {
                outcome.duplicates_skipped += 1;
            } else if self.images.len() >= MAX_PROFILE_IMAGES {
                outcome.truncated += 1;
            } else {
                self.images.push(uri);
                outcome.added += 1;
            }
        }
        Ok(outcome)
    }

    pub fn remove_image(&mut self, uri: &str) {
        self.images.retain(|existing| existing != uri);
    }

    /// All selected interests in display order: presets first, then custom.
    pub fn selected_interests(&self) -> Vec<String> {
        let mut all = self.interests.clone();
        for custom in &self.custom_interests {
            if !all.contains(custom) {
                all.push(custom.clone());
            }
        }
        all
    }

    pub fn is_interest_selected(&self, label: &str) -> bool {
        self.interests.iter().any(|i| i == label)
            || self.custom_interests.iter().any(|i| i == label)
    }

    pub fn toggle_interest(&mut self, label: &str) {
        if let Some(pos) = self.interests.iter().position(|i| i == label) {
            self.interests.remove(pos);
        } else {
            self.interests.push(label.to_string());
        }
    }

    /// Adds a custom interest chip (trimmed). Empty and duplicate entries
    /// are ignored; a new chip starts out selected.
    pub fn add_custom_interest(&mut self, label: &str) {
        let trimmed = label.trim();
        if trimmed.is_empty() || self.custom_interests.iter().any(|i| i == trimmed) {
            return;
        }
        self.custom_interests.push(trimmed.to_string());
        if !self.interests.iter().any(|i| i == trimmed) {
            self.interests.push(trimmed.to_string());
        }
    }

    /// Deselects an interest entirely, whether preset or custom.
    pub fn remove_interest(&mut self, label: &str) {
        self.interests.retain(|i| i != label);
        self.custom_interests.retain(|i| i != label);
    }

    /// Onboarding requires a complete profile before anything is persisted.
    pub fn validate_for_onboarding(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty()
            || self.age.trim().is_empty()
            || self.gender.is_none()
            || self.images.is_empty()
            || (self.interests.is_empty() && self.custom_interests.is_empty())
        {
            return Err(ValidationError::IncompleteProfile);
        }
        Ok(())
    }

    /// The profile editor only insists on name and age.
    pub fn validate_for_save(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() || self.age.trim().is_empty() {
            return Err(ValidationError::MissingNameOrAge);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/profile_tests.rs"]
mod tests;
