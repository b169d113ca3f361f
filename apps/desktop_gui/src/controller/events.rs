//! UI/backend events and error modeling for the desktop GUI controller.

use shared::domain::ProfileRecord;

pub enum UiEvent {
    ProfileLoaded(Option<ProfileRecord>),
    ProfileSaved(ProfileRecord),
    Info(String),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Storage,
    Validation,
    Permission,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    LoadProfile,
    SaveProfile,
    General,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("sqlite")
            || message_lower.contains("database")
            || message_lower.contains("storage")
            || message_lower.contains("blob")
            || message_lower.contains("serialize")
            || message_lower.contains("not valid")
        {
            UiErrorCategory::Storage
        } else if message_lower.contains("denied") || message_lower.contains("permission") {
            UiErrorCategory::Permission
        } else if message_lower.contains("required")
            || message_lower.contains("missing")
            || message_lower.contains("complete")
            || message_lower.contains("maximum")
        {
            UiErrorCategory::Validation
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
