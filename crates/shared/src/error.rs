use thiserror::Error;

/// User-facing validation failures. These block progression and never commit
/// partial state; the GUI surfaces the `Display` text directly in its alert
/// banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter email and password")]
    MissingCredentials,
    #[error("Please complete all profile fields")]
    IncompleteProfile,
    #[error("Name and age are required")]
    MissingNameOrAge,
    #[error("You can only upload a maximum of {max} pictures")]
    ImageLimitReached { max: usize },
}
