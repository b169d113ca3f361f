//! Collaborator seams for platform services. The GUI crate supplies the
//! desktop implementations (dialog-based); tests supply canned ones.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionOutcome {
    Granted,
    Denied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePickOutcome {
    Picked(Vec<String>),
    Cancelled,
}

pub trait LocationPermission {
    fn request_location(&self) -> PermissionOutcome;
}

/// Opens the platform picker for at most `max` images and returns their
/// URIs. Cancellation is an outcome, not an error.
pub trait ImagePicker {
    fn pick_images(&self, max: usize) -> ImagePickOutcome;
}
