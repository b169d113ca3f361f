//! Desktop implementations of the platform collaborator traits. Location
//! access has no desktop permission prompt, so a confirmation dialog stands
//! in for it; image picking goes through the native file dialog.

use client_core::{ImagePickOutcome, ImagePicker, LocationPermission, PermissionOutcome};
use tracing::info;

pub struct DialogLocationPermission;

impl LocationPermission for DialogLocationPermission {
    fn request_location(&self) -> PermissionOutcome {
        let result = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Info)
            .set_title("Location Access")
            .set_description(
                "ProximityMatch needs your location to help you connect with people nearby. \
                 Allow location access?",
            )
            .set_buttons(rfd::MessageButtons::YesNo)
            .show();
        match result {
            rfd::MessageDialogResult::Yes => PermissionOutcome::Granted,
            _ => {
                info!("location access declined from dialog");
                PermissionOutcome::Denied
            }
        }
    }
}

pub struct RfdImagePicker;

impl ImagePicker for RfdImagePicker {
    fn pick_images(&self, max: usize) -> ImagePickOutcome {
        let Some(paths) = rfd::FileDialog::new()
            .set_title("Choose profile photos")
            .add_filter("Images", &["png", "jpg", "jpeg"])
            .pick_files()
        else {
            return ImagePickOutcome::Cancelled;
        };

        let uris: Vec<String> = paths
            .into_iter()
            .take(max)
            .map(|path| path.display().to_string())
            .collect();
        ImagePickOutcome::Picked(uris)
    }
}
