//! Screen-independent application logic for the ProximityMatch desktop app:
//! the swipe controller, candidate deck, profile draft editing, the
//! onboarding flow, and profile persistence. The GUI crate owns rendering
//! and event plumbing only.

pub mod deck;
pub mod onboarding;
pub mod profile;
pub mod profile_store;
pub mod services;
pub mod swipe;

pub use deck::CandidateDeck;
pub use onboarding::{OnboardingFlow, OnboardingStep};
pub use profile::{AccountDraft, ImageAddOutcome, ProfileDraft, MAX_PROFILE_IMAGES};
pub use profile_store::{ProfileStore, PROFILE_STORAGE_KEY};
pub use services::{ImagePickOutcome, ImagePicker, LocationPermission, PermissionOutcome};
pub use swipe::{GesturePhase, SwipeController, SwipeDirection, SwipeEvent};
