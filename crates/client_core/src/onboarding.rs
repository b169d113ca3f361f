//! Three-step onboarding flow: account, location access, profile setup.
//!
//! The flow owns the drafts and gates every step transition on validation;
//! nothing is persisted until [`OnboardingFlow::complete`] hands back a
//! finished record.

use shared::{domain::ProfileRecord, error::ValidationError};
use tracing::info;

use crate::profile::{AccountDraft, ProfileDraft};
use crate::services::PermissionOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnboardingStep {
    #[default]
    Account,
    Location,
    Profile,
}

impl OnboardingStep {
    pub const COUNT: usize = 3;

    pub fn index(self) -> usize {
        match self {
            OnboardingStep::Account => 0,
            OnboardingStep::Location => 1,
            OnboardingStep::Profile => 2,
        }
    }

    fn previous(self) -> Self {
        match self {
            OnboardingStep::Account | OnboardingStep::Location => OnboardingStep::Account,
            OnboardingStep::Profile => OnboardingStep::Location,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationDecision {
    Advanced,
    /// The flow does not silently proceed past a denial; the screen shows a
    /// permission message and stays on the Location step.
    Blocked,
}

#[derive(Debug, Default)]
pub struct OnboardingFlow {
    step: OnboardingStep,
    pub account: AccountDraft,
    pub draft: ProfileDraft,
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    /// (current step index, total steps) for the progress indicator.
    pub fn progress(&self) -> (usize, usize) {
        (self.step.index(), OnboardingStep::COUNT)
    }

    /// Step 0 → 1. Requires non-empty credentials; the email carries over
    /// into the profile draft.
    pub fn create_account(&mut self) -> Result<(), ValidationError> {
        self.account.validate()?;
        self.draft.email = self.account.email.trim().to_string();
        self.step = OnboardingStep::Location;
        info!("onboarding account step complete");
        Ok(())
    }

    /// Step 1 → 2, gated on the location permission outcome.
    pub fn apply_location_outcome(&mut self, outcome: PermissionOutcome) -> LocationDecision {
        match outcome {
            PermissionOutcome::Granted => {
                self.step = OnboardingStep::Profile;
                LocationDecision::Advanced
            }
            PermissionOutcome::Denied => {
                info!("location permission denied; onboarding blocked at location step");
                LocationDecision::Blocked
            }
        }
    }

    pub fn go_back(&mut self) {
        self.step = self.step.previous();
    }

    /// Final step: validates the whole draft and returns the record to
    /// persist. On failure no partial state leaves the flow.
    pub fn complete(&self) -> Result<ProfileRecord, ValidationError> {
        self.draft.validate_for_onboarding()?;
        Ok(self.draft.to_record())
    }
}

#[cfg(test)]
#[path = "tests/onboarding_tests.rs"]
mod tests;
