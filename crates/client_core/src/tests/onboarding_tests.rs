use super::*;
use shared::domain::Gender;

fn flow_at_profile_step() -> OnboardingFlow {
    let mut flow = OnboardingFlow::new();
    flow.account.email = "alice@example.com".to_string();
    flow.account.password = "hunter2".to_string();
    flow.create_account().expect("account step");
    assert_eq!(
        flow.apply_location_outcome(PermissionOutcome::Granted),
        LocationDecision::Advanced
    );
    flow
}

#[test]
fn starts_on_the_account_step() {
    let flow = OnboardingFlow::new();
    assert_eq!(flow.step(), OnboardingStep::Account);
    assert_eq!(flow.progress(), (0, 3));
}

#[test]
fn account_step_blocks_on_missing_credentials() {
    let mut flow = OnboardingFlow::new();
    assert_eq!(
        flow.create_account(),
        Err(ValidationError::MissingCredentials)
    );
    assert_eq!(flow.step(), OnboardingStep::Account);
}

#[test]
fn account_step_advances_and_carries_email_into_the_draft() {
    let mut flow = OnboardingFlow::new();
    flow.account.email = " alice@example.com ".to_string();
    flow.account.password = "hunter2".to_string();

    flow.create_account().expect("account step");
    assert_eq!(flow.step(), OnboardingStep::Location);
    assert_eq!(flow.draft.email, "alice@example.com");
}

#[test]
fn denied_location_keeps_the_flow_on_the_location_step() {
    let mut flow = OnboardingFlow::new();
    flow.account.email = "a@b.c".to_string();
    flow.account.password = "pw".to_string();
    flow.create_account().expect("account step");

    assert_eq!(
        flow.apply_location_outcome(PermissionOutcome::Denied),
        LocationDecision::Blocked
    );
    assert_eq!(flow.step(), OnboardingStep::Location);
}

#[test]
fn go_back_steps_backwards_and_clamps_at_account() {
    let mut flow = flow_at_profile_step();
    flow.go_back();
    assert_eq!(flow.step(), OnboardingStep::Location);
    flow.go_back();
    assert_eq!(flow.step(), OnboardingStep::Account);
    flow.go_back();
    assert_eq!(flow.step(), OnboardingStep::Account);
}

#[test]
fn complete_rejects_an_incomplete_draft() {
    let flow = flow_at_profile_step();
    assert_eq!(flow.complete(), Err(ValidationError::IncompleteProfile));
}

#[test]
fn complete_returns_the_finished_record() {
    let mut flow = flow_at_profile_step();
    flow.draft.name = "Alice".to_string();
    flow.draft.age = "29".to_string();
    flow.draft.gender = Some(Gender::Female);
    flow.draft
        .add_images(["file:///a.png".to_string()])
        .expect("image");
    flow.draft.toggle_interest("Music");

    let record = flow.complete().expect("complete");
    assert_eq!(record.name, "Alice");
    assert_eq!(record.email, "alice@example.com");
    assert_eq!(record.interests, vec!["Music".to_string()]);
    assert_eq!(record.images.len(), 1);
}
