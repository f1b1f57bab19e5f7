use super::*;

fn update(email: Option<&str>, password: Option<&str>) -> ProfileUpdate {
    ProfileUpdate { email: email.map(str::to_owned), password: password.map(str::to_owned) }
}

#[test]
fn validate_rejects_empty_update() {
    assert_eq!(validate(&update(None, None), ""), Err("Nothing to update."));
}

#[test]
fn validate_rejects_email_without_at() {
    assert_eq!(validate(&update(Some("ana.trivela.test"), None), ""), Err("Enter a valid email address."));
}

#[test]
fn validate_requires_matching_confirmation() {
    assert_eq!(validate(&update(None, Some("hunter2")), "hunter3"), Err("Passwords do not match."));
    assert_eq!(validate(&update(None, Some("hunter2")), "hunter2"), Ok(()));
}

#[test]
fn validate_accepts_email_only_change() {
    assert_eq!(validate(&update(Some("ana@trivela.test"), None), ""), Ok(()));
}

#[test]
fn status_message_covers_every_state() {
    assert_eq!(status_message(SaveStatus::Idle), "");
    assert_eq!(status_message(SaveStatus::Saving), "Saving...");
    assert_eq!(status_message(SaveStatus::Saved), "Profile updated.");
    assert_eq!(status_message(SaveStatus::Failed), "Could not update profile.");
}
