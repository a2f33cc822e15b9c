use thiserror::Error;

use crate::store::{ActivityStore, Directory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student already signed up for this activity")]
    AlreadyEnrolled,
    #[error("Student is not signed up for this activity")]
    NotEnrolled,
}

/// Emails are compared and stored trimmed and lowercased, so
/// " Emma@Mergington.edu " and "emma@mergington.edu" are the same student.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Full catalogue, name -> record. Read-only.
pub fn list_activities(store: &ActivityStore) -> Directory {
    store.snapshot()
}

pub fn enroll(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    let email = normalize_email(email);

    // One write-lock acquisition per call keeps the check-then-insert atomic.
    let mut directory = store.write();
    let activity = directory
        .get_mut(activity_name)
        .ok_or(SignupError::ActivityNotFound)?;

    if activity.participants.contains(&email) {
        return Err(SignupError::AlreadyEnrolled);
    }
    activity.participants.insert(email.clone());

    Ok(format!("Signed up {} for {}", email, activity_name))
}

pub fn withdraw(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    let email = normalize_email(email);

    let mut directory = store.write();
    let activity = directory
        .get_mut(activity_name)
        .ok_or(SignupError::ActivityNotFound)?;

    if !activity.participants.remove(&email) {
        return Err(SignupError::NotEnrolled);
    }

    Ok(format!("Unregistered {} from {}", email, activity_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(
            normalize_email(" NEWStudent@Mergington.edu "),
            "newstudent@mergington.edu"
        );
        assert_eq!(
            normalize_email("newstudent@mergington.edu"),
            "newstudent@mergington.edu"
        );
    }

    #[test]
    fn enroll_stores_normalized_email() {
        let store = ActivityStore::seeded();
        let message = enroll(&store, "Chess Club", " NEWStudent@Mergington.edu ").unwrap();
        assert_eq!(message, "Signed up newstudent@mergington.edu for Chess Club");
        assert!(store.read()["Chess Club"]
            .participants
            .contains("newstudent@mergington.edu"));
    }

    #[test]
    fn enroll_rejects_duplicate_regardless_of_case() {
        let store = ActivityStore::seeded();
        let err = enroll(&store, "Chess Club", "MICHAEL@MERGINGTON.EDU").unwrap_err();
        assert_eq!(err, SignupError::AlreadyEnrolled);
    }

    #[test]
    fn enroll_rejects_unknown_activity() {
        let store = ActivityStore::seeded();
        let err = enroll(&store, "Unknown Club", "student@mergington.edu").unwrap_err();
        assert_eq!(err, SignupError::ActivityNotFound);
    }

    #[test]
    fn withdraw_removes_participant() {
        let store = ActivityStore::seeded();
        let message = withdraw(&store, "Programming Class", "EMMA@MERGINGTON.EDU").unwrap();
        assert_eq!(
            message,
            "Unregistered emma@mergington.edu from Programming Class"
        );
        assert!(!store.read()["Programming Class"]
            .participants
            .contains("emma@mergington.edu"));
    }

    #[test]
    fn withdraw_distinguishes_missing_activity_from_missing_student() {
        let store = ActivityStore::seeded();
        assert_eq!(
            withdraw(&store, "Unknown Club", "emma@mergington.edu").unwrap_err(),
            SignupError::ActivityNotFound
        );
        assert_eq!(
            withdraw(&store, "Debate Club", "not-registered@mergington.edu").unwrap_err(),
            SignupError::NotEnrolled
        );
    }
}
