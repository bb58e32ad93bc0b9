use serde::{Deserialize, Serialize};

/// Contact-inquiry payload posted to the API. Built fresh per submission
/// attempt and cleared only after a successful round trip.
#[derive(Serialize, Clone, PartialEq)]
pub struct Inquiry {
    pub email: String,
    pub phone_number: String,
    pub message: String,
}

#[derive(Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// State of one submission attempt. A new attempt always re-enters
/// `Submitting`, wiping any banner from the previous attempt, and leaves it
/// in exactly one terminal state.
#[derive(Clone, PartialEq)]
pub enum SubmissionOutcome {
    Idle,
    Submitting,
    Success,
    Failure(String),
}

impl SubmissionOutcome {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionOutcome::Submitting)
    }
}

pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";
pub const CONNECTION_FAILURE: &str =
    "Failed to submit. Please check your connection and try again.";

/// Applied on every input event, so the stored value stays digit-only no
/// matter what is typed or pasted.
pub fn sanitize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// The server-supplied reason wins; an empty one falls back to the generic
/// message.
pub fn failure_reason(server_error: String) -> String {
    if server_error.is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        server_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_keeps_digits_only() {
        assert_eq!(sanitize_phone("+44 (20) 1234"), "44201234");
        assert_eq!(sanitize_phone("1234567890"), "1234567890");
        assert_eq!(sanitize_phone("no digits here"), "");
        assert_eq!(sanitize_phone(""), "");
    }

    #[test]
    fn sanitizing_is_idempotent() {
        let once = sanitize_phone("07-471 503 999");
        assert_eq!(sanitize_phone(&once), once);
    }

    #[test]
    fn server_reason_shown_verbatim() {
        assert_eq!(
            failure_reason("Invalid phone number".to_string()),
            "Invalid phone number"
        );
    }

    #[test]
    fn empty_reason_falls_back() {
        assert_eq!(failure_reason(String::new()), GENERIC_FAILURE);
    }

    #[test]
    fn submitting_is_the_only_busy_state() {
        assert!(SubmissionOutcome::Submitting.is_submitting());
        assert!(!SubmissionOutcome::Idle.is_submitting());
        assert!(!SubmissionOutcome::Success.is_submitting());
        assert!(!SubmissionOutcome::Failure("x".into()).is_submitting());
    }
}
