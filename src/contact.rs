use http::StatusCode;
use thiserror::Error;

/// Fixed third-party form relay. The only outbound endpoint this site talks
/// to; there is no configuration surface for it.
pub const RELAY_ENDPOINT: &str = "https://formspree.io/f/mkogdznb";

/// How long the sent confirmation stays up before the form returns to idle.
pub const SENT_RESET_SECS: u64 = 3;

/// Submission lifecycle. At most one request is in flight: the submit control
/// is disabled while `Submitting`, and [`SubmitState::begin`] refuses
/// re-entry from any state but `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Sent,
}

impl SubmitState {
    /// `Idle -> Submitting`. Returns `None` from any other state, so a second
    /// submit while one is pending never issues a request.
    pub fn begin(self) -> Option<SubmitState> {
        matches!(self, SubmitState::Idle).then_some(SubmitState::Submitting)
    }

    /// `Submitting -> Sent` on success, `Submitting -> Idle` on failure.
    /// Settling is meaningless outside `Submitting` and leaves the state
    /// untouched.
    pub fn settle(self, success: bool) -> SubmitState {
        match self {
            SubmitState::Submitting => {
                if success {
                    SubmitState::Sent
                } else {
                    SubmitState::Idle
                }
            }
            other => other,
        }
    }

    /// `Sent -> Idle`, the timed auto-revert.
    pub fn reset(self) -> SubmitState {
        match self {
            SubmitState::Sent => SubmitState::Idle,
            other => other,
        }
    }

    pub fn is_submitting(self) -> bool {
        matches!(self, SubmitState::Submitting)
    }
}

/// Captured form fields; lives only for the duration of one submit.
#[derive(Debug, Clone)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("couldn't reach the contact relay")]
    Transport(#[from] reqwest::Error),
    #[error("contact relay rejected the submission ({0})")]
    Status(StatusCode),
}

/// One outbound POST of the submission as multipart form data, asking for a
/// JSON response. Success is any 2xx status. No retry, no timeout beyond the
/// transport's own.
pub async fn send_submission(
    endpoint: &str,
    submission: FormSubmission,
) -> Result<(), RelayError> {
    let form = reqwest::multipart::Form::new()
        .text("name", submission.name)
        .text("email", submission.email)
        .text("message", submission.message);
    let response = reqwest::Client::new()
        .post(endpoint)
        .header(http::header::ACCEPT, "application/json")
        .multipart(form)
        .send()
        .await?;
    if response.status().is_success() {
        Ok(())
    } else {
        Err(RelayError::Status(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn submission() -> FormSubmission {
        FormSubmission {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_success_path_transitions() {
        let state = SubmitState::Idle;
        let state = state.begin().expect("idle form should accept a submit");
        assert_eq!(state, SubmitState::Submitting);
        let state = state.settle(true);
        assert_eq!(state, SubmitState::Sent);
        assert_eq!(state.reset(), SubmitState::Idle);
    }

    #[test]
    fn test_failure_path_returns_to_idle() {
        let state = SubmitState::Idle.begin().unwrap().settle(false);
        assert_eq!(state, SubmitState::Idle);
    }

    #[test]
    fn test_double_submit_refused_while_pending() {
        assert_eq!(SubmitState::Submitting.begin(), None);
        assert_eq!(SubmitState::Sent.begin(), None);
    }

    #[test]
    fn test_settle_and_reset_outside_their_states_are_noops() {
        assert_eq!(SubmitState::Idle.settle(true), SubmitState::Idle);
        assert_eq!(SubmitState::Sent.settle(false), SubmitState::Sent);
        assert_eq!(SubmitState::Idle.reset(), SubmitState::Idle);
        assert_eq!(SubmitState::Submitting.reset(), SubmitState::Submitting);
    }

    #[tokio::test]
    async fn test_relay_success_status() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/f/test")
                    .header("accept", "application/json")
                    .body_contains("john@example.com");
                then.status(200).body(r#"{"ok":true}"#);
            })
            .await;

        let result = send_submission(&server.url("/f/test"), submission()).await;
        assert!(result.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_relay_non_success_status_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/f/test");
                then.status(500);
            })
            .await;

        let result = send_submission(&server.url("/f/test"), submission()).await;
        match result {
            Err(RelayError::Status(status)) => assert_eq!(status.as_u16(), 500),
            other => panic!("expected status error, got {other:?}"),
        }
    }
}
