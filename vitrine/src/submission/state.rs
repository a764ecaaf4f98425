use crate::form::FormSnapshot;

/// Phase of the submit lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// Waiting for a submit request.
    #[default]
    Idle,
    /// A validated snapshot is in flight.
    Submitting,
    /// The transport accepted the last snapshot.
    Succeeded,
    /// The transport failed with a reason.
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Terminal result of a submission that reached the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded,
    Failed(String),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

impl From<&SubmissionOutcome> for SubmissionState {
    fn from(outcome: &SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Succeeded => Self::Succeeded,
            SubmissionOutcome::Failed(reason) => Self::Failed(reason.clone()),
        }
    }
}

/// What happened to a submit request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation failed; the form-level error is shown and nothing was sent.
    Rejected,
    /// A submission is already in flight; the request was ignored.
    Busy,
    /// The page has no submit button, so nothing can be submitted.
    Unavailable,
    /// The snapshot was captured and the controller is `Submitting`.
    Started(FormSnapshot),
}
