//! The submit lifecycle of the contact form.

use std::sync::{Arc, RwLock};

use tokio::runtime::Handle;
use tokio::sync::watch;
use vitrine_dom::Document;

use super::state::{SubmissionOutcome, SubmissionState, SubmitAttempt};
use super::transport::Transport;
use crate::banner::{Banner, BannerHost};
use crate::config::TimingConfig;
use crate::form::{ContactForm, FormSnapshot};

/// Label shown on the submit button while a submission is in flight.
pub const BUSY_LABEL: &str = "Sending...";

const SUCCESS_TITLE: &str = "Message sent successfully!";
const SUCCESS_BODY: &str = "Thank you for your interest. I'll get back to you within 24 hours.";
const VALIDATION_TITLE: &str = "Validation Error";
const FAILURE_TITLE: &str = "Message not sent";

struct ControllerInner {
    document: Document,
    form: ContactForm,
    transport: Arc<dyn Transport>,
    banners: BannerHost,
    timing: TimingConfig,
    state: watch::Sender<SubmissionState>,
    last_outcome: RwLock<Option<SubmissionOutcome>>,
    saved_label: RwLock<Option<String>>,
}

/// Drives `Idle -> Submitting -> {Succeeded, Failed} -> Idle`.
///
/// A submission starts only from `Idle` and only if the whole form
/// validates. While it is in flight the submit button is disabled and
/// further requests are ignored. The transport always runs to completion;
/// there is no cancellation.
///
/// Cheap to clone; clones drive the same lifecycle.
///
/// # Example
///
/// ```ignore
/// let controller = SubmissionController::new(document, form, transport, timing);
/// match controller.begin() {
///     SubmitAttempt::Started(snapshot) => {
///         let outcome = controller.complete(snapshot).await;
///     }
///     SubmitAttempt::Rejected => { /* errors are on the page */ }
///     _ => {}
/// }
/// ```
#[derive(Clone)]
pub struct SubmissionController {
    inner: Arc<ControllerInner>,
}

impl std::fmt::Debug for SubmissionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionController")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl SubmissionController {
    pub fn new(
        document: Document,
        form: ContactForm,
        transport: Arc<dyn Transport>,
        timing: TimingConfig,
    ) -> Self {
        let banners = BannerHost::new(form.form().cloned()).with_fade(timing.banner_fade());
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self {
            inner: Arc::new(ControllerInner {
                document,
                form,
                transport,
                banners,
                timing,
                state,
                last_outcome: RwLock::new(None),
                saved_label: RwLock::new(None),
            }),
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.inner.form
    }

    pub fn banners(&self) -> &BannerHost {
        &self.inner.banners
    }

    /// Current phase.
    ///
    /// `Succeeded` and `Failed` are published and replaced by `Idle` within
    /// the same [`complete`](Self::complete) call, so callers read the
    /// result through [`last_outcome`](Self::last_outcome).
    pub fn state(&self) -> SubmissionState {
        self.inner.state.borrow().clone()
    }

    /// Watch phase changes.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.inner.state.subscribe()
    }

    /// Outcome of the most recent submission that reached the transport.
    pub fn last_outcome(&self) -> Option<SubmissionOutcome> {
        self.inner
            .last_outcome
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Handle a submit request up to the point where the snapshot is sent.
    ///
    /// On success the controller is `Submitting` and the caller must pass
    /// the snapshot to [`complete`](Self::complete).
    pub fn begin(&self) -> SubmitAttempt {
        match self.precheck() {
            Some(attempt) => attempt,
            None => self.start(),
        }
    }

    /// Busy and validation checks. `None` when a submission may start.
    fn precheck(&self) -> Option<SubmitAttempt> {
        let inner = &self.inner;

        if self.state().is_submitting()
            || inner.form.submit_button().is_some_and(|b| b.is_disabled())
        {
            log::debug!("Submit ignored, a submission is in flight");
            return Some(SubmitAttempt::Busy);
        }

        if let Err(invalid) = inner.form.validator().check_form(inner.form.fields()) {
            log::debug!("Submit rejected, invalid fields: {:?}", invalid.fields);
            inner.banners.show(
                Banner::error(VALIDATION_TITLE, invalid.to_string())
                    .with_duration(inner.timing.error_banner()),
            );
            if let Some(field) = inner.form.first_invalid() {
                inner.document.focus(field.input());
            }
            return Some(SubmitAttempt::Rejected);
        }
        None
    }

    fn start(&self) -> SubmitAttempt {
        let inner = &self.inner;
        let Some(button) = inner.form.submit_button() else {
            log::debug!("Submit ignored, the form has no submit button");
            return SubmitAttempt::Unavailable;
        };

        inner.banners.clear();
        let snapshot = inner.form.snapshot();

        if let Ok(mut saved) = inner.saved_label.write() {
            *saved = Some(button.text());
        }
        button.set_text(BUSY_LABEL);
        button.set_disabled(true);
        button.set_attr("aria-busy", "true");
        button.set_style("opacity", "0.7");

        inner.state.send_replace(SubmissionState::Submitting);
        log::debug!("Submitting {} field(s)", snapshot.len());
        SubmitAttempt::Started(snapshot)
    }

    /// Send a snapshot captured by [`begin`](Self::begin) and apply the
    /// outcome to the page.
    pub async fn complete(&self, snapshot: FormSnapshot) -> SubmissionOutcome {
        let inner = &self.inner;

        let outcome = match inner.transport.send(&snapshot).await {
            Ok(()) => SubmissionOutcome::Succeeded,
            Err(e) => {
                log::warn!("Submission failed: {e}");
                SubmissionOutcome::Failed(e.to_string())
            }
        };
        inner.state.send_replace(SubmissionState::from(&outcome));

        match &outcome {
            SubmissionOutcome::Succeeded => {
                log::info!("Submission succeeded");
                inner.banners.show(
                    Banner::success(SUCCESS_TITLE, SUCCESS_BODY)
                        .with_duration(inner.timing.success_banner()),
                );
                inner.form.reset();
            }
            SubmissionOutcome::Failed(reason) => {
                inner.banners.show(
                    Banner::error(FAILURE_TITLE, format!("Your message could not be sent: {reason}"))
                        .with_duration(inner.timing.error_banner()),
                );
            }
        }

        self.restore_button();
        if let Ok(mut last) = inner.last_outcome.write() {
            *last = Some(outcome.clone());
        }
        inner.state.send_replace(SubmissionState::Idle);
        outcome
    }

    /// Run a whole submission. `None` when it did not start (see
    /// [`begin`](Self::begin)).
    pub async fn submit(&self) -> Option<SubmissionOutcome> {
        match self.begin() {
            SubmitAttempt::Started(snapshot) => Some(self.complete(snapshot).await),
            _ => None,
        }
    }

    /// Start a submission and finish it in a background task.
    ///
    /// Validation runs either way. A valid form outside a tokio runtime
    /// does not start and `Unavailable` is returned.
    pub fn spawn_submit(&self) -> SubmitAttempt {
        if let Some(attempt) = self.precheck() {
            return attempt;
        }
        let Ok(handle) = Handle::try_current() else {
            log::warn!("Submit ignored, no runtime to run the transport on");
            return SubmitAttempt::Unavailable;
        };

        let attempt = self.start();
        if let SubmitAttempt::Started(snapshot) = &attempt {
            let controller = self.clone();
            let snapshot = snapshot.clone();
            handle.spawn(async move {
                controller.complete(snapshot).await;
            });
        }
        attempt
    }

    fn restore_button(&self) {
        let Some(button) = self.inner.form.submit_button() else {
            return;
        };
        let label = self
            .inner
            .saved_label
            .write()
            .ok()
            .and_then(|mut saved| saved.take());
        if let Some(label) = label {
            button.set_text(label);
        }
        button.set_disabled(false);
        button.remove_attr("aria-busy");
        button.clear_style("opacity");
    }
}
