use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use vitrine::banner::{BannerKind, FADE_OUT_CLASS};
use vitrine::config::{FormConfig, TimingConfig};
use vitrine::error::{FieldError, SubmitError};
use vitrine::form::{ContactForm, FormSnapshot};
use vitrine::page::standard_page;
use vitrine::submission::{
    BUSY_LABEL, SimulatedTransport, SubmissionController, SubmissionOutcome, SubmissionState,
    SubmitAttempt, Transport,
};
use vitrine_dom::Document;

struct FailingTransport;

#[async_trait]
impl Transport for FailingTransport {
    async fn send(&self, _snapshot: &FormSnapshot) -> Result<(), SubmitError> {
        tokio::time::sleep(Duration::from_millis(500)).await;
        Err(SubmitError::rejected("mailbox full"))
    }
}

fn controller_with(transport: Arc<dyn Transport>) -> (Document, SubmissionController) {
    let doc = standard_page();
    let form = ContactForm::from_document(&doc, &FormConfig::default());
    let controller = SubmissionController::new(doc.clone(), form, transport, TimingConfig::default());
    (doc, controller)
}

fn controller() -> (Document, SubmissionController) {
    controller_with(Arc::new(SimulatedTransport::default()))
}

fn fill(controller: &SubmissionController, name: &str, email: &str, message: &str) {
    let form = controller.form();
    form.fill("name", name);
    form.fill("email", email);
    form.fill("message", message);
}

fn banner_text(controller: &SubmissionController, kind: BannerKind) -> Option<String> {
    controller.banners().current_of(kind).map(|el| el.text_content())
}

#[test]
fn test_invalid_form_never_starts() {
    let (doc, controller) = controller();
    fill(&controller, "", "bad", "hi");

    assert_eq!(controller.begin(), SubmitAttempt::Rejected);
    assert_eq!(controller.state(), SubmissionState::Idle);

    let form = controller.form();
    assert_eq!(form.field("name").unwrap().error(), Some(FieldError::Required));
    assert_eq!(form.field("email").unwrap().error(), Some(FieldError::InvalidFormat));
    assert!(form.field("message").unwrap().is_valid());

    let text = banner_text(&controller, BannerKind::Error).unwrap();
    assert!(text.contains("Please correct the errors above"));

    let button = form.submit_button().unwrap();
    assert!(!button.is_disabled());
    assert_eq!(button.text(), "Send Message");
    assert!(doc.is_focused(form.field("name").unwrap().input()));
    assert_eq!(controller.last_outcome(), None);
}

#[test]
fn test_rejected_twice_shows_one_banner() {
    let (_doc, controller) = controller();
    controller.begin();
    controller.begin();

    let form = controller.form().form().unwrap().clone();
    let banners = form
        .children()
        .into_iter()
        .filter(|el| el.has_class(BannerKind::Error.class()))
        .count();
    assert_eq!(banners, 1);
}

#[test]
fn test_optional_subject_is_not_checked() {
    let (_doc, controller) = controller();
    fill(&controller, "Jo", "jo@x.com", "hello");
    controller.form().fill("subject", "");
    assert!(matches!(controller.begin(), SubmitAttempt::Started(_)));
}

#[tokio::test(start_paused = true)]
async fn test_valid_submission_lifecycle() {
    let (_doc, controller) = controller();
    fill(&controller, "Jo", "jo@x.com", "hello");
    let states = controller.subscribe();

    let SubmitAttempt::Started(snapshot) = controller.spawn_submit() else {
        panic!("submission should start");
    };
    assert_eq!(snapshot.get("name"), Some("Jo"));
    assert_eq!(snapshot.get("email"), Some("jo@x.com"));
    assert_eq!(snapshot.get("message"), Some("hello"));

    assert_eq!(controller.state(), SubmissionState::Submitting);
    assert!(states.has_changed().unwrap());
    let button = controller.form().submit_button().unwrap().clone();
    assert!(button.is_disabled());
    assert_eq!(button.text(), BUSY_LABEL);

    // a second request while in flight is ignored
    assert_eq!(controller.spawn_submit(), SubmitAttempt::Busy);

    tokio::time::sleep(Duration::from_millis(1999)).await;
    assert_eq!(controller.state(), SubmissionState::Submitting);

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(controller.state(), SubmissionState::Idle);
    assert_eq!(controller.last_outcome(), Some(SubmissionOutcome::Succeeded));

    let form = controller.form();
    assert!(form.fields().iter().all(|f| f.value().is_empty()));
    assert!(form.fields().iter().all(|f| f.is_valid()));
    assert!(!button.is_disabled());
    assert_eq!(button.text(), "Send Message");

    let text = banner_text(&controller, BannerKind::Success).unwrap();
    assert!(text.contains("Message sent successfully!"));
}

#[tokio::test(start_paused = true)]
async fn test_success_banner_dismisses_itself() {
    let (_doc, controller) = controller();
    fill(&controller, "Jo", "jo@x.com", "hello");

    let outcome = controller.submit().await;
    assert_eq!(outcome, Some(SubmissionOutcome::Succeeded));
    let banner = controller.banners().current_of(BannerKind::Success).unwrap();

    tokio::time::sleep(Duration::from_millis(7999)).await;
    assert!(!banner.has_class(FADE_OUT_CLASS));

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert!(banner.has_class(FADE_OUT_CLASS));
    assert!(controller.banners().current().is_some());

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(controller.banners().current().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_failed_submission_keeps_values() {
    let (_doc, controller) = controller_with(Arc::new(FailingTransport));
    fill(&controller, "Jo", "jo@x.com", "hello");

    let outcome = controller.submit().await;
    assert_eq!(outcome, Some(SubmissionOutcome::Failed("mailbox full".to_string())));
    assert_eq!(controller.state(), SubmissionState::Idle);
    assert_eq!(controller.last_outcome(), outcome);

    let form = controller.form();
    assert_eq!(form.field("name").unwrap().value(), "Jo");
    assert_eq!(form.field("message").unwrap().value(), "hello");

    let button = form.submit_button().unwrap();
    assert!(!button.is_disabled());
    assert_eq!(button.text(), "Send Message");

    let text = banner_text(&controller, BannerKind::Error).unwrap();
    assert!(text.contains("mailbox full"));

    tokio::time::sleep(Duration::from_millis(6301)).await;
    assert!(controller.banners().current().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_failed_outcome_is_recorded_and_state_returns_to_idle() {
    let (_doc, controller) = controller_with(Arc::new(FailingTransport));
    fill(&controller, "Jo", "jo@x.com", "hello");
    let mut states = controller.subscribe();

    let SubmitAttempt::Started(snapshot) = controller.begin() else {
        panic!("submission should start");
    };
    assert_eq!(*states.borrow_and_update(), SubmissionState::Submitting);
    assert_eq!(controller.last_outcome(), None);

    let outcome = controller.complete(snapshot).await;
    assert_eq!(outcome, SubmissionOutcome::Failed("mailbox full".to_string()));
    assert_eq!(controller.last_outcome(), Some(outcome));

    // the terminal phase is transient, watchers settle on Idle
    assert!(states.has_changed().unwrap());
    assert_eq!(*states.borrow_and_update(), SubmissionState::Idle);
    assert_eq!(controller.state(), SubmissionState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_new_banner_replaces_pending_one() {
    let (_doc, controller) = controller();
    fill(&controller, "Jo", "jo@x.com", "hello");
    controller.submit().await;
    let success = controller.banners().current_of(BannerKind::Success).unwrap();

    // rejected submit a few seconds later swaps the banner
    tokio::time::sleep(Duration::from_secs(3)).await;
    assert_eq!(controller.begin(), SubmitAttempt::Rejected);
    let error = controller.banners().current_of(BannerKind::Error).unwrap();
    assert_ne!(success, error);

    // the success timer fires at 8s and must leave the error banner alone
    tokio::time::sleep(Duration::from_millis(5400)).await;
    assert!(controller.banners().current_of(BannerKind::Error).is_some());
    assert!(!error.has_class(FADE_OUT_CLASS));

    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert!(controller.banners().current().is_none());
}
