//! Integration tests for the full form flow through the public API
//!
//! Drives a `StepController` the way a front end would and checks what
//! reaches the submission handler.
//!
//! ```bash
//! cargo test --test form_flow
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use stepform::form::{
    events, Advance, Field, FormError, FormEvent, FormStore, Step, StepController, Submission,
};
use stepform::sink::JsonSink;
use tempfile::TempDir;

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn recorder() -> (Rc<RefCell<Vec<Submission>>>, StepController) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let controller = StepController::new(move |s: &Submission| -> anyhow::Result<()> {
        sink.borrow_mut().push(s.clone());
        Ok(())
    });
    (seen, controller)
}

fn fill(controller: &mut StepController, name: &str, email: &str, address: &str, pw: &str) {
    controller.set_field(Field::Name, name);
    controller.set_field(Field::Email, email);
    controller.set_field(Field::Address, address);
    controller.set_field(Field::Password, pw);
}

fn advance_to(controller: &mut StepController, target: Step) {
    while controller.step() != target {
        controller.advance().unwrap();
    }
}

// ─── Flow ────────────────────────────────────────────────────────────────────

#[test]
fn test_full_walkthrough_submits_record_once() {
    let (seen, mut controller) = recorder();
    fill(&mut controller, "Al", "a@b.com", "123 Rd", "abcdef");

    advance_to(&mut controller, Step::Confirmation);
    let result = controller.advance().unwrap();

    let Advance::Submitted(submission) = result else {
        panic!("expected a submission, got {:?}", result);
    };
    assert_eq!(submission.data.name, "Al");
    assert_eq!(submission.data.email, "a@b.com");
    assert_eq!(submission.data.address, "123 Rd");
    assert_eq!(submission.data.password, "abcdef");

    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(seen.borrow()[0], submission);

    // A second press does not deliver the record again
    assert!(matches!(
        controller.advance(),
        Err(FormError::AlreadySubmitted)
    ));
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn test_invalid_step_blocks_until_fixed() {
    let (seen, mut controller) = recorder();
    fill(&mut controller, "A", "a@b.com", "123 Rd", "abcdef");

    let err = controller.advance().unwrap_err();
    let errors = err.field_errors().unwrap();
    assert_eq!(errors.get(Field::Name), Some("Name must be at least 2 characters"));
    assert_eq!(controller.step(), Step::PersonalInfo);
    assert!(controller.store().read().name.is_empty());

    controller.set_field(Field::Name, "Al");
    controller.advance().unwrap();
    assert_eq!(controller.step(), Step::AddressInfo);
    assert!(controller.errors().is_empty());
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_back_and_forth_keeps_answers() {
    let (_seen, mut controller) = recorder();
    fill(&mut controller, "Al", "a@b.com", "123 Rd", "abcdef");
    advance_to(&mut controller, Step::PasswordSetup);

    assert_eq!(controller.retreat(), Step::AddressInfo);
    assert_eq!(controller.retreat(), Step::PersonalInfo);
    assert_eq!(controller.retreat(), Step::PersonalInfo);

    assert_eq!(controller.draft().name, "Al");
    assert_eq!(controller.store().read().address, "123 Rd");

    advance_to(&mut controller, Step::Confirmation);
    assert_eq!(controller.store().read().password, "abcdef");
}

#[test]
fn test_prefilled_store_seeds_drafts() {
    let mut store = FormStore::new();
    store.merge(
        &stepform::form::FormPatch::default()
            .with(Field::Name, "Grace")
            .with(Field::Email, "grace@example.com"),
    );

    let controller = StepController::with_store(store, |_: &Submission| -> anyhow::Result<()> {
        Ok(())
    });
    assert_eq!(controller.draft().name, "Grace");
    assert_eq!(controller.draft().email, "grace@example.com");
    assert_eq!(controller.step(), Step::PersonalInfo);
}

#[test]
fn test_events_are_published_in_order() {
    let (tx, mut rx) = events::channel();
    let (_seen, controller) = recorder();
    let mut controller = controller.with_events(tx);

    controller.advance().unwrap_err();
    fill(&mut controller, "Al", "a@b.com", "123 Rd", "abcdef");
    controller.advance().unwrap();

    let first = rx.try_recv().unwrap();
    assert!(matches!(
        first,
        FormEvent::ValidationFailed {
            step: Step::PersonalInfo,
            ..
        }
    ));
    assert!(matches!(rx.try_recv().unwrap(), FormEvent::Merged { .. }));
    assert_eq!(
        rx.try_recv().unwrap(),
        FormEvent::StepChanged {
            from: Step::PersonalInfo,
            to: Step::AddressInfo,
        }
    );
    assert!(rx.try_recv().is_err());
}

// ─── JSON sink ───────────────────────────────────────────────────────────────

#[test]
fn test_json_sink_receives_submission() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("submission.json");
    let mut controller = StepController::new(JsonSink::new(Some(path.clone())));

    fill(&mut controller, "Al", "a@b.com", "123 Rd", "abcdef");
    advance_to(&mut controller, Step::Confirmation);
    let submission = controller.submit().unwrap();

    let written: Submission =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written.id, submission.id);
    assert_eq!(written.data, submission.data);
}

#[test]
fn test_failed_sink_leaves_form_open() {
    let temp_dir = TempDir::new().unwrap();
    // a directory path cannot be written as a file
    let mut controller = StepController::new(JsonSink::new(Some(temp_dir.path().to_path_buf())));

    fill(&mut controller, "Al", "a@b.com", "123 Rd", "abcdef");
    advance_to(&mut controller, Step::Confirmation);

    assert!(matches!(controller.submit(), Err(FormError::Handler(_))));
    assert!(!controller.is_submitted());
    assert_eq!(controller.step(), Step::Confirmation);
}
