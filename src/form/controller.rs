//! Step controller: validation-gated navigation through the form

use super::data::{Field, FormData};
use super::error::{FormError, Result};
use super::events::{EventSender, FormEvent};
use super::schema::{self, FieldErrors, FormSchema};
use super::step::Step;
use super::store::FormStore;
use super::submit::{SubmitHandler, Submission};


/// What a successful [`StepController::advance`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved forward one step
    Moved { from: Step, to: Step },
    /// Advance on the confirmation step submitted the form
    Submitted(Submission),
}

/// Drives the four-step form.
///
/// Holds the draft values bound to the inputs, the injected store of
/// validated answers, and the current step. Values only reach the store
/// after every field of their step has passed validation.
pub struct StepController {
    step: Step,
    store: FormStore,
    draft: FormData,
    errors: FieldErrors,
    handler: Box<dyn SubmitHandler>,
    events: Option<EventSender>,
    submission: Option<Submission>,
}

impl StepController {
    /// Start on the first step with an empty store
    pub fn new(handler: impl SubmitHandler + 'static) -> Self {
        Self::with_store(FormStore::new(), handler)
    }

    /// Start on the first step; drafts are seeded from the store's contents
    pub fn with_store(store: FormStore, handler: impl SubmitHandler + 'static) -> Self {
        let draft = store.read().clone();
        Self {
            step: Step::PersonalInfo,
            store,
            draft,
            errors: FieldErrors::default(),
            handler: Box::new(handler),
            events: None,
            submission: None,
        }
    }

    /// Publish state changes on `sender`
    pub fn with_events(mut self, sender: EventSender) -> Self {
        self.events = Some(sender);
        self
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    /// Values currently bound to the inputs, validated or not
    pub fn draft(&self) -> &FormData {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn is_submitted(&self) -> bool {
        self.submission.is_some()
    }

    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    /// Edit a draft value. Ignored once the form has been submitted.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if self.is_submitted() {
            return;
        }
        self.draft.set(field, value);
    }

    /// Re-check one draft field, as when the user leaves an input
    pub fn touch(&mut self, field: Field) -> bool {
        match schema::validate_field(field, self.draft.get(field)) {
            Ok(()) => {
                self.errors.clear_field(field);
                true
            }
            Err(message) => {
                self.errors.insert(field, message);
                false
            }
        }
    }

    /// Validate the current step and move forward.
    ///
    /// On failure nothing is merged and the step does not change. On the
    /// confirmation step this submits instead.
    pub fn advance(&mut self) -> Result<Advance> {
        if self.is_submitted() {
            return Err(FormError::AlreadySubmitted);
        }

        let from = self.step;
        let Some(to) = from.next() else {
            return self.submit().map(Advance::Submitted);
        };

        if let Err(errors) = FormSchema::for_step(from).validate(&self.draft) {
            return Err(self.reject(from, errors));
        }

        let fields = self.store.merge(&self.draft.patch_for(from.fields()));
        tracing::debug!(step = from.index(), fields = ?fields, "Merged step fields");
        self.emit(FormEvent::Merged { fields });

        self.errors.clear();
        self.step = to;
        tracing::info!(from = from.index(), to = to.index(), "Advanced");
        self.emit(FormEvent::StepChanged { from, to });

        Ok(Advance::Moved { from, to })
    }

    /// Go back one step. No-op on the first step and after submission.
    ///
    /// Neither drafts nor stored values are touched.
    pub fn retreat(&mut self) -> Step {
        if self.is_submitted() {
            return self.step;
        }
        if let Some(to) = self.step.prev() {
            let from = self.step;
            self.step = to;
            self.errors.clear();
            tracing::info!(from = from.index(), to = to.index(), "Went back");
            self.emit(FormEvent::StepChanged { from, to });
        }
        self.step
    }

    /// Validate the whole record and hand it to the submission handler.
    ///
    /// Only valid on the confirmation step and only once.
    pub fn submit(&mut self) -> Result<Submission> {
        if self.is_submitted() {
            return Err(FormError::AlreadySubmitted);
        }
        if !self.step.is_last() {
            return Err(FormError::NotAtConfirmation(self.step));
        }

        let data = self.store.read().clone();
        if let Err(errors) = FormSchema::combined().validate(&data) {
            return Err(self.reject(self.step, errors));
        }

        let submission = Submission::new(data);
        if let Err(e) = self.handler.submit(&submission) {
            tracing::warn!(id = %submission.id, error = %e, "Submission handler failed");
            return Err(FormError::Handler(e));
        }

        tracing::info!(id = %submission.id, record = ?submission.data, "Form submitted");
        self.emit(FormEvent::Submitted { id: submission.id });
        self.submission = Some(submission.clone());
        Ok(submission)
    }

    fn reject(&mut self, step: Step, errors: FieldErrors) -> FormError {
        tracing::warn!(
            step = step.index(),
            fields = ?errors.fields(),
            "Validation failed"
        );
        self.errors = errors.clone();
        self.emit(FormEvent::ValidationFailed {
            step,
            errors: errors.clone(),
        });
        FormError::Validation(errors)
    }

    fn emit(&self, event: FormEvent) {
        if let Some(ref tx) = self.events {
            // Receiver may already be gone
            let _ = tx.send(event);
        }
    }
}
