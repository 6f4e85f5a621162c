//! Terminal front end for the four-step form

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;

use crate::form::events::{self, EventReceiver};
use crate::form::{
    Advance, Field, FormError, FormStore, Step, StepController, SubmitHandler, Submission,
};
use crate::ui::text_input::TextInput;

mod confirm;
mod steps;


/// Result of a key press on the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardResult {
    /// Keep running
    Continue,
    /// The form was submitted; the success banner is now showing
    Submitted(Submission),
    /// Leave the wizard
    Quit,
}

/// The form's screens, inputs, and the controller behind them
pub struct WizardScreen {
    pub(crate) controller: StepController,
    /// Bound inputs, one per field
    pub(crate) inputs: HashMap<Field, TextInput>,
    /// Index of the focused input within the current step's fields
    pub(crate) focus: usize,
    /// Latest notification from the controller, shown in the status line
    pub(crate) status: Option<String>,
    /// Problem the user should see that is not tied to a field
    pub(crate) alert: Option<String>,
    events: EventReceiver,
}

impl WizardScreen {
    /// Create a wizard that hands the finished record to `handler`
    pub fn new(handler: impl SubmitHandler + 'static) -> Self {
        Self::with_store(FormStore::new(), handler)
    }

    /// Create a wizard whose inputs start from the values already in `store`
    pub fn with_store(store: FormStore, handler: impl SubmitHandler + 'static) -> Self {
        let (tx, rx) = events::channel();
        let controller = StepController::with_store(store, handler).with_events(tx);

        let inputs = Field::all()
            .iter()
            .map(|field| {
                let mut input = TextInput::new(field.label());
                if field.is_secret() {
                    input = input.masked();
                }
                input.set_value(controller.draft().get(*field));
                (*field, input)
            })
            .collect();

        Self {
            controller,
            inputs,
            focus: 0,
            status: None,
            alert: None,
            events: rx,
        }
    }

    pub fn step(&self) -> Step {
        self.controller.step()
    }

    pub fn controller(&self) -> &StepController {
        &self.controller
    }

    /// Field with keyboard focus, if the current step has inputs
    pub fn focused_field(&self) -> Option<Field> {
        self.step().fields().get(self.focus).copied()
    }

    /// Pull pending controller notifications into the status line
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            tracing::debug!(event = ?event, "Form event");
            self.status = Some(event.summary());
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> WizardResult {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return WizardResult::Quit;
        }

        // Success banner: any key leaves
        if self.controller.is_submitted() {
            return WizardResult::Quit;
        }

        match key.code {
            KeyCode::Enter => self.next(),
            KeyCode::Esc => {
                self.back();
                WizardResult::Continue
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                WizardResult::Continue
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                WizardResult::Continue
            }
            code => {
                self.edit_focused(code);
                WizardResult::Continue
            }
        }
    }

    /// "Next" on input steps, "Submit" on the confirmation step
    fn next(&mut self) -> WizardResult {
        self.alert = None;
        match self.controller.advance() {
            Ok(Advance::Moved { .. }) => {
                self.focus = 0;
                WizardResult::Continue
            }
            Ok(Advance::Submitted(submission)) => WizardResult::Submitted(submission),
            Err(FormError::Validation(errors)) => {
                // Put the cursor on the first field that needs fixing
                if let Some(pos) = self
                    .step()
                    .fields()
                    .iter()
                    .position(|f| errors.contains(*f))
                {
                    self.focus = pos;
                } else if self.step().is_last() {
                    self.alert = Some(format!("Cannot submit: {}", errors));
                }
                WizardResult::Continue
            }
            Err(e) => {
                self.alert = Some(e.to_string());
                WizardResult::Continue
            }
        }
    }

    fn back(&mut self) {
        self.alert = None;
        self.controller.retreat();
        self.focus = 0;
    }

    fn focus_next(&mut self) {
        let count = self.step().fields().len();
        if count == 0 {
            return;
        }
        self.touch_focused();
        self.focus = (self.focus + 1) % count;
    }

    fn focus_prev(&mut self) {
        let count = self.step().fields().len();
        if count == 0 {
            return;
        }
        self.touch_focused();
        self.focus = if self.focus == 0 {
            count - 1
        } else {
            self.focus - 1
        };
    }

    /// Validate the field being left, but only once something was typed
    fn touch_focused(&mut self) {
        if let Some(field) = self.focused_field() {
            if !self.controller.draft().get(field).is_empty() {
                self.controller.touch(field);
            }
        }
    }

    fn edit_focused(&mut self, code: KeyCode) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if let Some(input) = self.inputs.get_mut(&field) {
            if input.handle_key(code) {
                self.controller.set_field(field, input.value());
            }
        }
    }

    /// Render the current step
    pub fn render(&self, frame: &mut Frame) {
        if self.controller.is_submitted() {
            self.render_success(frame);
        } else if self.step().is_last() {
            self.render_confirm_step(frame);
        } else {
            self.render_input_step(frame);
        }
    }
}
