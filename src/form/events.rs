//! State-change notifications published by the step controller

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use uuid::Uuid;

use super::data::Field;
use super::schema::FieldErrors;
use super::step::Step;

/// Something observable happened to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The current step moved
    StepChanged { from: Step, to: Step },
    /// Advancing was refused because these fields failed
    ValidationFailed { step: Step, errors: FieldErrors },
    /// Validated fields were written to the store
    Merged { fields: Vec<Field> },
    /// The submission callback accepted the record
    Submitted { id: Uuid },
}

impl FormEvent {
    /// One-line description for status bars and logs
    pub fn summary(&self) -> String {
        match self {
            FormEvent::StepChanged { to, .. } => format!("{}: {}", to, to.title()),
            FormEvent::ValidationFailed { errors, .. } => {
                if errors.len() == 1 {
                    "1 field needs attention".to_string()
                } else {
                    format!("{} fields need attention", errors.len())
                }
            }
            FormEvent::Merged { fields } => {
                let keys: Vec<&str> = fields.iter().map(|f| f.key()).collect();
                format!("Saved {}", keys.join(", "))
            }
            FormEvent::Submitted { .. } => "Form Submitted Successfully!".to_string(),
        }
    }
}

pub type EventSender = UnboundedSender<FormEvent>;
pub type EventReceiver = UnboundedReceiver<FormEvent>;

/// Create the channel a renderer listens on
pub fn channel() -> (EventSender, EventReceiver) {
    tokio::sync::mpsc::unbounded_channel()
}
