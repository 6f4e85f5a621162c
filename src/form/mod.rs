//! Framework-agnostic core of the multi-step form.
//!
//! The pieces, leaves first:
//! - [`schema`]: per-field rules and the per-step / combined schemas
//! - [`store`]: accumulated answers, read and merged
//! - [`controller`]: current step, validation-gated advance, submission
//! - [`events`]: notifications a renderer can subscribe to

pub mod controller;
pub mod data;
pub mod error;
pub mod events;
pub mod schema;
pub mod step;
pub mod store;
pub mod submit;

pub use controller::{Advance, StepController};
pub use data::{Field, FormData, FormPatch, PASSWORD_MASK};
pub use error::FormError;
pub use events::FormEvent;
pub use schema::{FieldErrors, FieldSchema, FormSchema, Rule};
pub use step::Step;
pub use store::FormStore;
pub use submit::{SubmitHandler, Submission};
