//! stepform - a four-step sign-up form with per-step validation
//!
//! The [`form`] module is the UI-agnostic core (schemas, store, step
//! controller); [`ui`] renders it in the terminal.

pub mod app;
pub mod config;
pub mod form;
pub mod logging;
pub mod sink;
pub mod ui;
