mod layout;
pub mod terminal_guard;
pub mod text_input;
pub mod wizard;

pub use terminal_guard::{install_panic_hook, TerminalGuard};
pub use wizard::{WizardResult, WizardScreen};
