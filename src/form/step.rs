//! The four screens of the form, in order

use super::data::Field;
use std::fmt;

/// Total number of steps
pub const STEP_COUNT: u8 = 4;

/// Steps in the form, numbered 1 through 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    /// Name and email
    PersonalInfo = 1,
    /// Postal address
    AddressInfo = 2,
    /// Choose a password
    PasswordSetup = 3,
    /// Review everything and submit
    Confirmation = 4,
}

impl Step {
    pub fn all() -> &'static [Step] {
        &[
            Step::PersonalInfo,
            Step::AddressInfo,
            Step::PasswordSetup,
            Step::Confirmation,
        ]
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Step> {
        match index {
            1 => Some(Step::PersonalInfo),
            2 => Some(Step::AddressInfo),
            3 => Some(Step::PasswordSetup),
            4 => Some(Step::Confirmation),
            _ => None,
        }
    }

    /// The step after this one; Confirmation has no successor
    pub fn next(self) -> Option<Step> {
        Step::from_index(self.index() + 1)
    }

    /// The step before this one; PersonalInfo has no predecessor
    pub fn prev(self) -> Option<Step> {
        self.index().checked_sub(1).and_then(Step::from_index)
    }

    pub fn is_first(self) -> bool {
        self == Step::PersonalInfo
    }

    pub fn is_last(self) -> bool {
        self == Step::Confirmation
    }

    /// Fields collected (and validated) on this step
    pub fn fields(self) -> &'static [Field] {
        match self {
            Step::PersonalInfo => &[Field::Name, Field::Email],
            Step::AddressInfo => &[Field::Address],
            Step::PasswordSetup => &[Field::Password],
            Step::Confirmation => &[],
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::PersonalInfo => "Personal Info",
            Step::AddressInfo => "Address",
            Step::PasswordSetup => "Password Setup",
            Step::Confirmation => "Confirm your details",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of {}", self.index(), STEP_COUNT)
    }
}
