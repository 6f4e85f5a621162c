//! Form record types: the full record, its fields, and partial updates

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown wherever the password would be displayed
pub const PASSWORD_MASK: &str = "••••••••";

/// A named key of [`FormData`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Address,
    Password,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[Field::Name, Field::Email, Field::Address, Field::Password]
    }

    /// Stable lowercase key, matching the serialized record
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Address => "address",
            Field::Password => "password",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Address => "Address",
            Field::Password => "Password",
        }
    }

    /// Whether the value must never be echoed back to the user
    pub fn is_secret(&self) -> bool {
        matches!(self, Field::Password)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The accumulated answers of the form.
///
/// Every field is a plain string; a blank string means "not entered yet".
/// `Debug` masks the password so records can be logged safely.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub address: String,
    pub password: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Address => &self.address,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Address => self.address = value,
            Field::Password => self.password = value,
        }
    }

    /// Value as it may be shown on screen (password masked)
    pub fn display_value(&self, field: Field) -> &str {
        if field.is_secret() {
            PASSWORD_MASK
        } else {
            self.get(field)
        }
    }

    /// Build a patch carrying only the given fields of this record
    pub fn patch_for(&self, fields: &[Field]) -> FormPatch {
        let mut patch = FormPatch::default();
        for field in fields {
            patch.set(*field, self.get(*field));
        }
        patch
    }
}

impl fmt::Debug for FormData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormData")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("address", &self.address)
            .field("password", &PASSWORD_MASK)
            .finish()
    }
}

/// A partial [`FormData`]: only `Some` fields are written by a merge
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl FormPatch {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Address => self.address.as_deref(),
            Field::Password => self.password.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = Some(value.into());
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Address => self.address = value,
            Field::Password => self.password = value,
        }
    }

    /// Builder-style variant of [`FormPatch::set`]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Fields this patch provides, in declaration order
    pub fn fields(&self) -> Vec<Field> {
        Field::all()
            .iter()
            .copied()
            .filter(|f| self.get(*f).is_some())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }
}

impl fmt::Debug for FormPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormPatch")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("address", &self.address)
            .field("password", &self.password.as_ref().map(|_| PASSWORD_MASK))
            .finish()
    }
}
