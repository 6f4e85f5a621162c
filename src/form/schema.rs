//! Validation rules for each field, grouped into per-step schemas

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

use super::data::{Field, FormData};
use super::step::Step;

pub const NAME_MIN_LEN: usize = 2;
pub const ADDRESS_MIN_LEN: usize = 5;
pub const PASSWORD_MIN_LEN: usize = 6;

/// `local@domain.tld`. The local part is dot-separated runs (no leading,
/// trailing or doubled dot); the domain needs at least one dot and a
/// final label of 2+ letters.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:[A-Za-z0-9_'+-]+\.)*[A-Za-z0-9_'+-]*[A-Za-z0-9_+-]@(?:[A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$",
    )
    .expect("hardcoded email regex pattern is valid")
});

static STEP_SCHEMAS: Lazy<Vec<(Step, FormSchema)>> = Lazy::new(|| {
    Step::all()
        .iter()
        .map(|step| {
            let rules = step.fields().iter().map(|f| FieldSchema::for_field(*f));
            (*step, FormSchema::new(rules))
        })
        .collect()
});

static COMBINED_SCHEMA: Lazy<FormSchema> = Lazy::new(|| {
    FormSchema::union(STEP_SCHEMAS.iter().map(|(_, schema)| schema))
});

/// A single check applied to a raw input value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// At least this many characters
    MinLength(usize),
    /// Syntactically valid email address
    Email,
}

impl Rule {
    pub fn check(&self, value: &str) -> bool {
        match self {
            Rule::MinLength(min) => value.chars().count() >= *min,
            Rule::Email => EMAIL_PATTERN.is_match(value),
        }
    }
}

/// A rule bound to a field, plus the message shown when it fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    pub field: Field,
    pub rule: Rule,
    pub message: &'static str,
}

impl FieldSchema {
    /// The fixed rule for a field
    pub fn for_field(field: Field) -> Self {
        let (rule, message) = match field {
            Field::Name => (
                Rule::MinLength(NAME_MIN_LEN),
                "Name must be at least 2 characters",
            ),
            Field::Email => (Rule::Email, "Invalid email address"),
            Field::Address => (
                Rule::MinLength(ADDRESS_MIN_LEN),
                "Address must be at least 5 characters",
            ),
            Field::Password => (
                Rule::MinLength(PASSWORD_MIN_LEN),
                "Password must be at least 6 characters",
            ),
        };
        Self {
            field,
            rule,
            message,
        }
    }

    pub fn validate(&self, value: &str) -> Result<(), &'static str> {
        if self.rule.check(value) {
            Ok(())
        } else {
            Err(self.message)
        }
    }
}

/// Check a single field's raw value against its fixed rule
pub fn validate_field(field: Field, value: &str) -> Result<(), &'static str> {
    FieldSchema::for_field(field).validate(value)
}

/// An ordered set of field rules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSchema {
    rules: Vec<FieldSchema>,
}

impl FormSchema {
    pub fn new(rules: impl IntoIterator<Item = FieldSchema>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Concatenate schemas; a field already present keeps its first rule
    pub fn union<'a>(schemas: impl IntoIterator<Item = &'a FormSchema>) -> Self {
        let mut rules: Vec<FieldSchema> = Vec::new();
        for schema in schemas {
            for rule in &schema.rules {
                if !rules.iter().any(|r| r.field == rule.field) {
                    rules.push(rule.clone());
                }
            }
        }
        Self { rules }
    }

    /// Schema gating the given step
    pub fn for_step(step: Step) -> &'static FormSchema {
        STEP_SCHEMAS
            .iter()
            .find(|(s, _)| *s == step)
            .map(|(_, schema)| schema)
            .unwrap_or(&COMBINED_SCHEMA)
    }

    /// Union of every step's schema, the authority at submission time
    pub fn combined() -> &'static FormSchema {
        &COMBINED_SCHEMA
    }

    pub fn rules(&self) -> &[FieldSchema] {
        &self.rules
    }

    pub fn fields(&self) -> Vec<Field> {
        self.rules.iter().map(|r| r.field).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Validate every covered field of `data`, collecting all failures
    pub fn validate(&self, data: &FormData) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        for rule in &self.rules {
            if let Err(message) = rule.validate(data.get(rule.field)) {
                errors.insert(rule.field, message);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Per-field validation messages from one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> Vec<Field> {
        self.0.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear_field(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{field}: {msg}"))
            .collect();
        f.write_str(&parts.join("; "))
    }
}
