//! In-memory holder of the accumulated form answers

use super::data::{Field, FormData, FormPatch};

/// Accumulated answers shared by the step controller (writer) and the
/// confirmation screen (reader).
///
/// Performs no validation; callers decide what is merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStore {
    data: FormData,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing record, e.g. defaults supplied by the host
    pub fn with_data(data: FormData) -> Self {
        Self { data }
    }

    /// Current accumulated record
    pub fn read(&self) -> &FormData {
        &self.data
    }

    /// Overwrite only the keys present in `patch`; returns the fields written
    pub fn merge(&mut self, patch: &FormPatch) -> Vec<Field> {
        let fields = patch.fields();
        for field in &fields {
            if let Some(value) = patch.get(*field) {
                self.data.set(*field, value);
            }
        }
        fields
    }

    /// Replace the whole record. Only hosts call this, never mid-flow.
    pub fn replace(&mut self, data: FormData) {
        self.data = data;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_blank() {
        let store = FormStore::new();
        for field in Field::all() {
            assert!(store.read().get(*field).is_empty());
        }
    }

    #[test]
    fn test_merge_overwrites_only_provided_keys() {
        let mut store = FormStore::new();
        store.merge(
            &FormPatch::default()
                .with(Field::Name, "Ada")
                .with(Field::Email, "ada@example.com"),
        );

        let written = store.merge(&FormPatch::default().with(Field::Address, "12 Analytical Way"));
        assert_eq!(written, vec![Field::Address]);

        let data = store.read();
        assert_eq!(data.name, "Ada");
        assert_eq!(data.email, "ada@example.com");
        assert_eq!(data.address, "12 Analytical Way");
        assert!(data.password.is_empty());
    }

    #[test]
    fn test_merge_is_idempotent() {
        let patch = FormPatch::default()
            .with(Field::Name, "Ada")
            .with(Field::Password, "abcdef");

        let mut once = FormStore::new();
        once.merge(&patch);

        let mut twice = FormStore::new();
        twice.merge(&patch);
        twice.merge(&patch);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let mut store = FormStore::new();
        store.merge(&FormPatch::default().with(Field::Name, "Ada"));
        let before = store.clone();

        assert!(store.merge(&FormPatch::default()).is_empty());
        assert_eq!(store, before);
    }

    #[test]
    fn test_merge_can_overwrite_with_blank() {
        let mut store = FormStore::new();
        store.merge(&FormPatch::default().with(Field::Name, "Ada"));
        store.merge(&FormPatch::default().with(Field::Name, ""));
        assert!(store.read().name.is_empty());
    }
}
