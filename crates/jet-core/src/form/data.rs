use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::field::{FieldValue, FormField};

static EMPTY_VALUE: FieldValue = FieldValue::Empty;

/// Registration form contents keyed by the static [`FormField`] schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<FormField, FieldValue>", into = "BTreeMap<FormField, FieldValue>")]
pub struct FormData {
    values: BTreeMap<FormField, FieldValue>,
}

impl FormData {
    pub fn get(&self, field: FormField) -> &FieldValue {
        self.values.get(&field).unwrap_or(&EMPTY_VALUE)
    }

    /// Set one field, returning the previous value.
    pub fn set(&mut self, field: FormField, value: FieldValue) -> FieldValue {
        self.values.insert(field, value).unwrap_or_default()
    }

    /// Apply every entry of `patch`; untouched fields keep their values.
    pub fn apply(&mut self, patch: FormPatch) {
        for (field, value) in patch.entries {
            self.values.insert(field, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &FieldValue)> {
        self.values.iter().map(|(field, value)| (*field, value))
    }
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            values: FormField::ALL
                .iter()
                .map(|field| (*field, field.default_value()))
                .collect(),
        }
    }
}

impl From<BTreeMap<FormField, FieldValue>> for FormData {
    fn from(stored: BTreeMap<FormField, FieldValue>) -> Self {
        let mut data = FormData::default();
        data.values.extend(stored);
        data
    }
}

impl From<FormData> for BTreeMap<FormField, FieldValue> {
    fn from(data: FormData) -> Self {
        data.values
    }
}

/// A batch of field updates applied as one state change.
///
/// Later entries for the same field win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPatch {
    entries: Vec<(FormField, FieldValue)>,
}

impl FormPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: FormField, value: FieldValue) -> Self {
        self.entries.push((field, value));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl FromIterator<(FormField, FieldValue)> for FormPatch {
    fn from_iter<T: IntoIterator<Item = (FormField, FieldValue)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
