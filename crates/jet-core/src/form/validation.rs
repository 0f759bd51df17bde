use std::fmt;

use serde::Serialize;

use super::data::FormData;
use super::variant::FormVariant;

pub const MISSING_FIELDS_HEADING: &str = "Please fill in the following required fields:";

/// Banner listing the required fields a submission is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingFieldsView {
    pub heading: &'static str,
    pub entries: Vec<String>,
}

/// Build the missing-fields banner, or nothing when hidden or empty.
///
/// Entries keep input order and duplicates.
pub fn render_missing_fields<S: AsRef<str>>(
    is_visible: bool,
    missing_fields: &[S],
) -> Option<MissingFieldsView> {
    if !is_visible || missing_fields.is_empty() {
        return None;
    }
    Some(MissingFieldsView {
        heading: MISSING_FIELDS_HEADING,
        entries: missing_fields
            .iter()
            .map(|field| field.as_ref().to_string())
            .collect(),
    })
}

/// Labels of required fields that are not filled, in page order.
pub fn missing_required_fields(data: &FormData, variant: FormVariant) -> Vec<String> {
    variant
        .required_fields()
        .filter(|field| !data.get(*field).is_filled())
        .map(|field| field.label().to_string())
        .collect()
}

impl fmt::Display for MissingFieldsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        for entry in &self.entries {
            writeln!(f, "  • {entry}")?;
        }
        Ok(())
    }
}
