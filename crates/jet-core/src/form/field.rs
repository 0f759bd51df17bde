use serde::{Deserialize, Serialize};

/// Fields of the team registration form.
///
/// The schema is static: every [`FormData`](super::FormData) always holds a
/// value for each variant, possibly the default one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    TeamName,
    InstitutionName,
    Sport,
    CaptainFullName,
    CaptainEmail,
    CaptainPhone,
    CaptainIdCard,
    PlayerIdCards,
    PaymentReceipt,
    TransactionId,
    AcceptRules,
}

impl FormField {
    pub const ALL: [FormField; 11] = [
        FormField::TeamName,
        FormField::InstitutionName,
        FormField::Sport,
        FormField::CaptainFullName,
        FormField::CaptainEmail,
        FormField::CaptainPhone,
        FormField::CaptainIdCard,
        FormField::PlayerIdCards,
        FormField::PaymentReceipt,
        FormField::TransactionId,
        FormField::AcceptRules,
    ];

    /// Human label shown in the missing-fields banner.
    pub fn label(self) -> &'static str {
        match self {
            FormField::TeamName => "Team Name",
            FormField::InstitutionName => "Institution",
            FormField::Sport => "Sport",
            FormField::CaptainFullName => "Full Name",
            FormField::CaptainEmail => "Email",
            FormField::CaptainPhone => "Phone Number",
            FormField::CaptainIdCard => "Captain ID Card",
            FormField::PlayerIdCards => "Player ID Cards",
            FormField::PaymentReceipt => "Payment Receipt",
            FormField::TransactionId => "Transaction ID",
            FormField::AcceptRules => "Tournament Rules Agreement",
        }
    }

    pub fn default_value(self) -> FieldValue {
        match self {
            FormField::CaptainIdCard | FormField::PaymentReceipt => FieldValue::Empty,
            FormField::PlayerIdCards => FieldValue::Files(Vec::new()),
            FormField::AcceptRules => FieldValue::Flag(false),
            _ => FieldValue::Text(String::new()),
        }
    }
}

/// Reference to an upload held by the provider's object storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
    pub content_type: String,
    pub size_bytes: u64,
    pub storage_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Empty,
    Text(String),
    File(FileRef),
    Files(Vec<FileRef>),
    Flag(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Whether the value counts as provided for required-field checks.
    ///
    /// Whitespace-only text, empty file lists and an unchecked flag are not.
    pub fn is_filled(&self) -> bool {
        match self {
            FieldValue::Empty => false,
            FieldValue::Text(s) => !s.trim().is_empty(),
            FieldValue::File(_) => true,
            FieldValue::Files(files) => !files.is_empty(),
            FieldValue::Flag(checked) => *checked,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Empty
    }
}
