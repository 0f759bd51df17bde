use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ids::UserId;

/// Metadata keys written by profile updates and read by the name resolver.
pub mod meta_keys {
    pub const FULL_NAME: &str = "full_name";
    pub const DISPLAY_NAME: &str = "display_name";
    pub const NAME: &str = "name";
    pub const PHONE: &str = "phone";
}

/// Free-form per-user attributes stored by the provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserMetadata(Map<String, Value>);

impl UserMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// String value for `key`; `None` for missing or non-string entries.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// The authenticated user as reported by the provider session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: UserId,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "user_metadata")]
    pub metadata: UserMetadata,
}

impl AuthUser {
    pub fn new(id: impl Into<UserId>, email: Option<String>) -> Self {
        Self {
            id: id.into(),
            email,
            metadata: UserMetadata::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: UserMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}
