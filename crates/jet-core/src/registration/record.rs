use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::form::{FormData, FormVariant};
use crate::registration::RegistrationToken;

/// A completed registration as inserted into the `registrations` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub token: RegistrationToken,
    pub variant: FormVariant,
    pub fields: FormData,
    pub submitted_at: DateTime<Utc>,
}
