use async_trait::async_trait;

use crate::ports::ProviderError;
use crate::registration::RegistrationRecord;

#[async_trait]
pub trait RegistrationStorePort: Send + Sync {
    async fn insert_registration(&self, record: &RegistrationRecord) -> Result<(), ProviderError>;
}
