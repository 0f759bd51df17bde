use async_trait::async_trait;
use jet_core::ports::{ProviderError, RegistrationStorePort};
use jet_core::registration::RegistrationRecord;
use reqwest::Method;
use tracing::info;

use super::client::ProviderClient;

const REGISTRATIONS_PATH: &str = "rest/v1/registrations";

/// Inserts completed registrations into the provider's `registrations` table.
///
/// Form visitors have no session, so inserts authenticate with the anon key.
pub struct HttpRegistrationStore {
    client: ProviderClient,
}

impl HttpRegistrationStore {
    pub fn new(client: ProviderClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RegistrationStorePort for HttpRegistrationStore {
    async fn insert_registration(&self, record: &RegistrationRecord) -> Result<(), ProviderError> {
        let request = self
            .client
            .request(Method::POST, REGISTRATIONS_PATH, None)
            .header("Prefer", "return=minimal")
            .json(record);
        self.client.send(request).await?;
        info!(token = %record.token, "registration inserted");
        Ok(())
    }
}
