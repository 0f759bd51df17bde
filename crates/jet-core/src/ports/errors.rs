use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The provider answered and refused the request. `message` is shown to
    /// the user verbatim.
    #[error("{message}")]
    Rejected { status: Option<u16>, message: String },

    /// The provider could not be reached or answered with something
    /// unreadable.
    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

impl ProviderError {
    pub fn rejected(message: impl Into<String>) -> Self {
        ProviderError::Rejected {
            status: None,
            message: message.into(),
        }
    }
}
