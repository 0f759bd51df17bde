//! Registration identifiers and the record stored with the provider.

mod record;
mod token;

pub use record::RegistrationRecord;
pub use token::{
    is_valid_registration_token, EntropySource, RegistrationToken, TokenError, TOKEN_ALPHABET,
    TOKEN_PREFIX, TOKEN_SUFFIX_LEN,
};
