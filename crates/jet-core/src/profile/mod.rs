mod request;

pub use request::{ProfileUpdateRequest, ProfileValidationError};
