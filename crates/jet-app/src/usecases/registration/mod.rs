mod submit;

pub use submit::{SubmitRegistration, SubmitRegistrationError};
