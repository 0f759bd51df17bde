//! Registration form domain.
//!
//! Static field schema, form data, the navigation state machine and the pure
//! view models for the progress bar and the missing-fields banner.

mod data;
mod field;
pub mod navigation;
pub mod progress;
pub mod validation;
mod variant;

pub use data::{FormData, FormPatch};
pub use field::{FieldValue, FileRef, FormField};
pub use navigation::{
    NavigationAction, NavigationError, NavigationEvent, NavigationState, NavigationStateMachine,
};
pub use progress::{
    render_progress, ProgressLayout, ProgressView, StepDescriptor, FIVE_STEP_LAYOUT,
    SIX_STEP_LAYOUT,
};
pub use validation::{
    missing_required_fields, render_missing_fields, MissingFieldsView, MISSING_FIELDS_HEADING,
};
pub use variant::FormVariant;
