//! Form session runtime.
//!
//! One [`FormSession`] per visitor filling the registration form. Nothing in
//! here is process-global, so concurrent sessions never share state.

mod navigator;
mod session;
mod store;

pub use navigator::FormNavigator;
pub use session::FormSession;
pub use store::FormDataStore;
