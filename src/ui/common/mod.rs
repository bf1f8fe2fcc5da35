//! Small shared view components.

mod form;
mod message;
mod spinner;
mod toast;

pub use form::FormField;
pub use message::{ErrorMessage, SuccessMessage};
pub use spinner::Spinner;
pub use toast::Flash;
