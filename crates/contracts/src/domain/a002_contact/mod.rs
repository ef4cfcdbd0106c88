//! Contact form: client-side validation and `mailto:` composition.

pub mod form;
pub mod mailto;

pub use form::{ContactField, ContactForm, ContactFormError, ContactMessage, SUCCESS_MESSAGE};
pub use mailto::mailto_link;
