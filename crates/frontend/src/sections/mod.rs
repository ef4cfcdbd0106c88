//! Page sections, top to bottom.

pub mod about;
pub mod contact;
pub mod hero;
pub mod portfolio;
pub mod services;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use portfolio::Portfolio;
pub use services::Services;
