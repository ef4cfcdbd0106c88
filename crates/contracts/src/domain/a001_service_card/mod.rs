//! Service cards: the selectable service tabs on the home page, their detail
//! panels and the independent flip disclosure.

pub mod selector;
pub mod service_id;

pub use selector::{DetailPanel, ServiceCard, ServiceCardSelector};
pub use service_id::ServiceId;
