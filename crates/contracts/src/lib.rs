//! Domain model and state machines of the Monteví Engenharia site.
//!
//! Nothing here touches the browser: the frontend crate owns the DOM and
//! forwards native events into these types as plain method calls.

pub mod domain;
pub mod shared;
