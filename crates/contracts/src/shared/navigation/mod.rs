pub mod menu;
pub mod scroll;

pub use menu::NavMenu;
pub use scroll::{ScrollEffects, Section};
