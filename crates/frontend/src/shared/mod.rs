pub mod banner;
pub mod dom;
pub mod icons;
pub mod intersection;
pub mod notifications;
pub mod scroll;
