pub mod config;
pub mod input;
pub mod lazy_image;
pub mod navigation;
pub mod notifications;
pub mod viewport;
