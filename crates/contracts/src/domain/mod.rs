pub mod a001_service_card;
pub mod a002_contact;
