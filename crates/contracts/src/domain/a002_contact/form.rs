use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Toast shown once the message has been handed to the mail client.
pub const SUCCESS_MESSAGE: &str = "✓ Mensagem preparada! Abrindo cliente de e-mail...";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid e-mail regex"));

/// Field that receives focus when validation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// Validation failures. The display text is shown to the visitor as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactFormError {
    #[error("Por favor, insira seu nome")]
    MissingName,

    #[error("Por favor, insira seu e-mail")]
    MissingEmail,

    #[error("Por favor, insira um e-mail válido")]
    InvalidEmail,

    #[error("Por favor, insira uma mensagem")]
    MissingMessage,
}

impl ContactFormError {
    pub fn field(&self) -> ContactField {
        match self {
            ContactFormError::MissingName => ContactField::Name,
            ContactFormError::MissingEmail | ContactFormError::InvalidEmail => ContactField::Email,
            ContactFormError::MissingMessage => ContactField::Message,
        }
    }
}

/// Raw values as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A form that passed validation; every value is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Checks run in field order and stop at the first failure.
    pub fn validate(&self) -> Result<ContactMessage, ContactFormError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() {
            return Err(ContactFormError::MissingName);
        }
        if email.is_empty() {
            return Err(ContactFormError::MissingEmail);
        }
        if !is_valid_email(email) {
            return Err(ContactFormError::InvalidEmail);
        }
        if message.is_empty() {
            return Err(ContactFormError::MissingMessage);
        }

        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
