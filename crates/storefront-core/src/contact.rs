//! Contact form validation and simulated submission.
//!
//! Nothing is sent anywhere; a valid form reports success and resets.

use std::time::Duration;

use crate::error::ContactError;

/// How long a status message stays visible.
pub const STATUS_TTL: Duration = Duration::from_secs(4);

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill name and phone.";
pub const SENT_MESSAGE: &str = "Message sent — we will call to confirm your pickup.";

/// Raw form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
}

/// A validated, trimmed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub phone: String,
}

/// Inline status shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactStatus {
    Sent(String),
    Invalid(String),
}

impl ContactStatus {
    pub fn message(&self) -> &str {
        match self {
            ContactStatus::Sent(msg) | ContactStatus::Invalid(msg) => msg,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ContactStatus::Invalid(_))
    }
}

impl ContactForm {
    pub fn new(name: &str, phone: &str) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.to_string(),
        }
    }

    /// Both fields are required after trimming.
    pub fn validate(&self) -> Result<ContactRequest, ContactError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        let phone = self.phone.trim();
        if phone.is_empty() {
            return Err(ContactError::MissingField("phone"));
        }
        Ok(ContactRequest {
            name: name.to_string(),
            phone: phone.to_string(),
        })
    }

    /// Validate and "send". On success the form is cleared.
    pub fn submit(&mut self) -> ContactStatus {
        match self.validate() {
            Ok(request) => {
                tracing::info!("Contact request from {} ({})", request.name, request.phone);
                self.reset();
                ContactStatus::Sent(SENT_MESSAGE.to_string())
            }
            Err(e) => {
                tracing::debug!("Contact form rejected: {}", e);
                ContactStatus::Invalid(MISSING_FIELDS_MESSAGE.to_string())
            }
        }
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.phone.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_trims() {
        let form = ContactForm::new("  Ada ", " 555-0100 ");
        let request = form.validate().unwrap();
        assert_eq!(request.name, "Ada");
        assert_eq!(request.phone, "555-0100");
    }

    #[test]
    fn missing_fields() {
        assert_eq!(
            ContactForm::new(" ", "555").validate(),
            Err(ContactError::MissingField("name"))
        );
        assert_eq!(
            ContactForm::new("Ada", "").validate(),
            Err(ContactError::MissingField("phone"))
        );
    }

    #[test]
    fn submit_resets_only_on_success() {
        let mut form = ContactForm::new("Ada", "");
        let status = form.submit();
        assert!(status.is_error());
        assert_eq!(status.message(), MISSING_FIELDS_MESSAGE);
        assert_eq!(form.name, "Ada");

        form.phone = "555-0100".into();
        let status = form.submit();
        assert_eq!(status, ContactStatus::Sent(SENT_MESSAGE.to_string()));
        assert_eq!(form, ContactForm::default());
    }
}
