use crate::framework::Validate;
use crate::model::ensure_present;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/store/{domain}/contact`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }
}

/// Client-side form checks, run before anything is sent.
impl Validate for ContactMessage {
    fn validate(&self) -> Result<(), String> {
        ensure_present("name", &self.name)?;
        ensure_present("email", &self.email)?;
        ensure_present("subject", &self.subject)?;
        ensure_present("message", &self.message)?;
        let (local, host) = self
            .email
            .trim()
            .split_once('@')
            .ok_or_else(|| format!("email {} is missing '@'", self.email))?;
        if local.is_empty() || host.is_empty() {
            return Err(format!("email {} is incomplete", self.email));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_form_validation() {
        let ok = ContactMessage::new("Rahim", "rahim@example.com", "Order", "Where is my code?");
        assert!(ok.validate().is_ok());

        let no_at = ContactMessage {
            email: "rahim.example.com".into(),
            ..ok.clone()
        };
        assert!(no_at.validate().unwrap_err().contains("missing '@'"));

        let blank_subject = ContactMessage {
            subject: "   ".into(),
            ..ok
        };
        assert_eq!(blank_subject.validate().unwrap_err(), "subject must not be empty");
    }
}
