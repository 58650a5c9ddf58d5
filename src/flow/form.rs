use serde::{Deserialize, Serialize};

use crate::schemas::{service, FieldErrors, InquiryInput};

/// Raw values of the contact form, exactly as typed.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filled(name: &str, phone: &str, service: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.to_string(),
            service: service.to_string(),
            message: message.to_string(),
        }
    }

    /// Pre-select the service named by a `?service=` parameter, but only
    /// when it is one we offer.
    pub fn from_service_param(param: Option<&str>) -> Self {
        match param {
            Some(value) if service::is_known(value) => Self {
                service: value.to_string(),
                ..Self::new()
            },
            _ => Self::new(),
        }
    }

    pub fn input(&self) -> InquiryInput {
        InquiryInput {
            name: self.name.clone(),
            phone: self.phone.clone(),
            service: self.service.clone(),
            message: self.message.clone(),
        }
    }

    pub fn validate(&self) -> Result<InquiryInput, FieldErrors> {
        let input = self.input();

        input.validate()?;
        Ok(input)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.phone.is_empty()
            && self.service.is_empty()
            && self.message.is_empty()
    }

    /// Back to the empty state, prefilled service included.
    pub fn reset(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.service.clear();
        self.message.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("seo"), "seo")]
    #[case(Some("game-dev"), "game-dev")]
    #[case(Some("crypto"), "")]
    #[case(Some(""), "")]
    #[case(None, "")]
    fn test_service_param(#[case] param: Option<&str>, #[case] expected: &str) {
        let form = ContactForm::from_service_param(param);

        assert_eq!(form.service, expected);
        assert_eq!(form.name, "");
        assert_eq!(form.message, "");
    }

    #[test]
    fn test_reset_clears_prefilled_service() {
        let mut form = ContactForm::from_service_param(Some("pentest"));
        assert!(!form.is_empty());

        form.name = "Jo".to_string();
        form.phone = "12345".to_string();
        form.message = "Need better rankings".to_string();

        form.reset();
        assert!(form.is_empty());
        assert_eq!(form.service, "");
        assert_eq!(form, ContactForm::new());
    }

    #[test]
    fn test_validate_keeps_values() {
        let form = ContactForm::filled("Jo", "12345", "seo", "short");

        assert!(form.validate().is_err());
        assert_eq!(form.message, "short");
    }
}
