use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Service;

pub const MIN_NAME: usize = 2;
pub const MIN_PHONE: usize = 5;
pub const MIN_MESSAGE: usize = 10;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Phone,
    Service,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Service => "service",
            Field::Message => "message",
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

pub type FieldErrors = Vec<FieldError>;

/// What a caller may send to create an inquiry. `id` and `createdAt` are
/// owned by the store and silently dropped if supplied.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct InquiryInput {
    pub name: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

/// A stored inquiry. Never updated or deleted once created.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub service: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Error body of a store that refused a record.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Rejection {
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl InquiryInput {
    /// Check every field and report all failures in form order.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.name.chars().count() < MIN_NAME {
            errors.push(FieldError {
                field: Field::Name,
                message: "Name must be at least 2 characters".to_string(),
            });
        }
        if self.phone.chars().count() < MIN_PHONE {
            errors.push(FieldError {
                field: Field::Phone,
                message: "Please enter a valid phone number".to_string(),
            });
        }
        if self.service.parse::<Service>().is_err() {
            errors.push(FieldError {
                field: Field::Service,
                message: "Please select a service".to_string(),
            });
        }
        if self.message.chars().count() < MIN_MESSAGE {
            errors.push(FieldError {
                field: Field::Message,
                message: "Message must be at least 10 characters".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn valid() -> InquiryInput {
        InquiryInput {
            name: "Jo".to_string(),
            phone: "12345".to_string(),
            service: "seo".to_string(),
            message: "Need better rankings".to_string(),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[rstest]
    #[case(InquiryInput { name: "A".to_string(), ..valid() }, Field::Name)]
    #[case(InquiryInput { phone: "1234".to_string(), ..valid() }, Field::Phone)]
    #[case(InquiryInput { service: "crypto".to_string(), ..valid() }, Field::Service)]
    #[case(InquiryInput { service: String::new(), ..valid() }, Field::Service)]
    #[case(InquiryInput { service: "SEO Optimization".to_string(), ..valid() }, Field::Service)]
    #[case(InquiryInput { message: "Too short".to_string(), ..valid() }, Field::Message)]
    fn test_single_field_failure(#[case] input: InquiryInput, #[case] field: Field) {
        let errors = input.validate().unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, field);
    }

    #[test]
    fn test_all_failures_are_reported_in_form_order() {
        let errors = InquiryInput::default().validate().unwrap_err();
        let fields = errors.iter().map(|error| error.field).collect::<Vec<_>>();

        assert_eq!(
            fields,
            vec![Field::Name, Field::Phone, Field::Service, Field::Message]
        );
        assert_eq!(errors[0].message, "Name must be at least 2 characters");
    }

    #[test]
    fn test_length_counts_characters() {
        // two characters, four bytes
        let input = InquiryInput {
            name: "Ðô".to_string(),
            ..valid()
        };
        assert_eq!(input.validate(), Ok(()));
    }

    #[test]
    fn test_store_owned_fields_are_ignored() {
        let input: InquiryInput = serde_json::from_str(
            r#"{"id":99,"createdAt":"2020-01-01T00:00:00Z","name":"Jo","phone":"12345","service":"seo","message":"Need better rankings"}"#,
        )
        .unwrap();

        assert_eq!(input, valid());
    }

    #[test]
    fn test_inquiry_wire_shape_is_camel_case() {
        let inquiry = Inquiry {
            id: 1,
            name: "Jo".to_string(),
            phone: "12345".to_string(),
            service: "seo".to_string(),
            message: "Need better rankings".to_string(),
            created_at: "2026-10-18T10:00:00Z".parse().unwrap(),
        };
        let value = serde_json::to_value(&inquiry).unwrap();

        assert_eq!(value["createdAt"], "2026-10-18T10:00:00Z");
        assert_eq!(value["id"], 1);
    }
}
