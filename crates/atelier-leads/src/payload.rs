//! Wire payload delivered to the automation webhook

use crate::form::FormState;
use serde::{Deserialize, Serialize};

/// JSON body of a lead submission.
///
/// The country code is not transmitted as its own field: it is folded into
/// `phone` as `"<code> <raw digits>"`, space-separated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl LeadPayload {
    pub fn from_form(form: &FormState) -> Self {
        Self {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            email: form.email.clone(),
            phone: format!("{} {}", form.country_code.code(), form.phone),
            message: form.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FormField, FormState};

    fn ada() -> FormState {
        FormState::default()
            .with_field(FormField::FirstName, "Ada")
            .with_field(FormField::LastName, "Lovelace")
            .with_field(FormField::Email, "ada@example.com")
            .with_field(FormField::CountryCode, "ES")
            .with_field(FormField::Phone, "600111222")
            .with_field(FormField::Message, "Hello")
    }

    #[test]
    fn phone_is_code_and_digits_space_separated() {
        let payload = LeadPayload::from_form(&ada());
        assert_eq!(payload.phone, "ES 600111222");
    }

    #[test]
    fn serializes_to_the_exact_webhook_body() {
        let body = serde_json::to_string(&LeadPayload::from_form(&ada())).unwrap();
        assert_eq!(
            body,
            r#"{"firstName":"Ada","lastName":"Lovelace","email":"ada@example.com","phone":"ES 600111222","message":"Hello"}"#
        );
    }

    #[test]
    fn default_form_payload_keeps_us_prefix() {
        let payload = LeadPayload::from_form(&FormState::default());
        assert_eq!(payload.phone, "US ");
        assert_eq!(payload.first_name, "");
    }
}
