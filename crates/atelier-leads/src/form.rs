//! Contact form state
//!
//! The form is modeled as an immutable record: every edit consumes the
//! current state and returns a new one with exactly the named field
//! replaced. The rendering layer reacts to the value change.

/// Country dialing prefix offered by the phone field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountryCode {
    #[default]
    Us,
    Es,
    Mr,
}

impl CountryCode {
    /// All codes the form offers, in display order.
    pub const ALL: [CountryCode; 3] = [CountryCode::Us, CountryCode::Es, CountryCode::Mr];

    /// Two-letter code as it appears in markup and in the payload.
    pub fn code(&self) -> &'static str {
        match self {
            CountryCode::Us => "US",
            CountryCode::Es => "ES",
            CountryCode::Mr => "MR",
        }
    }

    /// Parse a code from a select value. Unknown codes yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.code() == value)
    }
}

/// The six editable fields of the contact form.
///
/// `name` is the markup name of the corresponding input, which external
/// automation uses to locate and drive the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    CountryCode,
    Phone,
    Message,
}

impl FormField {
    pub fn name(&self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Email => "email",
            FormField::CountryCode => "countryCode",
            FormField::Phone => "phone",
            FormField::Message => "message",
        }
    }
}

/// Everything the visitor has typed into the contact form.
///
/// `Default` is the initial state and the reset target after a successful
/// submission: all text fields empty, country code `US`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country_code: CountryCode,
    pub phone: String,
    pub message: String,
}

impl FormState {
    /// Replace a single field, preserving all others.
    ///
    /// A country code value outside the offered set falls back to the
    /// default so the enumeration invariant holds even if the select's
    /// DOM value is tampered with.
    pub fn with_field(mut self, field: FormField, value: &str) -> Self {
        match field {
            FormField::FirstName => self.first_name = value.to_string(),
            FormField::LastName => self.last_name = value.to_string(),
            FormField::Email => self.email = value.to_string(),
            FormField::CountryCode => {
                self.country_code = CountryCode::parse(value).unwrap_or_default()
            }
            FormField::Phone => self.phone = value.to_string(),
            FormField::Message => self.message = value.to_string(),
        }
        self
    }

    /// Whether every required field is non-empty.
    ///
    /// The browser's constraint validation enforces this before the submit
    /// handler runs; this mirrors it for callers outside the DOM.
    pub fn is_complete(&self) -> bool {
        !self.first_name.is_empty()
            && !self.last_name.is_empty()
            && !self.email.is_empty()
            && !self.phone.is_empty()
            && !self.message.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_empty_with_us_code() {
        let form = FormState::default();
        assert_eq!(form.first_name, "");
        assert_eq!(form.last_name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.country_code, CountryCode::Us);
        assert_eq!(form.phone, "");
        assert_eq!(form.message, "");
    }

    #[test]
    fn with_field_replaces_only_the_named_field() {
        let form = FormState::default()
            .with_field(FormField::FirstName, "Ada")
            .with_field(FormField::Email, "ada@example.com");

        assert_eq!(form.first_name, "Ada");
        assert_eq!(form.email, "ada@example.com");
        assert_eq!(form.last_name, "");
        assert_eq!(form.phone, "");
    }

    #[test]
    fn last_write_per_field_wins_regardless_of_interleaving() {
        let a = FormState::default()
            .with_field(FormField::FirstName, "A")
            .with_field(FormField::Phone, "1")
            .with_field(FormField::FirstName, "Ada")
            .with_field(FormField::Phone, "600111222");

        let b = FormState::default()
            .with_field(FormField::Phone, "1")
            .with_field(FormField::Phone, "600111222")
            .with_field(FormField::FirstName, "A")
            .with_field(FormField::FirstName, "Ada");

        assert_eq!(a, b);
        assert_eq!(a.first_name, "Ada");
        assert_eq!(a.phone, "600111222");
    }

    #[test]
    fn country_code_parses_offered_values() {
        assert_eq!(CountryCode::parse("US"), Some(CountryCode::Us));
        assert_eq!(CountryCode::parse("ES"), Some(CountryCode::Es));
        assert_eq!(CountryCode::parse("MR"), Some(CountryCode::Mr));
        assert_eq!(CountryCode::parse("FR"), None);
    }

    #[test]
    fn unknown_country_code_falls_back_to_default() {
        let form = FormState::default()
            .with_field(FormField::CountryCode, "ES")
            .with_field(FormField::CountryCode, "XX");
        assert_eq!(form.country_code, CountryCode::Us);
    }

    #[test]
    fn is_complete_requires_every_text_field() {
        let mut form = FormState::default();
        assert!(!form.is_complete());

        form = form
            .with_field(FormField::FirstName, "Ada")
            .with_field(FormField::LastName, "Lovelace")
            .with_field(FormField::Email, "ada@example.com")
            .with_field(FormField::Phone, "600111222");
        assert!(!form.is_complete());

        form = form.with_field(FormField::Message, "Hello");
        assert!(form.is_complete());
    }

    #[test]
    fn field_names_match_the_markup_contract() {
        assert_eq!(FormField::FirstName.name(), "firstName");
        assert_eq!(FormField::LastName.name(), "lastName");
        assert_eq!(FormField::Email.name(), "email");
        assert_eq!(FormField::CountryCode.name(), "countryCode");
        assert_eq!(FormField::Phone.name(), "phone");
        assert_eq!(FormField::Message.name(), "message");
    }
}
