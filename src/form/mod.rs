//! Registration form core: the field store, the validator, and the
//! submission orchestrator. Everything here is UI-framework free so it
//! can be exercised directly in tests.

pub mod submit;
pub mod validate;

pub use submit::*;
pub use validate::*;

use chrono::{Datelike, Local, NaiveDate};

/// All user-entered registration fields. Selects store the catalog ids
/// they produce; `date_of_birth` is an ISO date without a time component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub date_of_birth: String,
    pub gender: String,
    pub mobile: String,
    pub country: String,
    pub role: String,
    pub accept_terms: bool,
}

/// Field selector for the single mutation entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
    DateOfBirth,
    Gender,
    Mobile,
    Country,
    Role,
    AcceptTerms,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> FieldValue {
        FieldValue::Text(value.into())
    }
}

impl SignupForm {
    /// Replaces exactly one field, returning the updated record. The
    /// previous record is consumed, so the surrounding signal always
    /// sees a fresh value. A value of the wrong shape for the field
    /// leaves the record unchanged.
    pub fn with_field(mut self, field: Field, value: FieldValue) -> SignupForm {
        match (field, value) {
            (Field::Username, FieldValue::Text(v)) => self.username = v,
            (Field::Email, FieldValue::Text(v)) => self.email = v,
            (Field::Password, FieldValue::Text(v)) => self.password = v,
            (Field::ConfirmPassword, FieldValue::Text(v)) => self.confirm_password = v,
            (Field::DateOfBirth, FieldValue::Text(v)) => self.date_of_birth = v,
            (Field::Gender, FieldValue::Text(v)) => self.gender = v,
            (Field::Mobile, FieldValue::Text(v)) => self.mobile = v,
            (Field::Country, FieldValue::Text(v)) => self.country = v,
            (Field::Role, FieldValue::Text(v)) => self.role = v,
            (Field::AcceptTerms, FieldValue::Flag(v)) => self.accept_terms = v,
            _ => {}
        }
        self
    }

    /// Fixed demo record behind the "Try Demo with Admin Role" button.
    /// The user still has to press submit; nothing here bypasses
    /// validation.
    pub fn demo() -> SignupForm {
        SignupForm {
            username: "demo_user".to_string(),
            email: "demo@logsentinel.ai".to_string(),
            password: "Demo@2024".to_string(),
            confirm_password: "Demo@2024".to_string(),
            date_of_birth: years_before_today(25).format("%Y-%m-%d").to_string(),
            gender: "male".to_string(),
            mobile: "+1234567890".to_string(),
            country: "United States".to_string(),
            role: "admin".to_string(),
            accept_terms: true,
        }
    }
}

/// Same month/day `years` back; Feb 29 rolls forward to Mar 1 when the
/// target year is not a leap year.
fn years_before_today(years: i32) -> NaiveDate {
    let today = Local::now().date_naive();
    today
        .with_year(today.year() - years)
        .or_else(|| NaiveDate::from_ymd_opt(today.year() - years, 3, 1))
        .unwrap_or(today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn with_field_replaces_only_the_named_field() {
        let form = SignupForm::default()
            .with_field(Field::Username, FieldValue::text("jane"))
            .with_field(Field::Email, FieldValue::text("jane@example.com"));

        assert_eq!(form.username, "jane");
        assert_eq!(form.email, "jane@example.com");
        assert_eq!(form.password, "");
        assert!(!form.accept_terms);
    }

    #[test]
    fn with_field_is_idempotent() {
        let once = SignupForm::default().with_field(Field::Country, FieldValue::text("Japan"));
        let twice = once
            .clone()
            .with_field(Field::Country, FieldValue::text("Japan"));
        assert_eq!(once, twice);
    }

    #[test]
    fn accept_terms_takes_a_flag() {
        let form = SignupForm::default().with_field(Field::AcceptTerms, FieldValue::Flag(true));
        assert!(form.accept_terms);
    }

    #[test]
    fn mismatched_value_shape_is_a_no_op() {
        let form = SignupForm::default()
            .with_field(Field::Username, FieldValue::Flag(true))
            .with_field(Field::AcceptTerms, FieldValue::text("yes"));
        assert_eq!(form, SignupForm::default());
    }

    #[test]
    fn demo_form_passes_validation() {
        assert!(validate(&SignupForm::demo()).is_ok());
    }

    #[test]
    fn demo_date_of_birth_is_twenty_five_years_back() {
        let demo = SignupForm::demo();
        let dob = NaiveDate::parse_from_str(&demo.date_of_birth, "%Y-%m-%d").unwrap();
        let today = Local::now().date_naive();
        assert_eq!(dob.year(), today.year() - 25);
        assert!(dob <= today);
    }
}
