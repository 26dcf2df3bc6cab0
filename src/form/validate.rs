//! Pre-submit validation. Rules run in a fixed order and stop at the
//! first failure; only the earliest failing field's message is shown.

use chrono::{Local, NaiveDate};
use thiserror::Error;

use super::SignupForm;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    #[error("Username is required")]
    UsernameRequired,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Date of birth is required")]
    DateOfBirthRequired,
    #[error("Date of birth cannot be in the future")]
    DateOfBirthInFuture,
    #[error("Please select your gender")]
    GenderRequired,
    #[error("Please select your country")]
    CountryRequired,
    #[error("Please select a role")]
    RoleRequired,
    #[error("You must accept the terms and conditions")]
    TermsNotAccepted,
}

/// Checks the form against the fixed rule sequence. Purely local; no
/// network call happens until this returns `Ok`.
pub fn validate(form: &SignupForm) -> Result<(), SignupError> {
    if form.username.trim().is_empty() {
        return Err(SignupError::UsernameRequired);
    }
    if !is_plausible_email(&form.email) {
        return Err(SignupError::InvalidEmail);
    }
    if form.password.chars().count() < 8 {
        return Err(SignupError::PasswordTooShort);
    }
    if form.password != form.confirm_password {
        return Err(SignupError::PasswordMismatch);
    }
    if form.date_of_birth.is_empty() {
        return Err(SignupError::DateOfBirthRequired);
    }
    if let Ok(dob) = NaiveDate::parse_from_str(&form.date_of_birth, "%Y-%m-%d") {
        if dob > Local::now().date_naive() {
            return Err(SignupError::DateOfBirthInFuture);
        }
    }
    if form.gender.is_empty() {
        return Err(SignupError::GenderRequired);
    }
    if form.country.is_empty() {
        return Err(SignupError::CountryRequired);
    }
    if form.role.is_empty() {
        return Err(SignupError::RoleRequired);
    }
    if !form.accept_terms {
        return Err(SignupError::TermsNotAccepted);
    }
    Ok(())
}

/// Conservative structural check: a non-whitespace local part, a single
/// `@`, and at least one `.` after it with something on both sides.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = match parts.next() {
        Some(domain) => domain,
        None => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::SignupForm;

    fn valid_form() -> SignupForm {
        SignupForm {
            username: "jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "correct-horse".to_string(),
            confirm_password: "correct-horse".to_string(),
            date_of_birth: "1999-04-12".to_string(),
            gender: "female".to_string(),
            mobile: String::new(),
            country: "Canada".to_string(),
            role: "developer".to_string(),
            accept_terms: true,
        }
    }

    #[test]
    fn valid_form_passes() {
        assert_eq!(validate(&valid_form()), Ok(()));
    }

    #[test]
    fn mobile_is_optional() {
        let mut form = valid_form();
        form.mobile = String::new();
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn whitespace_only_username_is_rejected() {
        let mut form = valid_form();
        form.username = "   ".to_string();
        assert_eq!(validate(&form), Err(SignupError::UsernameRequired));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = valid_form();
        form.email = "not-an-email".to_string();
        assert_eq!(validate(&form), Err(SignupError::InvalidEmail));
    }

    #[test]
    fn email_needs_a_dot_after_the_at_sign() {
        for email in ["jane@example", "jane@@example.com", "ja ne@example.com", "@example.com", "jane@.com", "jane@example."] {
            let mut form = valid_form();
            form.email = email.to_string();
            assert_eq!(validate(&form), Err(SignupError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn short_password_is_rejected_before_the_match_check() {
        let mut form = valid_form();
        form.password = "short1".to_string();
        form.confirm_password = "short1".to_string();
        assert_eq!(validate(&form), Err(SignupError::PasswordTooShort));
    }

    #[test]
    fn mismatched_passwords_are_rejected() {
        let mut form = valid_form();
        form.confirm_password = "Correct-Horse".to_string();
        assert_eq!(validate(&form), Err(SignupError::PasswordMismatch));
    }

    #[test]
    fn future_date_of_birth_is_rejected() {
        let mut form = valid_form();
        form.date_of_birth = "2999-01-01".to_string();
        assert_eq!(validate(&form), Err(SignupError::DateOfBirthInFuture));
    }

    #[test]
    fn unchecked_terms_are_rejected_last() {
        let mut form = valid_form();
        form.accept_terms = false;
        assert_eq!(validate(&form), Err(SignupError::TermsNotAccepted));
    }

    #[test]
    fn earliest_failing_field_wins() {
        // Start from a form where every rule fails and repair fields one
        // at a time; each step must surface the next rule in sequence.
        let mut form = SignupForm::default();
        assert_eq!(validate(&form), Err(SignupError::UsernameRequired));

        form.username = "jane".to_string();
        assert_eq!(validate(&form), Err(SignupError::InvalidEmail));

        form.email = "jane@example.com".to_string();
        assert_eq!(validate(&form), Err(SignupError::PasswordTooShort));

        form.password = "correct-horse".to_string();
        assert_eq!(validate(&form), Err(SignupError::PasswordMismatch));

        form.confirm_password = "correct-horse".to_string();
        assert_eq!(validate(&form), Err(SignupError::DateOfBirthRequired));

        form.date_of_birth = "1999-04-12".to_string();
        assert_eq!(validate(&form), Err(SignupError::GenderRequired));

        form.gender = "female".to_string();
        assert_eq!(validate(&form), Err(SignupError::CountryRequired));

        form.country = "Canada".to_string();
        assert_eq!(validate(&form), Err(SignupError::RoleRequired));

        form.role = "developer".to_string();
        assert_eq!(validate(&form), Err(SignupError::TermsNotAccepted));

        form.accept_terms = true;
        assert_eq!(validate(&form), Ok(()));
    }

    #[test]
    fn flipping_any_single_field_surfaces_its_own_error() {
        let cases: Vec<(Box<dyn Fn(&mut SignupForm)>, SignupError)> = vec![
            (Box::new(|f| f.username.clear()), SignupError::UsernameRequired),
            (Box::new(|f| f.email = "nope".to_string()), SignupError::InvalidEmail),
            (
                Box::new(|f| {
                    f.password = "short".to_string();
                    f.confirm_password = "short".to_string();
                }),
                SignupError::PasswordTooShort,
            ),
            (
                Box::new(|f| f.confirm_password = "different-pw".to_string()),
                SignupError::PasswordMismatch,
            ),
            (Box::new(|f| f.date_of_birth.clear()), SignupError::DateOfBirthRequired),
            (Box::new(|f| f.gender.clear()), SignupError::GenderRequired),
            (Box::new(|f| f.country.clear()), SignupError::CountryRequired),
            (Box::new(|f| f.role.clear()), SignupError::RoleRequired),
            (Box::new(|f| f.accept_terms = false), SignupError::TermsNotAccepted),
        ];

        for (break_field, expected) in cases {
            let mut form = valid_form();
            break_field(&mut form);
            assert_eq!(validate(&form), Err(expected));
        }
    }

    #[test]
    fn error_messages_match_the_ui_copy() {
        assert_eq!(SignupError::UsernameRequired.to_string(), "Username is required");
        assert_eq!(SignupError::InvalidEmail.to_string(), "Please enter a valid email");
        assert_eq!(
            SignupError::PasswordTooShort.to_string(),
            "Password must be at least 8 characters"
        );
        assert_eq!(SignupError::PasswordMismatch.to_string(), "Passwords do not match");
        assert_eq!(
            SignupError::TermsNotAccepted.to_string(),
            "You must accept the terms and conditions"
        );
    }
}
