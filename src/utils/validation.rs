use regex::Regex;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use validator::{Validate, ValidationError};

use crate::models::reference::{is_known_city, is_known_nationality, DayOfWeek};
use crate::utils::phone::{local_digits, LOCAL_MOBILE_DIGITS};

pub const MIN_DESCRIPTION_CHARS: usize = 20;

pub fn validate<T: Validate>(val: &T) -> Result<(), validator::ValidationErrors> {
    val.validate()
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"))
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Talent numbers: at least nine local digits and a leading `5`. A typed
/// `+966` is not counted.
pub fn validate_saudi_mobile(value: &str) -> Result<(), ValidationError> {
    let digits = local_digits(value);
    if digits.len() < LOCAL_MOBILE_DIGITS {
        return Err(invalid(
            "mobile_length",
            "Please enter a valid Saudi mobile number",
        ));
    }
    if !digits.starts_with('5') {
        return Err(invalid("mobile_prefix", "Mobile number must start with 5"));
    }
    Ok(())
}

/// Company numbers are only checked for length.
pub fn validate_mobile_length(value: &str) -> Result<(), ValidationError> {
    if local_digits(value).len() < LOCAL_MOBILE_DIGITS {
        return Err(invalid("mobile_length", "Please enter a valid mobile number"));
    }
    Ok(())
}

pub fn validate_optional_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || is_valid_email(value) {
        Ok(())
    } else {
        Err(invalid("email", "Please enter a valid email address"))
    }
}

pub fn validate_required_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(invalid("required", "Email is required"));
    }
    validate_optional_email(value)
}

pub fn validate_terms_accepted(accepted: &bool) -> Result<(), ValidationError> {
    if *accepted {
        Ok(())
    } else {
        Err(invalid(
            "terms",
            "You must agree to the terms and conditions",
        ))
    }
}

pub fn validate_full_name_english(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid("required", "Full name in English is required"));
    }
    Ok(())
}

pub fn validate_company_name(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid("required", "Company name is required"));
    }
    Ok(())
}

pub fn validate_city(value: &str) -> Result<(), ValidationError> {
    if is_known_city(value) {
        Ok(())
    } else {
        Err(invalid("city", "Please select a city"))
    }
}

pub fn validate_nationality(value: &str) -> Result<(), ValidationError> {
    if is_known_nationality(value) {
        Ok(())
    } else {
        Err(invalid("nationality", "Please select your nationality"))
    }
}

pub fn validate_has_available_day(
    availability: &BTreeMap<DayOfWeek, bool>,
) -> Result<(), ValidationError> {
    if availability.values().any(|available| *available) {
        Ok(())
    } else {
        Err(invalid(
            "availability",
            "Please select at least one available day",
        ))
    }
}

pub fn validate_project_title(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid("required", "Project title is required"));
    }
    Ok(())
}

pub fn validate_project_description(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(invalid(
            "description_length",
            "Description must be at least 20 characters",
        ));
    }
    Ok(())
}

pub fn validate_compensation(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid("required", "Please specify compensation"));
    }
    Ok(())
}
