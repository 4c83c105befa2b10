//! Range checks for generation settings and the login email format.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{MAX_KEYWORD_COUNT, MAX_TITLE_LENGTH, MIN_KEYWORD_COUNT, MIN_TITLE_LENGTH};
use crate::error::{AppError, AppResult};
use crate::models::GenerationSettings;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex should compile")
});

pub fn validate_title_length(value: usize) -> AppResult<()> {
    if !(MIN_TITLE_LENGTH..=MAX_TITLE_LENGTH).contains(&value) {
        return Err(AppError::InvalidInput(format!(
            "Title length must be between {} and {} (got {})",
            MIN_TITLE_LENGTH, MAX_TITLE_LENGTH, value
        )));
    }
    Ok(())
}

pub fn validate_keyword_count(value: usize) -> AppResult<()> {
    if !(MIN_KEYWORD_COUNT..=MAX_KEYWORD_COUNT).contains(&value) {
        return Err(AppError::InvalidInput(format!(
            "Keyword count must be between {} and {} (got {})",
            MIN_KEYWORD_COUNT, MAX_KEYWORD_COUNT, value
        )));
    }
    Ok(())
}

pub fn validate_settings(settings: &GenerationSettings) -> AppResult<()> {
    validate_title_length(settings.title_length)?;
    validate_keyword_count(settings.keyword_count)?;
    Ok(())
}

/// Local format check only; no identity verification happens anywhere.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn validate_email(email: &str) -> AppResult<()> {
    if !is_valid_email(email) {
        return Err(AppError::InvalidEmail(email.to_string()));
    }
    Ok(())
}
