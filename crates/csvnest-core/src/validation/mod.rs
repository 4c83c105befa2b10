//! Validation modules

pub mod settings;

pub use settings::{
    is_valid_email, validate_email, validate_keyword_count, validate_settings,
    validate_title_length,
};
