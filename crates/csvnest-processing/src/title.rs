//! Title clamping and prefix/suffix decoration

use csvnest_core::constants::MIN_TITLE_LENGTH;
use csvnest_core::models::{GenerationSettings, ImageType};

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Limit `text` to `max_len` characters without ending mid-word.
///
/// Text that already fits is returned unchanged. Otherwise the text is cut to
/// `max(10, max_len)` characters; a partial trailing word and any trailing
/// non-word characters are dropped. A cut with no earlier word boundary (one
/// long word) is kept as is.
///
/// The window only bounds where the cut happens. After a boundary trim the
/// result may be shorter than 10 characters (`"ab cdefghijklmnop"` at 10 gives
/// `"ab"`).
pub fn clamp_title(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }

    let window = max_len.max(MIN_TITLE_LENGTH);
    let cut: String = text.chars().take(window).collect();
    let next = text.chars().nth(window);

    let mid_word = matches!(
        (cut.chars().last(), next),
        (Some(last), Some(next)) if is_word_char(last) && is_word_char(next)
    );

    let kept = if mid_word {
        cut.trim_end_matches(is_word_char)
    } else {
        cut.as_str()
    };
    let trimmed = kept.trim_end_matches(|c: char| !is_word_char(c));

    if trimmed.is_empty() {
        cut
    } else {
        trimmed.to_string()
    }
}

/// Build the final title for one normalized phrase.
///
/// The image-type tag is appended before clamping; prefix and suffix are
/// added afterwards, so a decorated title can run past `title_length`.
pub fn build_title(phrase: &str, image_type: ImageType, settings: &GenerationSettings) -> String {
    let raw = if image_type.is_none() {
        phrase.to_string()
    } else {
        format!("{} – {}", phrase, image_type.as_str())
    };

    let mut title = clamp_title(raw.trim(), settings.title_length);

    if let Some(prefix) = settings.prefix.active() {
        title = format!("{} {}", prefix, title).trim().to_string();
    }
    if let Some(suffix) = settings.suffix.active() {
        title = format!("{} {}", title, suffix).trim().to_string();
    }

    title
}
