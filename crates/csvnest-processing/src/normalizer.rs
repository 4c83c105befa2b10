//! Filename → human-readable phrase

use std::sync::LazyLock;

use regex::Regex;

static EXTENSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[^.]+$").expect("extension regex should compile"));

static SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_]+").expect("separator regex should compile"));

static CAMEL_CASE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("camel case regex should compile"));

static NOISE_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(copy|final|v\d+|edited|export|img|image|file|photo|video)\b")
        .expect("noise token regex should compile")
});

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex should compile"));

/// Turn a raw filename into a cleaned phrase.
///
/// Drops the last extension, turns `-`/`_` runs into spaces, splits camel case,
/// removes standalone noise tokens (`copy`, `final`, `v2`, `img`, ...) and
/// collapses whitespace. May return an empty string when the name was all noise.
pub fn normalize_filename(name: &str) -> String {
    let base = EXTENSION_REGEX.replace(name, "");
    let spaced = SEPARATOR_REGEX.replace_all(&base, " ");
    let split = CAMEL_CASE_REGEX.replace_all(&spaced, "${1} ${2}");
    let cleaned = NOISE_TOKEN_REGEX.replace_all(&split, "");
    WHITESPACE_REGEX
        .replace_all(&cleaned, " ")
        .trim()
        .to_string()
}
