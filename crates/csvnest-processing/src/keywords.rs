//! Keyword derivation, bulk merge, deduplication and truncation

use std::collections::HashSet;

use csvnest_core::models::GenerationSettings;

/// Keep the first occurrence of every term, comparing case-insensitively.
pub fn unique_case_insensitive<I>(terms: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    terms
        .into_iter()
        .filter(|term| seen.insert(term.to_lowercase()))
        .collect()
}

/// Split user-supplied bulk text on commas, semicolons and newlines.
pub fn parse_bulk_keywords(raw: &str) -> Vec<String> {
    raw.split([',', ';', '\n'])
        .map(|piece| piece.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Lowercased alphanumeric tokens of the phrase, always deduplicated.
fn base_keywords(phrase: &str) -> Vec<String> {
    let lowered = phrase.to_lowercase();
    unique_case_insensitive(
        lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .map(str::to_string),
    )
}

/// Build the keyword list for one normalized phrase.
///
/// Base tokens come first, bulk terms are appended when enabled, the merged
/// list is deduplicated only when `remove_duplicates` is set, and the result
/// is cut to `keyword_count` without reordering.
pub fn build_keywords(phrase: &str, settings: &GenerationSettings) -> Vec<String> {
    let mut keywords = base_keywords(phrase);

    if let Some(bulk) = settings.bulk_keywords.active() {
        keywords.extend(parse_bulk_keywords(bulk));
        if settings.remove_duplicates {
            keywords = unique_case_insensitive(keywords);
        }
    }

    keywords.truncate(settings.keyword_count);
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;
    use csvnest_core::models::Toggle;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn with_bulk(raw: &str, remove_duplicates: bool) -> GenerationSettings {
        GenerationSettings {
            bulk_keywords: Toggle::on(raw.to_string()),
            remove_duplicates,
            ..Default::default()
        }
    }

    #[test]
    fn test_unique_case_insensitive_keeps_first_seen() {
        assert_eq!(
            unique_case_insensitive(strings(&["Cat", "dog", "CAT"])),
            strings(&["Cat", "dog"])
        );
        assert!(unique_case_insensitive(Vec::new()).is_empty());
    }

    #[test]
    fn test_base_tokens_lowercased_and_deduplicated() {
        let settings = GenerationSettings {
            remove_duplicates: false,
            ..Default::default()
        };
        assert_eq!(
            build_keywords("Sunset Beach sunset, Palm-Tree", &settings),
            strings(&["sunset", "beach", "palm", "tree"])
        );
    }

    #[test]
    fn test_empty_phrase_yields_no_keywords() {
        assert!(build_keywords("", &GenerationSettings::default()).is_empty());
        assert!(build_keywords(" – ", &GenerationSettings::default()).is_empty());
    }

    #[test]
    fn test_parse_bulk_keywords() {
        assert_eq!(
            parse_bulk_keywords("summer, travel;\n  holiday  season \r\n,,;"),
            strings(&["summer", "travel", "holiday season"])
        );
        assert!(parse_bulk_keywords("  ,;\n").is_empty());
    }

    #[test]
    fn test_bulk_merge_with_dedup() {
        let settings = with_bulk("Beach, ocean, BEACH, waves", true);
        assert_eq!(
            build_keywords("beach sunset", &settings),
            strings(&["beach", "sunset", "ocean", "waves"])
        );
    }

    #[test]
    fn test_bulk_merge_without_dedup_keeps_duplicates() {
        let settings = with_bulk("Beach, ocean, ocean", false);
        assert_eq!(
            build_keywords("beach sunset", &settings),
            strings(&["beach", "sunset", "Beach", "ocean", "ocean"])
        );
    }

    #[test]
    fn test_bulk_ignored_when_disabled_or_blank() {
        let disabled = GenerationSettings {
            bulk_keywords: Toggle::off("ocean".to_string()),
            ..Default::default()
        };
        assert_eq!(build_keywords("beach", &disabled), strings(&["beach"]));

        let blank = with_bulk("   ", true);
        assert_eq!(build_keywords("beach", &blank), strings(&["beach"]));
    }

    #[test]
    fn test_truncates_to_cap_after_merge() {
        let settings = GenerationSettings {
            keyword_count: 5,
            ..with_bulk("f, g, h", true)
        };
        let keywords = build_keywords("a b c d", &settings);
        assert_eq!(keywords, strings(&["a", "b", "c", "d", "f"]));
    }

    #[test]
    fn test_output_is_prefix_of_merged_list() {
        let settings = with_bulk("one, two, three, four, five, six", true);
        let merged = build_keywords("alpha beta gamma", &settings);
        for cap in 5..=merged.len() {
            let capped = GenerationSettings {
                keyword_count: cap,
                ..settings.clone()
            };
            let keywords = build_keywords("alpha beta gamma", &capped);
            assert!(keywords.len() <= cap);
            assert_eq!(keywords[..], merged[..keywords.len()]);
        }
    }
}
