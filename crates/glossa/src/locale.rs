//! BCP-47 tag utilities: language matching, negotiation, text direction.
//!
//! Nothing here validates tags. Matching operates on the primary language
//! subtag only, which is what locale negotiation needs; full-tag semantics
//! (plural rules, formatting) live with the components that consume them.

/// Horizontal text direction for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

/// Primary language subtag of a locale tag, lower-cased.
///
/// Tolerates both `-` and `_` separators, so `"en-US"`, `"en_US"`, and
/// `"en"` all yield `"en"`.
#[must_use]
pub fn language_of(tag: &str) -> String {
    tag.split(['-', '_'])
        .next()
        .unwrap_or(tag)
        .to_ascii_lowercase()
}

/// Whether two locale tags share a primary language subtag.
#[must_use]
pub fn is_same_language(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && language_of(a) == language_of(b)
}

/// Pick the locale to serve from a ranked list of requested tags.
///
/// Resolution order:
/// 1. With no approved list, the first requested tag wins.
/// 2. Exact match: first requested tag equal to an approved tag.
/// 3. Linguistic match: first requested tag sharing a language with an
///    approved tag (the approved tag is returned, not the requested one).
/// 4. Otherwise `default`.
///
/// # Example
/// ```
/// use glossa::locale::negotiate;
///
/// let approved = ["en-US".to_string(), "es".to_string()];
/// assert_eq!(negotiate(Some(&approved), &["es", "en-US"], "en-US"), "es");
/// assert_eq!(negotiate(Some(&approved), &["en-GB"], "en-US"), "en-US");
/// assert_eq!(negotiate(Some(&approved), &["fr"], "en-US"), "en-US");
/// ```
#[must_use]
pub fn negotiate<'a>(
    approved: Option<&'a [String]>,
    requested: &'a [&'a str],
    default: &'a str,
) -> &'a str {
    let Some(approved) = approved else {
        return requested.first().copied().unwrap_or(default);
    };
    for &tag in requested {
        for candidate in approved {
            if tag == candidate {
                return candidate;
            }
        }
    }
    for &tag in requested {
        for candidate in approved {
            if is_same_language(tag, candidate) {
                return candidate;
            }
        }
    }
    default
}

/// Text direction for a locale's language.
#[must_use]
pub fn direction(tag: &str) -> Direction {
    // Languages written right-to-left; script subtags are not consulted.
    match language_of(tag).as_str() {
        "ar" | "he" | "fa" | "ur" | "ps" | "sd" | "yi" | "dv" | "ckb" => Direction::RightToLeft,
        _ => Direction::LeftToRight,
    }
}

/// Whether the locale's language is written right-to-left.
#[must_use]
pub fn is_rtl(tag: &str) -> bool {
    direction(tag) == Direction::RightToLeft
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_subtag_extraction() {
        assert_eq!(language_of("en"), "en");
        assert_eq!(language_of("en-US"), "en");
        assert_eq!(language_of("en_GB"), "en");
        assert_eq!(language_of("zh-Hant-TW"), "zh");
        assert_eq!(language_of("EN-us"), "en");
    }

    #[test]
    fn same_language_matching() {
        assert!(is_same_language("en-US", "en-GB"));
        assert!(is_same_language("es", "es-MX"));
        assert!(!is_same_language("en", "es"));
        assert!(!is_same_language("", "en"));
        assert!(!is_same_language("en", ""));
    }

    #[test]
    fn negotiate_no_approved_list_takes_first() {
        assert_eq!(negotiate(None, &["fr-CA", "en"], "en"), "fr-CA");
        assert_eq!(negotiate(None, &[], "en"), "en");
    }

    #[test]
    fn negotiate_exact_beats_linguistic() {
        let approved = ["en-US".to_string(), "en-GB".to_string()];
        // "en-GB" appears later in the requested list but matches exactly,
        // while "en-AU" would only match linguistically.
        assert_eq!(negotiate(Some(&approved), &["en-AU", "en-GB"], "de"), "en-GB");
    }

    #[test]
    fn negotiate_linguistic_returns_approved_tag() {
        let approved = ["es-ES".to_string()];
        assert_eq!(negotiate(Some(&approved), &["es-MX"], "en"), "es-ES");
    }

    #[test]
    fn negotiate_requested_order_wins() {
        let approved = ["de".to_string(), "fr".to_string()];
        assert_eq!(negotiate(Some(&approved), &["fr", "de"], "en"), "fr");
    }

    #[test]
    fn negotiate_falls_back_to_default() {
        let approved = ["de".to_string()];
        assert_eq!(negotiate(Some(&approved), &["ja", "ko"], "en-US"), "en-US");
        assert_eq!(negotiate(Some(&approved), &[], "en-US"), "en-US");
    }

    #[test]
    fn rtl_languages() {
        assert!(is_rtl("ar"));
        assert!(is_rtl("ar-EG"));
        assert!(is_rtl("he"));
        assert!(is_rtl("fa-IR"));
        assert!(!is_rtl("en"));
        assert!(!is_rtl("ja"));
        assert_eq!(direction("ur"), Direction::RightToLeft);
        assert_eq!(direction("tr"), Direction::LeftToRight);
    }
}
