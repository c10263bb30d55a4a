//! CLDR plural categories and the pluralization capability.
//!
//! Branch selection needs to know which cardinal plural class a language's
//! grammar assigns to a quantity. That classification is delegated to a
//! [`PluralClassifier`] so the selection logic stays independent of the
//! data backend; the default backend, [`CldrClassifier`], binds to ICU4X
//! and therefore matches the Unicode CLDR plural rules exactly.
//!
//! # Invariants
//!
//! 1. Classification is total: every finite `f64` and every locale string
//!    (including garbage) maps to exactly one [`PluralCategory`].
//! 2. Classification is pure: same inputs, same category.
//! 3. Unknown locales inherit the root rule set (everything is `Other`)
//!    rather than failing.

use std::fmt;

use icu_locale_core::Locale;
use icu_plurals::{PluralRuleType, PluralRules};

/// The six CLDR cardinal plural categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// Canonical lower-case name, as used for branch keys.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }

    /// Parse a canonical category name. Unrecognized names yield `None`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "zero" => Some(Self::Zero),
            "one" => Some(Self::One),
            "two" => Some(Self::Two),
            "few" => Some(Self::Few),
            "many" => Some(Self::Many),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability interface for cardinal plural classification.
///
/// Implementations must be total and pure. The quantity is passed as `f64`
/// because callers branch on arbitrary numeric values; implementations
/// decide how fractional quantities classify.
pub trait PluralClassifier {
    /// Classify `n` under the cardinal plural rules of `locale`.
    fn classify(&self, n: f64, locale: &str) -> PluralCategory;
}

/// CLDR-backed classifier using ICU4X compiled data.
///
/// Locale tags that fail to parse fall back to the root locale, whose rule
/// set classifies everything as `Other`, matching what platform
/// pluralization facilities do for unknown tags.
///
/// # Example
/// ```
/// use glossa::plural::{CldrClassifier, PluralCategory, PluralClassifier};
///
/// let cldr = CldrClassifier;
/// assert_eq!(cldr.classify(1.0, "en"), PluralCategory::One);
/// assert_eq!(cldr.classify(2.0, "ar"), PluralCategory::Two);
/// assert_eq!(cldr.classify(5.0, "ru"), PluralCategory::Many);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CldrClassifier;

impl CldrClassifier {
    fn rules_for(locale: &str) -> Option<PluralRules> {
        let loc = Locale::try_from_str(locale).unwrap_or(Locale::UNKNOWN);
        PluralRules::try_new(loc.into(), PluralRuleType::Cardinal.into()).ok()
    }
}

impl PluralClassifier for CldrClassifier {
    fn classify(&self, n: f64, locale: &str) -> PluralCategory {
        if !n.is_finite() {
            return PluralCategory::Other;
        }
        let Some(rules) = Self::rules_for(locale) else {
            return PluralCategory::Other;
        };
        // CLDR operands are defined over the absolute value.
        let n = n.abs();
        let category = if n.fract() == 0.0 && n <= i64::MAX as f64 {
            rules.category_for(n as i64)
        } else {
            match n.to_string().parse::<icu_plurals::PluralOperands>() {
                Ok(operands) => rules.category_for(operands),
                Err(_) => return PluralCategory::Other,
            }
        };
        match category {
            icu_plurals::PluralCategory::Zero => PluralCategory::Zero,
            icu_plurals::PluralCategory::One => PluralCategory::One,
            icu_plurals::PluralCategory::Two => PluralCategory::Two,
            icu_plurals::PluralCategory::Few => PluralCategory::Few,
            icu_plurals::PluralCategory::Many => PluralCategory::Many,
            icu_plurals::PluralCategory::Other => PluralCategory::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_one_and_other() {
        let cldr = CldrClassifier;
        assert_eq!(cldr.classify(1.0, "en"), PluralCategory::One);
        assert_eq!(cldr.classify(-1.0, "en"), PluralCategory::One);
        assert_eq!(cldr.classify(0.0, "en"), PluralCategory::Other);
        assert_eq!(cldr.classify(2.0, "en"), PluralCategory::Other);
        assert_eq!(cldr.classify(100.0, "en"), PluralCategory::Other);
    }

    #[test]
    fn arabic_full_ladder() {
        let cldr = CldrClassifier;
        assert_eq!(cldr.classify(0.0, "ar"), PluralCategory::Zero);
        assert_eq!(cldr.classify(1.0, "ar"), PluralCategory::One);
        assert_eq!(cldr.classify(2.0, "ar"), PluralCategory::Two);
        assert_eq!(cldr.classify(5.0, "ar"), PluralCategory::Few);
        assert_eq!(cldr.classify(11.0, "ar"), PluralCategory::Many);
        assert_eq!(cldr.classify(100.0, "ar"), PluralCategory::Other);
    }

    #[test]
    fn russian_few_and_many() {
        let cldr = CldrClassifier;
        assert_eq!(cldr.classify(1.0, "ru"), PluralCategory::One);
        assert_eq!(cldr.classify(2.0, "ru"), PluralCategory::Few);
        assert_eq!(cldr.classify(5.0, "ru"), PluralCategory::Many);
        assert_eq!(cldr.classify(21.0, "ru"), PluralCategory::One);
        assert_eq!(cldr.classify(11.0, "ru"), PluralCategory::Many);
    }

    #[test]
    fn french_fractional_is_one() {
        // fr: i = 0,1 classifies as "one", so 1.5 stays in "one".
        let cldr = CldrClassifier;
        assert_eq!(cldr.classify(1.5, "fr"), PluralCategory::One);
        assert_eq!(cldr.classify(2.5, "fr"), PluralCategory::Other);
    }

    #[test]
    fn english_fractional_is_other() {
        let cldr = CldrClassifier;
        assert_eq!(cldr.classify(1.5, "en"), PluralCategory::Other);
    }

    #[test]
    fn region_subtags_accepted() {
        let cldr = CldrClassifier;
        assert_eq!(cldr.classify(1.0, "en-US"), PluralCategory::One);
        assert_eq!(cldr.classify(2.0, "ar-EG"), PluralCategory::Two);
    }

    #[test]
    fn garbage_locale_falls_back_to_root() {
        let cldr = CldrClassifier;
        assert_eq!(cldr.classify(1.0, "not a tag!!"), PluralCategory::Other);
        assert_eq!(cldr.classify(1.0, ""), PluralCategory::Other);
    }

    #[test]
    fn non_finite_is_other() {
        let cldr = CldrClassifier;
        assert_eq!(cldr.classify(f64::NAN, "en"), PluralCategory::Other);
        assert_eq!(cldr.classify(f64::INFINITY, "ar"), PluralCategory::Other);
    }

    #[test]
    fn category_names_round_trip() {
        for cat in [
            PluralCategory::Zero,
            PluralCategory::One,
            PluralCategory::Two,
            PluralCategory::Few,
            PluralCategory::Many,
            PluralCategory::Other,
        ] {
            assert_eq!(PluralCategory::parse(cat.as_str()), Some(cat));
            assert_eq!(cat.to_string(), cat.as_str());
        }
        assert_eq!(PluralCategory::parse("paucal"), None);
    }
}
