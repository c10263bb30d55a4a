//! Library configuration.
//!
//! Holds the locale policy (default locale, approved locales) and the name
//! of the dictionary the translator serves by default. Environment
//! overrides let deployments repoint the default locale and dictionary
//! without code changes.

use crate::locale::{is_same_language, negotiate};

/// Environment variable overriding the default locale.
pub const ENV_DEFAULT_LOCALE: &str = "GLOSSA_DEFAULT_LOCALE";
/// Environment variable overriding the dictionary name.
pub const ENV_DICTIONARY_NAME: &str = "GLOSSA_DICTIONARY_NAME";

/// Locale and dictionary policy.
///
/// # Example
/// ```
/// use glossa::config::I18nConfig;
///
/// let config = I18nConfig::new()
///     .default_locale("en-US")
///     .approved_locales(["en-US", "es", "fr"])
///     .dictionary_name("storefront");
/// assert_eq!(config.resolve_locale(&["es-MX", "de"]), "es");
/// assert!(!config.translation_required("en-GB"));
/// assert!(config.translation_required("fr"));
/// ```
#[derive(Debug, Clone)]
pub struct I18nConfig {
    default_locale: String,
    approved_locales: Option<Vec<String>>,
    dictionary_name: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl I18nConfig {
    /// Configuration with default locale `en` and dictionary `default`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_locale: "en".into(),
            approved_locales: None,
            dictionary_name: "default".into(),
        }
    }

    /// Set the default locale.
    #[must_use]
    pub fn default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    /// Restrict serving to an approved locale list.
    #[must_use]
    pub fn approved_locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.approved_locales = Some(locales.into_iter().map(Into::into).collect());
        self
    }

    /// Set the dictionary served by default.
    #[must_use]
    pub fn dictionary_name(mut self, name: impl Into<String>) -> Self {
        self.dictionary_name = name.into();
        self
    }

    /// Apply environment overrides (`GLOSSA_DEFAULT_LOCALE`,
    /// `GLOSSA_DICTIONARY_NAME`), when set and non-empty.
    #[must_use]
    pub fn overridden_from_env(self) -> Self {
        self.overridden_with(
            std::env::var(ENV_DEFAULT_LOCALE).ok(),
            std::env::var(ENV_DICTIONARY_NAME).ok(),
        )
    }

    fn overridden_with(mut self, locale: Option<String>, name: Option<String>) -> Self {
        if let Some(locale) = locale.filter(|l| !l.is_empty()) {
            tracing::debug!(%locale, "default locale overridden from environment");
            self.default_locale = locale;
        }
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            tracing::debug!(%name, "dictionary name overridden from environment");
            self.dictionary_name = name;
        }
        self
    }

    /// The configured default locale.
    #[must_use]
    pub fn default_locale_tag(&self) -> &str {
        &self.default_locale
    }

    /// The approved locale list, if restricted.
    #[must_use]
    pub fn approved(&self) -> Option<&[String]> {
        self.approved_locales.as_deref()
    }

    /// The dictionary name served by default.
    #[must_use]
    pub fn dictionary(&self) -> &str {
        &self.dictionary_name
    }

    /// Negotiate the locale to serve from ranked requested tags.
    #[must_use]
    pub fn resolve_locale<'a>(&'a self, requested: &'a [&'a str]) -> &'a str {
        negotiate(self.approved(), requested, &self.default_locale)
    }

    /// Whether content must be translated for `locale`.
    ///
    /// False when the locale shares a language with the default: the
    /// default-locale content already serves it.
    #[must_use]
    pub fn translation_required(&self, locale: &str) -> bool {
        !is_same_language(locale, &self.default_locale)
    }
}
