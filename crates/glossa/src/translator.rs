//! Configuration-driven translation facade.
//!
//! A [`Translator`] ties an [`I18nConfig`] to one or more named
//! dictionaries and answers render requests: it decides whether the
//! requested locale needs translated content at all, serves the default
//! locale's content when it does not, and lets the dictionary fallback
//! chain absorb partial translations when it does.

use std::collections::HashMap;

use crate::config::I18nConfig;
use crate::dictionary::Dictionary;
use crate::error::{I18nError, Result};

/// Named dictionaries behind a locale policy.
///
/// # Example
/// ```
/// use glossa::config::I18nConfig;
/// use glossa::dictionary::{Dictionary, LocaleEntries};
/// use glossa::translator::Translator;
///
/// let mut en = LocaleEntries::new();
/// en.insert("greeting", "Hello, {name}!");
/// let mut es = LocaleEntries::new();
/// es.insert("greeting", "¡Hola, {name}!");
///
/// let mut dictionary = Dictionary::new();
/// dictionary.add_locale("en", en);
/// dictionary.add_locale("es", es);
///
/// let translator = Translator::new(I18nConfig::new().default_locale("en"))
///     .with_dictionary("default", dictionary);
///
/// assert_eq!(
///     translator.t("es", "greeting", &[("name", "Ana")]),
///     Some("¡Hola, Ana!".into())
/// );
/// // Same language as the default: default content serves directly.
/// assert_eq!(
///     translator.t("en-GB", "greeting", &[("name", "Ada")]),
///     Some("Hello, Ada!".into())
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Translator {
    config: I18nConfig,
    dictionaries: HashMap<String, Dictionary>,
}

impl Translator {
    /// Translator with the given policy and no dictionaries.
    #[must_use]
    pub fn new(config: I18nConfig) -> Self {
        Self {
            config,
            dictionaries: HashMap::new(),
        }
    }

    /// Register a dictionary under a name.
    ///
    /// A dictionary registered without a fallback chain gets the default
    /// locale as its chain, so partially translated locales degrade to
    /// default content instead of missing.
    #[must_use]
    pub fn with_dictionary(mut self, name: impl Into<String>, dictionary: Dictionary) -> Self {
        self.insert_dictionary(name, dictionary);
        self
    }

    /// Register a dictionary in place. See [`Self::with_dictionary`].
    pub fn insert_dictionary(&mut self, name: impl Into<String>, mut dictionary: Dictionary) {
        if dictionary.fallback_chain().is_empty() {
            dictionary.set_fallback_chain(vec![self.config.default_locale_tag().to_string()]);
        }
        self.dictionaries.insert(name.into(), dictionary);
    }

    /// The locale policy.
    #[must_use]
    pub fn config(&self) -> &I18nConfig {
        &self.config
    }

    /// A registered dictionary by name.
    pub fn dictionary(&self, name: &str) -> Result<&Dictionary> {
        self.dictionaries
            .get(name)
            .ok_or_else(|| I18nError::UnknownDictionary(name.to_string()))
    }

    /// Negotiate the locale to serve from ranked requested tags.
    #[must_use]
    pub fn resolve_locale<'a>(&'a self, requested: &'a [&'a str]) -> &'a str {
        self.config.resolve_locale(requested)
    }

    /// The locale whose entries actually serve a request for `locale`.
    fn serving_locale<'a>(&'a self, locale: &'a str) -> &'a str {
        if self.config.translation_required(locale) {
            locale
        } else {
            self.config.default_locale_tag()
        }
    }

    /// Render an entry from the configured dictionary.
    #[must_use]
    pub fn t(&self, locale: &str, id: &str, args: &[(&str, &str)]) -> Option<String> {
        self.t_from(self.config.dictionary(), locale, id, args)
            .ok()
            .flatten()
    }

    /// Render a numeric entry from the configured dictionary.
    #[must_use]
    pub fn t_numeric(
        &self,
        locale: &str,
        id: &str,
        n: f64,
        args: &[(&str, &str)],
    ) -> Option<String> {
        self.t_numeric_from(self.config.dictionary(), locale, id, n, args)
            .ok()
            .flatten()
    }

    /// Render an entry from a named dictionary.
    pub fn t_from(
        &self,
        dictionary: &str,
        locale: &str,
        id: &str,
        args: &[(&str, &str)],
    ) -> Result<Option<String>> {
        let dictionary = self.dictionary(dictionary)?;
        Ok(dictionary.render(self.serving_locale(locale), id, args))
    }

    /// Render a numeric entry from a named dictionary.
    pub fn t_numeric_from(
        &self,
        dictionary: &str,
        locale: &str,
        id: &str,
        n: f64,
        args: &[(&str, &str)],
    ) -> Result<Option<String>> {
        let dictionary = self.dictionary(dictionary)?;
        Ok(dictionary.render_numeric(self.serving_locale(locale), id, n, args))
    }

    /// Raw entry text from the configured dictionary, untranslated:
    /// always served from the default locale.
    #[must_use]
    pub fn dict(&self, id: &str) -> Option<String> {
        let dictionary = self.dictionaries.get(self.config.dictionary())?;
        dictionary
            .get(self.config.default_locale_tag(), id)
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::NumericBranches;
    use crate::dictionary::LocaleEntries;

    fn sample() -> Translator {
        let mut en = LocaleEntries::new();
        en.insert("greeting", "Hello, {name}!");
        en.insert_numeric(
            "items",
            NumericBranches::new()
                .branch("singular", "{n} item".to_string())
                .branch("plural", "{n} items".to_string()),
            Some("{n} items".into()),
        );

        let mut ar = LocaleEntries::new();
        ar.insert("greeting", "مرحبا {name}");

        let mut dictionary = Dictionary::new();
        dictionary.add_locale("en", en);
        dictionary.add_locale("ar", ar);

        Translator::new(
            I18nConfig::new()
                .default_locale("en")
                .approved_locales(["en", "ar"]),
        )
        .with_dictionary("default", dictionary)
    }

    #[test]
    fn translated_locale_served_directly() {
        let t = sample();
        assert_eq!(
            t.t("ar", "greeting", &[("name", "سمير")]),
            Some("مرحبا سمير".into())
        );
    }

    #[test]
    fn same_language_skips_translation() {
        let t = sample();
        // en-AU shares a language with the default; default content serves.
        assert_eq!(
            t.t("en-AU", "greeting", &[("name", "Ada")]),
            Some("Hello, Ada!".into())
        );
    }

    #[test]
    fn missing_translation_falls_back_to_default_chain() {
        let t = sample();
        // Arabic has no "items" entry; the auto-installed fallback chain
        // serves the English numeric entry.
        assert_eq!(t.t_numeric("ar", "items", 2.0, &[]), Some("2 items".into()));
    }

    #[test]
    fn numeric_through_facade() {
        let t = sample();
        assert_eq!(t.t_numeric("en", "items", 1.0, &[]), Some("1 item".into()));
    }

    #[test]
    fn unknown_dictionary_errors() {
        let t = sample();
        assert!(matches!(
            t.t_from("legal", "en", "greeting", &[]),
            Err(I18nError::UnknownDictionary(name)) if name == "legal"
        ));
        // The infallible facade surfaces it as a plain miss.
        let empty = Translator::new(I18nConfig::new().dictionary_name("legal"));
        assert_eq!(empty.t("en", "greeting", &[]), None);
    }

    #[test]
    fn named_dictionaries_are_independent() {
        let mut docs_en = LocaleEntries::new();
        docs_en.insert("title", "Handbook");
        let mut docs = Dictionary::new();
        docs.add_locale("en", docs_en);

        let t = sample().with_dictionary("docs", docs);
        assert_eq!(
            t.t_from("docs", "en", "title", &[]).unwrap(),
            Some("Handbook".into())
        );
        assert_eq!(t.t("en", "title", &[]), None);
    }

    #[test]
    fn dict_returns_untranslated_entry() {
        let t = sample();
        assert_eq!(t.dict("greeting"), Some("Hello, {name}!".into()));
        assert_eq!(t.dict("nope"), None);
    }

    #[test]
    fn locale_resolution_delegates_to_config() {
        let t = sample();
        assert_eq!(t.resolve_locale(&["ar-EG"]), "ar");
        assert_eq!(t.resolve_locale(&["fr"]), "en");
    }

    #[test]
    fn preexisting_fallback_chain_is_kept() {
        let mut d = Dictionary::new();
        d.set_fallback_chain(vec!["fr".into()]);
        let t = Translator::new(I18nConfig::new()).with_dictionary("default", d);
        assert_eq!(t.dictionary("default").unwrap().fallback_chain(), ["fr"]);
    }
}
