//! Translatable-string dictionaries with locale fallback.
//!
//! A [`Dictionary`] maps entry ids to templates per locale. Entries are
//! either plain templates with `{name}` placeholders or numeric entries
//! whose content is chosen by the branch resolver at render time. Lookups
//! walk a fallback chain; rendering interpolates caller-supplied variables
//! and auto-injects the locale-formatted quantity as `{n}`.
//!
//! # Invariants
//!
//! 1. **Fallback chain terminates**: every lookup walks the chain exactly
//!    once, returning `None` if no locale provides the id.
//! 2. **Interpolation is single-pass**: substituted values are never
//!    re-scanned for placeholders.
//! 3. **Branch resolution uses the serving locale**: when an entry is
//!    found through the fallback chain, its branches resolve under the
//!    fallback locale's plural rules, not the requested locale's.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing id | Id in no locale | Returns `None` |
//! | Missing locale | Locale not loaded | Falls through chain |
//! | Unmatched placeholder | `{name}` with no arg | Token left as-is |
//! | No branch for `n` | Resolver miss, no default | Returns `None` |
//! | Malformed document | Bad JSON shape | `I18nError::Parse` |

use std::collections::HashMap;

use crate::branch::{NumericBranches, NumericResolver};
use crate::error::{I18nError, Result};
use crate::format::format_number;

/// A single dictionary entry.
#[derive(Debug, Clone)]
pub enum Entry {
    /// A plain template with optional `{name}` placeholders.
    Text(String),
    /// Branch templates selected by a numeric quantity, with an optional
    /// default used when no branch applies.
    Numeric {
        branches: NumericBranches<String>,
        default: Option<String>,
    },
}

/// Entries for a single locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleEntries {
    entries: HashMap<String, Entry>,
}

impl LocaleEntries {
    /// Create an empty entry set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a plain template. Re-inserting an id replaces it.
    pub fn insert(&mut self, id: impl Into<String>, template: impl Into<String>) {
        self.entries
            .insert(id.into(), Entry::Text(template.into()));
    }

    /// Insert a numeric entry.
    pub fn insert_numeric(
        &mut self,
        id: impl Into<String>,
        branches: NumericBranches<String>,
        default: Option<String>,
    ) {
        self.entries
            .insert(id.into(), Entry::Numeric { branches, default });
    }

    /// Look up an entry by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.get(id)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entry ids.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Parse entries from a JSON object document.
    ///
    /// String values become plain templates. Object values become numeric
    /// entries: each string-valued key is a branch, a `ranges` array of
    /// `{min, max, children}` records adds ranges in order, and `default`
    /// supplies the fallback template.
    ///
    /// # Example
    /// ```
    /// use glossa::dictionary::LocaleEntries;
    ///
    /// let entries = LocaleEntries::from_json_str(r#"{
    ///     "greeting": "Hello, {name}!",
    ///     "items": {
    ///         "singular": "{n} item",
    ///         "plural": "{n} items",
    ///         "ranges": [{"min": 0, "max": 0, "children": "no items"}],
    ///         "default": "{n} items"
    ///     }
    /// }"#).unwrap();
    /// assert_eq!(entries.len(), 2);
    /// ```
    pub fn from_json_str(document: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(document).map_err(|e| I18nError::Parse(e.to_string()))?;
        let serde_json::Value::Object(map) = value else {
            return Err(I18nError::Parse("document root must be an object".into()));
        };
        let mut entries = Self::new();
        for (id, value) in map {
            match value {
                serde_json::Value::String(template) => entries.insert(id, template),
                serde_json::Value::Object(fields) => {
                    let entry = parse_numeric_entry(&id, fields)?;
                    entries.entries.insert(id, entry);
                }
                other => {
                    return Err(I18nError::Parse(format!(
                        "entry '{id}' must be a string or object, got {other}"
                    )));
                }
            }
        }
        Ok(entries)
    }
}

fn parse_numeric_entry(
    id: &str,
    fields: serde_json::Map<String, serde_json::Value>,
) -> Result<Entry> {
    let mut branches = NumericBranches::new();
    let mut default = None;
    for (key, value) in fields {
        match (key.as_str(), value) {
            ("default", serde_json::Value::String(template)) => default = Some(template),
            ("ranges", serde_json::Value::Array(items)) => {
                for item in items {
                    let serde_json::Value::Object(range) = item else {
                        return Err(I18nError::Parse(format!(
                            "entry '{id}': ranges must contain objects"
                        )));
                    };
                    let min = range.get("min").and_then(serde_json::Value::as_f64);
                    let max = range.get("max").and_then(serde_json::Value::as_f64);
                    let children = range.get("children").and_then(serde_json::Value::as_str);
                    let (Some(min), Some(max), Some(children)) = (min, max, children) else {
                        return Err(I18nError::Parse(format!(
                            "entry '{id}': range needs numeric min/max and string children"
                        )));
                    };
                    branches.push_range(crate::branch::NumericRange::new(
                        min,
                        max,
                        children.to_string(),
                    ));
                }
            }
            (_, serde_json::Value::String(template)) => {
                if !crate::branch::RECOGNIZED_BRANCHES.contains(&key.as_str()) {
                    tracing::debug!(entry = id, branch = %key, "unrecognized branch name");
                }
                branches.insert(key, template);
            }
            (_, other) => {
                return Err(I18nError::Parse(format!(
                    "entry '{id}': branch '{key}' must be a string, got {other}"
                )));
            }
        }
    }
    Ok(Entry::Numeric { branches, default })
}

/// Dictionary of translatable entries across locales.
///
/// # Example
/// ```
/// use glossa::branch::NumericBranches;
/// use glossa::dictionary::{Dictionary, LocaleEntries};
///
/// let mut en = LocaleEntries::new();
/// en.insert("greeting", "Hello, {name}!");
/// en.insert_numeric(
///     "items",
///     NumericBranches::new()
///         .branch("singular", "{n} item".to_string())
///         .branch("plural", "{n} items".to_string()),
///     Some("{n} items".into()),
/// );
///
/// let mut dictionary = Dictionary::new();
/// dictionary.add_locale("en", en);
/// dictionary.set_fallback_chain(vec!["en".into()]);
///
/// assert_eq!(
///     dictionary.render("en", "greeting", &[("name", "Alice")]),
///     Some("Hello, Alice!".into())
/// );
/// assert_eq!(
///     dictionary.render_numeric("en", "items", 1.0, &[]),
///     Some("1 item".into())
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    locales: HashMap<String, LocaleEntries>,
    fallback_chain: Vec<String>,
    resolver: NumericResolver,
}

impl Dictionary {
    /// Create an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add entries for a locale, replacing any previous set.
    pub fn add_locale(&mut self, locale: impl Into<String>, entries: LocaleEntries) {
        self.locales.insert(locale.into(), entries);
    }

    /// Set the fallback chain, tried in order after the requested locale.
    pub fn set_fallback_chain(&mut self, chain: Vec<String>) {
        self.fallback_chain = chain;
    }

    /// The configured fallback chain.
    #[must_use]
    pub fn fallback_chain(&self) -> &[String] {
        &self.fallback_chain
    }

    /// Registered locale tags.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        self.locales.keys().map(String::as_str).collect()
    }

    /// The entry for `id` plus the locale that actually served it.
    fn entry_with_locale<'a>(&'a self, locale: &'a str, id: &str) -> Option<(&'a str, &'a Entry)> {
        if let Some(entry) = self.locales.get(locale).and_then(|e| e.get(id)) {
            return Some((locale, entry));
        }
        for fallback in &self.fallback_chain {
            if fallback == locale {
                continue;
            }
            if let Some(entry) = self.locales.get(fallback.as_str()).and_then(|e| e.get(id)) {
                tracing::debug!(requested = locale, served = %fallback, id, "fallback hit");
                return Some((fallback.as_str(), entry));
            }
        }
        None
    }

    /// Raw template for `id`, walking the fallback chain.
    ///
    /// Numeric entries answer their default template, or failing that
    /// their `other`/`plural` branch.
    #[must_use]
    pub fn get<'a>(&'a self, locale: &'a str, id: &str) -> Option<&'a str> {
        let (_, entry) = self.entry_with_locale(locale, id)?;
        match entry {
            Entry::Text(template) => Some(template),
            Entry::Numeric { branches, default } => default
                .as_deref()
                .or_else(|| branches.get("other").map(String::as_str))
                .or_else(|| branches.get("plural").map(String::as_str)),
        }
    }

    /// Render `id` with `{name}` interpolation.
    #[must_use]
    pub fn render(&self, locale: &str, id: &str, args: &[(&str, &str)]) -> Option<String> {
        self.get(locale, id)
            .map(|template| interpolate(template, args))
    }

    /// Render a numeric entry for quantity `n`.
    ///
    /// The branch resolver picks the template under the serving locale's
    /// plural rules; a resolver miss falls back to the entry default. The
    /// quantity is injected as `{n}`, formatted with the serving locale's
    /// number conventions; explicit args with other names pass through.
    #[must_use]
    pub fn render_numeric(
        &self,
        locale: &str,
        id: &str,
        n: f64,
        args: &[(&str, &str)],
    ) -> Option<String> {
        let (served, entry) = self.entry_with_locale(locale, id)?;
        let template = match entry {
            Entry::Text(template) => template.as_str(),
            Entry::Numeric { branches, default } => self
                .resolver
                .resolve(n, served, branches)
                .map(String::as_str)
                .or(default.as_deref())?,
        };
        let formatted = format_number(n, served);
        let mut all_args: Vec<(&str, &str)> = vec![("n", &formatted)];
        all_args.extend_from_slice(args);
        Some(interpolate(template, &all_args))
    }

    // -----------------------------------------------------------------
    // Extraction & Coverage
    // -----------------------------------------------------------------

    /// All unique entry ids across every locale, sorted.
    #[must_use]
    pub fn all_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .locales
            .values()
            .flat_map(|e| e.keys().map(String::from))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// Ids from `reference` that `locale` cannot serve, even via fallback.
    #[must_use]
    pub fn missing_keys(&self, locale: &str, reference: &[&str]) -> Vec<String> {
        let mut missing: Vec<String> = reference
            .iter()
            .filter(|id| self.entry_with_locale(locale, id).is_none())
            .map(|id| (*id).to_string())
            .collect();
        missing.sort_unstable();
        missing
    }

    /// Coverage of every locale against the union of all ids.
    #[must_use]
    pub fn coverage_report(&self) -> CoverageReport {
        let all = self.all_keys();
        let reference: Vec<&str> = all.iter().map(String::as_str).collect();
        let total = reference.len();

        let mut tags: Vec<String> = self.locales.keys().cloned().collect();
        tags.sort_unstable();

        let locales = tags
            .into_iter()
            .map(|tag| {
                let missing = self.missing_keys(&tag, &reference);
                let present = total.saturating_sub(missing.len());
                let coverage_percent = if total == 0 {
                    100.0
                } else {
                    (present as f64 / total as f64) * 100.0
                };
                LocaleCoverage {
                    locale: tag,
                    present,
                    missing,
                    coverage_percent,
                }
            })
            .collect();

        CoverageReport {
            total_keys: total,
            locales,
        }
    }
}

/// Coverage of each locale against the full id set.
///
/// Serializes to JSON so translation-completeness checks can run in CI.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CoverageReport {
    /// Unique ids across all locales.
    pub total_keys: usize,
    /// Per-locale coverage, sorted by tag.
    pub locales: Vec<LocaleCoverage>,
}

impl CoverageReport {
    /// Render the report as pretty-printed JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Per-locale coverage statistics.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LocaleCoverage {
    pub locale: String,
    /// Ids servable (including via fallback).
    pub present: usize,
    /// Ids not servable even after fallback, sorted.
    pub missing: Vec<String>,
    /// Percentage in `[0, 100]`.
    pub coverage_percent: f64,
}

/// Single-pass `{name}` interpolation. Unmatched and unclosed tokens are
/// left as-is; substituted values are never re-scanned.
fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let token = &after[..close];
                match args.iter().find(|(name, _)| *name == token) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(token);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                out.push_str(after);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
