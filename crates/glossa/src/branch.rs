//! Numeric branch selection.
//!
//! Given a quantity, a locale, and a set of named content branches (plus
//! optional numeric ranges), decide which branch applies. Authors may write
//! branches in either vocabulary: the raw CLDR category names (`one`,
//! `two`, `few`, ...) or the semantic aliases (`singular`, `dual`,
//! `paucal`, `plural`). The alias ladder reconciles the two, trying the
//! most specific alias first, then the raw category, then a generic plural
//! fallback. Author-supplied ranges encode explicit numeric intent and
//! take precedence over all category logic.
//!
//! # Invariants
//!
//! 1. Resolution is pure and total: no panics, no errors, no state.
//! 2. Ranges are scanned in insertion order; the first hit wins.
//! 3. Non-finite quantities select nothing (callers fall back to their
//!    own default content).
//!
//! # Example
//! ```
//! use glossa::branch::{NumericBranches, NumericResolver};
//!
//! let branches = NumericBranches::new()
//!     .branch("singular", "one item")
//!     .branch("other", "items");
//! let resolver = NumericResolver::new();
//! assert_eq!(resolver.resolve(1.0, "en", &branches), Some(&"one item"));
//! assert_eq!(resolver.resolve(4.0, "en", &branches), Some(&"items"));
//! ```

use std::collections::HashMap;

use crate::plural::{CldrClassifier, PluralCategory, PluralClassifier};

/// Branch names the resolver recognizes. Other keys may be stored but are
/// never selected by category logic.
pub const RECOGNIZED_BRANCHES: [&str; 10] = [
    "zero", "singular", "one", "dual", "two", "paucal", "few", "many", "plural", "other",
];

/// An inclusive numeric interval mapped to content.
///
/// `min <= max` is expected but not enforced; an inverted interval simply
/// never matches.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericRange<T> {
    pub min: f64,
    pub max: f64,
    pub children: T,
}

impl<T> NumericRange<T> {
    #[must_use]
    pub fn new(min: f64, max: f64, children: T) -> Self {
        Self { min, max, children }
    }

    fn contains(&self, n: f64) -> bool {
        self.min <= n && self.max >= n
    }
}

/// Named content branches plus an ordered range list.
#[derive(Debug, Clone, Default)]
pub struct NumericBranches<T> {
    named: HashMap<String, T>,
    ranges: Vec<NumericRange<T>>,
}

impl<T> NumericBranches<T> {
    /// Create an empty branch set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            named: HashMap::new(),
            ranges: Vec::new(),
        }
    }

    /// Add a named branch. Re-adding a name replaces its content.
    #[must_use]
    pub fn branch(mut self, name: impl Into<String>, children: T) -> Self {
        self.insert(name, children);
        self
    }

    /// Append a range. Ranges match in the order they were added.
    #[must_use]
    pub fn range(mut self, min: f64, max: f64, children: T) -> Self {
        self.push_range(NumericRange::new(min, max, children));
        self
    }

    /// Insert a named branch in place.
    pub fn insert(&mut self, name: impl Into<String>, children: T) {
        self.named.insert(name.into(), children);
    }

    /// Append a range in place.
    pub fn push_range(&mut self, range: NumericRange<T>) {
        self.ranges.push(range);
    }

    /// Content of a named branch.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.named.get(name)
    }

    /// Whether a named branch exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.named.contains_key(name)
    }

    /// The ordered range list.
    #[must_use]
    pub fn ranges(&self) -> &[NumericRange<T>] {
        &self.ranges
    }

    /// Branch names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.named.keys().map(String::as_str)
    }

    /// Whether no branches and no ranges are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.ranges.is_empty()
    }
}

/// Selects a branch for a quantity under a locale's plural rules.
///
/// Generic over the [`PluralClassifier`] so the selection rules can be
/// exercised with a fixed classifier while production use binds to CLDR.
#[derive(Debug, Clone, Default)]
pub struct NumericResolver<C = CldrClassifier> {
    classifier: C,
}

impl NumericResolver<CldrClassifier> {
    /// Resolver backed by CLDR classification.
    #[must_use]
    pub fn new() -> Self {
        Self {
            classifier: CldrClassifier,
        }
    }
}

impl<C: PluralClassifier> NumericResolver<C> {
    /// Resolver with a caller-supplied classifier.
    #[must_use]
    pub fn with_classifier(classifier: C) -> Self {
        Self { classifier }
    }

    /// Select the branch content for `n`, or `None` if nothing applies.
    ///
    /// Evaluation order: range match (first hit wins, bypassing category
    /// logic entirely), then the category alias ladder, then lookup of the
    /// produced name. Each step's miss falls through to the next; a miss at
    /// the end means the caller renders its own default content.
    #[must_use]
    pub fn resolve<'a, T>(
        &self,
        n: f64,
        locale: &str,
        branches: &'a NumericBranches<T>,
    ) -> Option<&'a T> {
        if !n.is_finite() {
            tracing::warn!(%n, locale, "non-finite quantity in branch resolution");
            return None;
        }
        if let Some(range) = branches.ranges.iter().find(|r| r.contains(n)) {
            return Some(&range.children);
        }
        let name = self.branch_name(n, locale, branches)?;
        branches.get(name)
    }

    /// The branch name the alias ladder produces for `n`, before lookup.
    ///
    /// The produced name is not guaranteed to be present in the branch map:
    /// the `many` rule deliberately answers `plural` whenever an `other`
    /// branch exists, even if no `plural` branch was stored.
    #[must_use]
    pub fn branch_name<T>(
        &self,
        n: f64,
        locale: &str,
        branches: &NumericBranches<T>,
    ) -> Option<&'static str> {
        if !n.is_finite() {
            return None;
        }
        let provisional = self.classifier.classify(n, locale);

        // 0
        if n == 0.0 && branches.contains("zero") {
            return Some("zero");
        }
        // 1
        if n.abs() == 1.0 && branches.contains("singular") {
            return Some("singular");
        }
        if n.abs() == 1.0 && branches.contains("one") {
            return Some("one");
        }
        if provisional == PluralCategory::One && branches.contains("singular") {
            return Some("singular");
        }
        // 2
        if n.abs() == 2.0 && branches.contains("dual") {
            return Some("dual");
        }
        if n.abs() == 2.0 && branches.contains("two") {
            return Some("two");
        }
        if provisional == PluralCategory::Two && branches.contains("dual") {
            return Some("dual");
        }
        if provisional == PluralCategory::Two && branches.contains("plural") {
            return Some("plural");
        }
        if provisional == PluralCategory::Two && branches.contains("other") {
            return Some("other");
        }
        // few
        if provisional == PluralCategory::Few && branches.contains("paucal") {
            return Some("paucal");
        }
        if provisional == PluralCategory::Few && branches.contains("other") {
            return Some("other");
        }
        // many answers the "plural" branch, not "other"
        if provisional == PluralCategory::Many && branches.contains("other") {
            return Some("plural");
        }
        // raw category name
        if branches.contains(provisional.as_str()) {
            return Some(provisional.as_str());
        }
        // generic plural fallback
        if provisional == PluralCategory::Few && branches.contains("plural") {
            return Some("plural");
        }
        if provisional == PluralCategory::Many && branches.contains("plural") {
            return Some("plural");
        }
        if provisional == PluralCategory::Other && branches.contains("plural") {
            return Some("plural");
        }
        None
    }
}
