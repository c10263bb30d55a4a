#![forbid(unsafe_code)]

//! Locale-aware text for applications: translatable dictionaries,
//! plural-aware branch selection, and formatting primitives.
//!
//! The centerpiece is numeric branch selection: content authors supply
//! named variants (`singular`, `dual`, `paucal`, `plural`, or the raw
//! CLDR category names) and optional numeric ranges, and the
//! [`branch::NumericResolver`] picks the variant a quantity calls for
//! under the target locale's plural rules. Around it sit per-locale
//! dictionaries with fallback chains, locale negotiation, and
//! number/currency/date formatting.
//!
//! ```
//! use glossa::branch::{NumericBranches, NumericResolver};
//!
//! let branches = NumericBranches::new()
//!     .range(0.0, 0.0, "empty inbox")
//!     .branch("singular", "one message")
//!     .branch("plural", "several messages");
//! let resolver = NumericResolver::new();
//!
//! assert_eq!(resolver.resolve(0.0, "en", &branches), Some(&"empty inbox"));
//! assert_eq!(resolver.resolve(1.0, "en", &branches), Some(&"one message"));
//! assert_eq!(resolver.resolve(9.0, "en", &branches), Some(&"several messages"));
//! ```

pub mod branch;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod format;
pub mod locale;
pub mod plural;
pub mod translator;

pub use branch::{NumericBranches, NumericRange, NumericResolver, RECOGNIZED_BRANCHES};
pub use config::I18nConfig;
pub use dictionary::{CoverageReport, Dictionary, Entry, LocaleCoverage, LocaleEntries};
pub use error::{I18nError, Result};
pub use format::{DateStyle, TimeStyle};
pub use locale::Direction;
pub use plural::{CldrClassifier, PluralCategory, PluralClassifier};
pub use translator::Translator;
