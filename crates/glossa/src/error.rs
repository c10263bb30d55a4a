//! Error type for dictionary and configuration operations.
//!
//! Lookup paths are infallible by design and return `Option`; errors are
//! reserved for malformed input documents and misaddressed dictionaries.

/// Errors from glossa operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// A locale tag was malformed beyond what the classifier tolerates.
    InvalidLocale(String),
    /// A dictionary document could not be parsed.
    Parse(String),
    /// A named dictionary is not registered with the translator.
    UnknownDictionary(String),
}

impl std::fmt::Display for I18nError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocale(tag) => write!(f, "invalid locale: {tag}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
            Self::UnknownDictionary(name) => write!(f, "unknown dictionary '{name}'"),
        }
    }
}

impl std::error::Error for I18nError {}

/// Convenience alias for fallible glossa operations.
pub type Result<T> = std::result::Result<T, I18nError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats() {
        assert_eq!(
            I18nError::InvalidLocale("xx!".into()).to_string(),
            "invalid locale: xx!"
        );
        assert_eq!(
            I18nError::Parse("bad json".into()).to_string(),
            "parse error: bad json"
        );
        assert_eq!(
            I18nError::UnknownDictionary("legal".into()).to_string(),
            "unknown dictionary 'legal'"
        );
    }
}
