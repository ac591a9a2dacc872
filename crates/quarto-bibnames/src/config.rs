//! Parser configuration.
//!
//! The defaults reproduce the built-in behavior. A TOML file can extend the
//! suffix list or tighten the prose heuristics:
//!
//! ```toml
//! extra-suffixes = ["Esq.", "V"]
//! max-name-tokens = 8
//! max-names = 200
//! recognize-others = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::vocabulary::{DEFAULT_MAX_NAME_TOKENS, DEFAULT_MAX_NAMES, is_default_suffix};

/// Errors raised while loading a [`ParserConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': {message}")]
    Invalid { field: String, message: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Tunables for [`NameParser`](crate::NameParser).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ParserConfig {
    /// Suffixes accepted in addition to the built-in list. Exact match.
    pub extra_suffixes: Vec<String>,

    /// A name with more word tokens than this is treated as prose.
    pub max_name_tokens: usize,

    /// An author field with more names than this is kept as one literal.
    pub max_names: usize,

    /// Treat a trailing `and others` as an et-al marker instead of prose.
    pub recognize_others: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            extra_suffixes: Vec::new(),
            max_name_tokens: DEFAULT_MAX_NAME_TOKENS,
            max_names: DEFAULT_MAX_NAMES,
            recognize_others: true,
        }
    }
}

impl ParserConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ParserConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loading name parser config");
        Self::from_toml_str(&content)
    }

    /// Reject values the parser cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.max_name_tokens == 0 {
            return Err(ConfigError::Invalid {
                field: "max-name-tokens".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.max_names == 0 {
            return Err(ConfigError::Invalid {
                field: "max-names".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        for suffix in &self.extra_suffixes {
            // A suffix is matched against a single token, so it can never
            // contain a separator.
            if suffix.is_empty() || suffix.contains(|c: char| c.is_whitespace() || c == ',') {
                return Err(ConfigError::Invalid {
                    field: "extra-suffixes".to_string(),
                    message: format!("'{}' is not a single word", suffix),
                });
            }
        }
        Ok(())
    }

    /// Whether `word` is in the built-in or configured suffix list.
    pub fn is_suffix(&self, word: &str) -> bool {
        is_default_suffix(word) || self.extra_suffixes.iter().any(|s| s == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = ParserConfig::from_toml_str("").unwrap();
        assert_eq!(config, ParserConfig::default());
        assert!(config.recognize_others);
        assert_eq!(config.max_name_tokens, DEFAULT_MAX_NAME_TOKENS);
        assert_eq!(config.max_names, DEFAULT_MAX_NAMES);
    }

    #[test]
    fn test_extra_suffixes_extend_builtin_list() {
        let config = ParserConfig::from_toml_str(r#"extra-suffixes = ["Esq."]"#).unwrap();
        assert!(config.is_suffix("Esq."));
        assert!(config.is_suffix("Jr."));
        assert!(!config.is_suffix("esq."));
    }

    #[test]
    fn test_zero_token_limit_is_rejected() {
        let err = ParserConfig::from_toml_str("max-name-tokens = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref field, .. } if field == "max-name-tokens"));
    }

    #[test]
    fn test_multi_word_suffix_is_rejected() {
        let err = ParserConfig::from_toml_str(r#"extra-suffixes = ["the Elder"]"#).unwrap_err();
        assert!(err.to_string().contains("'the Elder' is not a single word"));
    }

    #[test]
    fn test_unknown_key_is_a_parse_error() {
        let err = ParserConfig::from_toml_str("max-tokens = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
