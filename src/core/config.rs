//! Session configuration.
//!
//! Front-ends build a `SessionConfig` from defaults, an optional TOML file
//! and their own flags, then hand it to `GameSession::new`. Values are
//! normalised by `validate()` before the session uses them:
//! - `best_of` must lie in `1..=MAX_BEST_OF`; even values round up to odd
//! - the round log is off unless `record_history` is set; `history_limit`
//!   caps it (unbounded when absent) and must be at least 1

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{Result, RpsError};

/// Longest match the session accepts.
pub const MAX_BEST_OF: u32 = 21;

/// Configuration for a `GameSession`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// RNG seed for the computer's draws.
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Match length ("best of N"). Odd, 1..=21.
    pub best_of: u32,

    /// Whether played rounds are logged for display and export.
    pub record_history: bool,

    /// Most round records kept while logging. `None` keeps every round.
    pub history_limit: Option<usize>,

    /// Whether front-ends should celebrate player wins.
    pub celebrate: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            best_of: 5,
            record_history: false,
            history_limit: None,
            celebrate: true,
        }
    }
}

impl SessionConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the match length.
    #[must_use]
    pub fn with_best_of(mut self, best_of: u32) -> Self {
        self.best_of = best_of;
        self
    }

    /// Turn the round log on or off.
    #[must_use]
    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Log rounds, keeping at most `limit` records.
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.record_history = true;
        self.history_limit = Some(limit);
        self
    }

    /// Enable or disable win celebrations.
    #[must_use]
    pub fn with_celebrate(mut self, celebrate: bool) -> Self {
        self.celebrate = celebrate;
        self
    }

    /// Normalise and check all values.
    pub fn validate(mut self) -> Result<Self> {
        self.best_of = normalize_best_of(self.best_of)?;
        if self.history_limit == Some(0) {
            return Err(RpsError::config(
                "history_limit must be at least 1; set record_history = false to disable the log",
            ));
        }
        Ok(self)
    }

    /// Parse a config from TOML. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: SessionConfig = toml::from_str(s)?;
        config.validate()
    }

    /// Load a config from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

/// Round an even match length up to the next odd one and reject
/// lengths outside `1..=MAX_BEST_OF`.
pub fn normalize_best_of(best_of: u32) -> Result<u32> {
    if best_of == 0 || best_of > MAX_BEST_OF {
        return Err(RpsError::config(format!(
            "best_of must be between 1 and {}, got {}",
            MAX_BEST_OF, best_of
        )));
    }
    if best_of % 2 == 0 {
        Ok(best_of + 1)
    } else {
        Ok(best_of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.best_of, 5);
        assert!(!config.record_history);
        assert_eq!(config.history_limit, None);
        assert!(config.celebrate);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SessionConfig::new()
            .with_seed(123)
            .with_best_of(7)
            .with_history_limit(10)
            .with_celebrate(false);

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.best_of, 7);
        assert!(config.record_history);
        assert_eq!(config.history_limit, Some(10));
        assert!(!config.celebrate);

        let config = SessionConfig::new().with_history(true);
        assert!(config.record_history);
        assert_eq!(config.history_limit, None);
    }

    #[test]
    fn test_even_best_of_rounds_up() {
        assert_eq!(normalize_best_of(4).unwrap(), 5);
        assert_eq!(normalize_best_of(1).unwrap(), 1);
        assert_eq!(normalize_best_of(20).unwrap(), 21);

        let config = SessionConfig::new().with_best_of(6).validate().unwrap();
        assert_eq!(config.best_of, 7);
    }

    #[test]
    fn test_out_of_range_best_of() {
        assert!(matches!(
            normalize_best_of(0),
            Err(RpsError::InvalidConfig { .. })
        ));
        assert!(SessionConfig::new().with_best_of(23).validate().is_err());
    }

    #[test]
    fn test_from_toml() {
        let config = SessionConfig::from_toml_str(
            r#"
            seed = 99
            best_of = 3
            record_history = true
            history_limit = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(99));
        assert_eq!(config.best_of, 3);
        assert!(config.record_history);
        assert_eq!(config.history_limit, Some(10));
        assert!(config.celebrate);
    }

    #[test]
    fn test_from_toml_empty_uses_defaults() {
        let config = SessionConfig::from_toml_str("").unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_from_toml_rejects_bad_values() {
        assert!(matches!(
            SessionConfig::from_toml_str("best_of = \"five\""),
            Err(RpsError::ConfigParse(_))
        ));
        assert!(matches!(
            SessionConfig::from_toml_str("best_of = 40"),
            Err(RpsError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_zero_history_limit_rejected() {
        assert!(matches!(
            SessionConfig::new().with_history_limit(0).validate(),
            Err(RpsError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_serialization() {
        let config = SessionConfig::new().with_seed(5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
