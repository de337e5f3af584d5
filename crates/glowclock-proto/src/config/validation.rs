use thiserror::Error;

use super::Config;

/// Errors returned when validating a [`Config`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    /// The clock font family is empty or whitespace.
    #[error("clock font family must not be empty")]
    EmptyFontFamily,

    /// The log level is empty.
    #[error("log level must not be empty")]
    EmptyLogLevel,
}

impl Config {
    /// Validates cross-field constraints serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigValidationError`] if the font family or the log level
    /// is blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use glowclock_proto::config::Config;
    ///
    /// let config = Config::default();
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.clock.font_family.trim().is_empty() {
            return Err(ConfigValidationError::EmptyFontFamily);
        }

        if self.log_level.trim().is_empty() {
            return Err(ConfigValidationError::EmptyLogLevel);
        }

        Ok(())
    }
}
