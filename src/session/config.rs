use chrono::Duration;

use crate::{AuthError, SecretString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    None,
    #[default]
    Lax,
    Strict,
}

impl SameSite {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SameSite::None => "None",
            SameSite::Lax => "Lax",
            SameSite::Strict => "Strict",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub cookie_path: String,
    pub cookie_secure: bool,
    pub cookie_http_only: bool,
    pub cookie_same_site: SameSite,
    pub session_ttl: Duration,
    pub secret: SecretString,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "session".to_owned(),
            cookie_path: "/".to_owned(),
            cookie_secure: true,
            cookie_http_only: true,
            cookie_same_site: SameSite::Lax,
            session_ttl: Duration::days(7),
            secret: SecretString::new(""),
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn ttl_seconds(&self) -> i64 {
        self.session_ttl.num_seconds()
    }

    pub fn validate(&self) -> Result<(), AuthError> {
        if self.secret.is_empty() {
            return Err(AuthError::ConfigurationError(
                "session secret must not be empty".to_owned(),
            ));
        }
        if self.secret.len() < 32 {
            return Err(AuthError::ConfigurationError(
                "session secret must be at least 32 bytes".to_owned(),
            ));
        }
        if self.session_ttl <= Duration::zero() {
            return Err(AuthError::ConfigurationError(
                "session ttl must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.cookie_name, "session");
        assert_eq!(config.cookie_path, "/");
        assert!(config.cookie_secure);
        assert!(config.cookie_http_only);
        assert_eq!(config.cookie_same_site, SameSite::Lax);
        assert_eq!(config.session_ttl, Duration::days(7));
        assert_eq!(config.ttl_seconds(), 604_800);
    }

    #[test]
    fn test_validate_empty_secret() {
        let config = SessionConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_short_secret() {
        let config = SessionConfig {
            secret: SecretString::new("short"),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_non_positive_ttl() {
        let config = SessionConfig {
            secret: SecretString::new("this-is-a-very-long-secret-key-for-testing"),
            session_ttl: Duration::zero(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = SessionConfig {
            secret: SecretString::new("this-is-a-very-long-secret-key-for-testing"),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_same_site_as_str() {
        assert_eq!(SameSite::None.as_str(), "None");
        assert_eq!(SameSite::Lax.as_str(), "Lax");
        assert_eq!(SameSite::Strict.as_str(), "Strict");
    }
}
