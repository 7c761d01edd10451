//! Environment configuration module

use serde::{Deserialize, Serialize};

/// Application environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Staging/test environment
    Staging,
    /// Production environment
    Production,
}

impl Environment {
    /// Check if running in production
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Check if running in development
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    /// Get environment from `ENVIRONMENT`, falling back to `APP_ENV`
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }

    /// Default `RUST_LOG` filter for this environment
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development => "debug,sqlx=warn",
            Environment::Staging | Environment::Production => "info",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" | "test" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(format!("Invalid environment: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("Stage".parse::<Environment>().unwrap(), Environment::Staging);
        assert!("qa".parse::<Environment>().is_err());
    }

    #[test]
    fn test_unknown_value_falls_back_to_development() {
        let lookup = |_: &str| Some("nonsense".to_string());
        assert_eq!(Environment::from_lookup(&lookup), Environment::Development);
    }
}
