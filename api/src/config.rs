//! Configuration loading for the API binary

use std::path::PathBuf;

use ghop_shared::config::{AppConfig, Environment, SmsProvider, UserStoreBackend};

/// Load the environment-specific `.env` file, then the plain `.env`
///
/// Variables already set in the process win over both files, and the
/// environment-specific file wins over `.env`. Returns the files that were
/// actually read.
pub fn load_env_files() -> Vec<PathBuf> {
    let environment = Environment::from_env();

    let mut loaded = Vec::new();
    if let Ok(path) = dotenvy::from_filename(environment.env_file()) {
        loaded.push(path);
    }
    if let Ok(path) = dotenvy::dotenv() {
        loaded.push(path);
    }
    loaded
}

/// Read the full configuration from the process environment
pub fn load() -> AppConfig {
    AppConfig::from_env()
}

/// Refuse to start in production with the built-in session secret
pub fn check_startup(config: &AppConfig) -> anyhow::Result<()> {
    if config.environment.is_production() && config.session.is_using_default_secret() {
        anyhow::bail!("SESSION_SECRET must be set in production");
    }
    Ok(())
}

/// Settings that work but should not reach production unnoticed
pub fn startup_warnings(config: &AppConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    if config.session.is_using_default_secret() {
        warnings.push("SESSION_SECRET is not set; session tokens use the built-in secret".to_string());
    }

    if config.verification.enabled && config.sms.provider == SmsProvider::None {
        warnings.push(
            "Phone verification is enabled but no SMS provider is configured; codes cannot be delivered"
                .to_string(),
        );
    }

    if config.environment.is_production() {
        if config.database.backend == UserStoreBackend::Memory {
            warnings.push("In-memory user store selected in production".to_string());
        }
        if config.sms.provider == SmsProvider::Mock {
            warnings.push("Mock SMS provider selected in production; codes are only logged".to_string());
        }
        if config.server.cors.allowed_origins.is_empty() {
            warnings.push("ALLOWED_ORIGINS is empty; browsers on the site cannot call the API".to_string());
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghop_shared::config::SessionConfig;

    #[test]
    fn test_default_config_warns_about_secret_only() {
        let warnings = startup_warnings(&AppConfig::default());

        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("SESSION_SECRET"));
    }

    #[test]
    fn test_check_startup_rejects_default_secret_in_production() {
        let config = AppConfig {
            environment: Environment::Production,
            ..AppConfig::default()
        };

        let error = check_startup(&config).unwrap_err();
        assert!(error.to_string().contains("SESSION_SECRET"));
    }

    #[test]
    fn test_check_startup_accepts_configured_secret() {
        let production = AppConfig {
            environment: Environment::Production,
            session: SessionConfig::new("site-secret"),
            ..AppConfig::default()
        };
        assert!(check_startup(&production).is_ok());

        // Development keeps running on the built-in secret
        assert!(check_startup(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_production_warnings() {
        let mut config = AppConfig {
            environment: Environment::Production,
            session: SessionConfig::new("site-secret"),
            ..AppConfig::default()
        };
        config.database.backend = UserStoreBackend::Memory;
        config.verification.enabled = true;
        config.sms.provider = SmsProvider::None;

        let warnings = startup_warnings(&config);

        assert!(warnings.iter().any(|w| w.contains("In-memory")));
        assert!(warnings.iter().any(|w| w.contains("no SMS provider")));
        assert!(warnings.iter().any(|w| w.contains("ALLOWED_ORIGINS")));
        assert!(!warnings.iter().any(|w| w.contains("SESSION_SECRET")));
    }
}
