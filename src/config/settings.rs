//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Invitation mailer configuration
    pub mailer: MailerSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Invitation mailer configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MailerSettings {
    /// Sender address for invitation email
    pub from_address: String,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if the mailer sender address is not an email address.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        // Determine the running environment
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("mailer.from_address", "parties@example.com")?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Load from environment variables
            // APP__MAILER__FROM_ADDRESS=... -> mailer.from_address = ...
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            // Map simple environment variables
            .set_override_option(
                "mailer.from_address",
                std::env::var("MAILER_FROM_ADDRESS").ok(),
            )?
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| {
                if !settings.mailer.from_address.contains('@') {
                    return Err(ConfigError::Message(format!(
                        "mailer.from_address must be an email address, got {:?}",
                        settings.mailer.from_address
                    )));
                }
                Ok(settings)
            })
    }
}
