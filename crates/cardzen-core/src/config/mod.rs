use anyhow::Result;
use config::Config;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub vcard: VcardConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Rendering switches and photo lookup for generated cards.
#[derive(Debug, Clone, Deserialize)]
pub struct VcardConfig {
    /// Emit a `ROLE` line duplicating `TITLE`.
    pub emit_role: bool,
    /// Upper-case the `TYPE` labels of phone and email entries.
    pub uppercase_types: bool,
    /// Directory profile images are resolved against. Photos are disabled when unset.
    pub photo_dir: Option<String>,
}

impl Default for VcardConfig {
    fn default() -> Self {
        Self {
            emit_role: true,
            uppercase_types: true,
            photo_dir: None,
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, environment variables and an optional
    /// `config.toml`. Environment variables use the `CARDZEN__` prefix and `__`
    /// as the nesting separator (e.g. `CARDZEN__SERVER__PORT`).
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8699)?
            .set_default("logging.level", "debug")?
            .set_default("vcard.emit_role", true)?
            .set_default("vcard.uppercase_types", true)?
            // Env file
            .add_source(
                config::Environment::with_prefix("CARDZEN")
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::trace!(error = %e, "No .env file loaded");
    }

    Settings::load()
}

#[cfg(test)]
mod tests;
