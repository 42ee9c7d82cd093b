use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use folio_contact::{DeliveryConfig, EMAILJS_API_URL, EmailJs};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub emailjs: EmailJsConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// EmailJS identifiers
///
/// Left empty when not configured; submissions then fail with
/// "configuration missing" instead of refusing to start.
#[derive(Debug, Deserialize, Clone)]
pub struct EmailJsConfig {
    #[serde(default = "default_emailjs_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub public_key: String,
    #[serde(default)]
    pub access_token: String,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            api_url: default_emailjs_api_url(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            access_token: String::new(),
        }
    }
}

impl EmailJsConfig {
    pub fn delivery_config(&self) -> DeliveryConfig {
        DeliveryConfig::new(&self.service_id, &self.template_id, &self.public_key)
    }

    pub fn client(&self) -> EmailJs {
        EmailJs::new(&self.api_url).with_access_token(&self.access_token)
    }
}

fn default_emailjs_api_url() -> String {
    EMAILJS_API_URL.to_string()
}

/// Owner details shown in the About and Contact sections
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_owner_name")]
    pub owner_name: String,
    #[serde(default = "default_headline")]
    pub headline: String,
    #[serde(default = "default_quote")]
    pub quote: String,
    #[serde(default = "default_contact_email")]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default = "default_availability")]
    pub availability: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: default_owner_name(),
            headline: default_headline(),
            quote: default_quote(),
            email: default_contact_email(),
            phone: String::new(),
            location: String::new(),
            available: default_available(),
            availability: default_availability(),
        }
    }
}

impl SiteConfig {
    /// `tel:` target with everything but digits and a leading plus removed.
    pub fn phone_href(&self) -> String {
        let digits = self
            .phone
            .chars()
            .enumerate()
            .filter(|(i, c)| c.is_ascii_digit() || (*i == 0 && *c == '+'))
            .map(|(_, c)| c)
            .collect::<String>();

        format!("tel:{digits}")
    }
}

fn default_owner_name() -> String {
    "Your Name".to_string()
}

fn default_headline() -> String {
    "Software Developer".to_string()
}

fn default_quote() -> String {
    "I'm driven to build digital products that unite visual appeal, intuitive use and precise engineering.".to_string()
}

fn default_contact_email() -> String {
    "hello@example.com".to_string()
}

fn default_available() -> bool {
    true
}

fn default_availability() -> String {
    "I'm currently open to new opportunities and exciting projects. Whether you need a full-time developer or a freelance consultant, let's talk!".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy EmailJS variables (EMAILJS_SERVICE_ID, etc.)
    /// 2. Environment variables (FOLIO__EMAILJS__SERVICE_ID, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FOLIO")
                .separator("__")
                .try_parsing(true),
        );

        for (var, key) in [
            ("EMAILJS_SERVICE_ID", "emailjs.service_id"),
            ("EMAILJS_TEMPLATE_ID", "emailjs.template_id"),
            ("EMAILJS_PUBLIC_KEY", "emailjs.public_key"),
            ("EMAILJS_ACCESS_TOKEN", "emailjs.access_token"),
        ] {
            if let Ok(value) = env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.host.is_empty() {
            return Err("Server host must not be empty".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.emailjs.api_url.is_empty() {
            return Err("EmailJS api_url must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use temp_dir::TempDir;

    use super::*;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for (key, _) in env::vars() {
            if key.starts_with("FOLIO__") || key.starts_with("EMAILJS_") {
                // SAFETY: callers hold ENV_LOCK.
                unsafe { env::remove_var(key) };
            }
        }
    }

    fn write_config(dir: &TempDir) -> std::io::Result<String> {
        let path = dir.child("folio.toml");
        std::fs::write(
            &path,
            r#"
[server]
port = 8080

[emailjs]
service_id = "service_portfolio"
template_id = "template_contact"
public_key = "public_key_123"

[site]
owner_name = "Ada Lovelace"
phone = "+44 (20) 555-0100"
"#,
        )?;

        Ok(path.to_string_lossy().into_owned())
    }

    fn config(host: &str, port: u16) -> Config {
        Config {
            server: ServerConfig {
                host: host.to_string(),
                port,
            },
            emailjs: EmailJsConfig::default(),
            site: SiteConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_zero_port() {
        assert!(config("127.0.0.1", 0).validate().is_err());
    }

    #[test]
    fn test_validation_empty_host() {
        assert!(config("", 3000).validate().is_err());
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config("127.0.0.1", 3000).validate().is_ok());
    }

    #[test]
    fn test_missing_emailjs_identifiers_are_not_a_startup_error() {
        let config = config("127.0.0.1", 3000);

        assert!(config.validate().is_ok());
        assert!(!config.emailjs.delivery_config().is_complete());
    }

    #[test]
    fn test_load_from_file() -> anyhow::Result<()> {
        let _env = ENV_LOCK.lock().unwrap_or_else(|err| err.into_inner());
        clear_env();

        let dir = TempDir::new()?;
        let path = write_config(&dir)?;
        let config = Config::load(Some(path))?;

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.emailjs.api_url, EMAILJS_API_URL);
        assert_eq!(
            config.emailjs.delivery_config(),
            DeliveryConfig::new("service_portfolio", "template_contact", "public_key_123")
        );
        assert_eq!(config.site.owner_name, "Ada Lovelace");
        assert_eq!(config.site.phone_href(), "tel:+44205550100");
        assert!(config.site.available);

        Ok(())
    }

    #[test]
    fn test_environment_overrides_file() -> anyhow::Result<()> {
        let _env = ENV_LOCK.lock().unwrap_or_else(|err| err.into_inner());
        clear_env();

        let dir = TempDir::new()?;
        let path = write_config(&dir)?;

        // SAFETY: environment access in this module is serialised by ENV_LOCK.
        unsafe {
            env::set_var("EMAILJS_SERVICE_ID", "service_legacy");
            env::set_var("FOLIO__EMAILJS__TEMPLATE_ID", "template_prefixed");
            env::set_var("FOLIO__EMAILJS__PUBLIC_KEY", "public_key_prefixed");
            env::set_var("EMAILJS_PUBLIC_KEY", "public_key_legacy");
            env::set_var("FOLIO__SERVER__PORT", "9000");
        }

        let config = Config::load(Some(path));
        clear_env();
        let config = config?;

        assert_eq!(config.server.port, 9000);
        assert_eq!(
            config.emailjs.delivery_config(),
            DeliveryConfig::new("service_legacy", "template_prefixed", "public_key_legacy")
        );
        assert_eq!(config.site.owner_name, "Ada Lovelace");

        Ok(())
    }
}
