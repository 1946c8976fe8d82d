//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::aws::sign::DEFAULT_ENDPOINT;
use crate::error::{PaapiError, Result as PaapiResult};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Environment variable holding the access key ID.
pub const KEY_ENV: &str = "AWS_KEY";
/// Environment variable holding the secret key.
pub const SECRET_ENV: &str = "AWS_SECRET";
/// Environment variable holding the partner (associate) tag.
pub const TAG_ENV: &str = "AWS_TAG";

/// Resolved request credentials, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Access key ID sent as `AWSAccessKeyId`.
    pub access_key_id: String,
    /// Secret key used as the HMAC key. Never placed in the URL.
    pub secret_key: String,
    /// Partner tag sent as `AssociateTag`.
    pub partner_tag: String,
}

impl Credentials {
    /// Creates credentials from explicit values.
    pub fn new(
        access_key_id: impl Into<String>,
        secret_key: impl Into<String>,
        partner_tag: impl Into<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_key: secret_key.into(),
            partner_tag: partner_tag.into(),
        }
    }
}

/// Application configuration with layered loading.
///
/// Credentials left unset here fall back to the `AWS_KEY`, `AWS_SECRET`
/// and `AWS_TAG` environment variables when [`Config::credentials`] is
/// called; absence from both sources is a configuration error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Access key ID
    #[serde(default)]
    pub access_key_id: Option<String>,

    /// Secret key for request signing
    #[serde(default)]
    pub secret_key: Option<String>,

    /// Partner (associate) tag
    #[serde(default)]
    pub partner_tag: Option<String>,

    /// Service endpoint override
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            access_key_id: None,
            secret_key: None,
            partner_tag: None,
            endpoint: None,
            proxy: None,
            format: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("amz-paapi").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        // 4. Return default config
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides for the non-credential
    /// settings. Credential fallback happens in [`Config::credentials`].
    pub fn with_env(mut self) -> Self {
        if let Ok(endpoint) = std::env::var("AWS_ENDPOINT") {
            self.endpoint = Some(endpoint);
        }

        if let Ok(proxy) = std::env::var("AWS_PROXY") {
            self.proxy = Some(proxy);
        }

        self
    }

    /// Resolves credentials: explicit config value first, then the named
    /// environment variable. Missing both is a configuration error.
    pub fn credentials(&self) -> PaapiResult<Credentials> {
        Ok(Credentials {
            access_key_id: resolve_credential(&self.access_key_id, KEY_ENV, "access key ID")?,
            secret_key: resolve_credential(&self.secret_key, SECRET_ENV, "secret key")?,
            partner_tag: resolve_credential(&self.partner_tag, TAG_ENV, "partner tag")?,
        })
    }

    /// The service endpoint, defaulted when not configured.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }
}

fn resolve_credential(explicit: &Option<String>, env_var: &str, what: &str) -> PaapiResult<String> {
    explicit.clone().or_else(|| std::env::var(env_var).ok()).ok_or_else(|| {
        PaapiError::Configuration(format!(
            "missing {}: provide it explicitly or set the {} environment variable",
            what, env_var
        ))
    })
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, markdown, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::ENV_LOCK;
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.access_key_id.is_none());
        assert!(config.secret_key.is_none());
        assert!(config.partner_tag.is_none());
        assert!(config.endpoint.is_none());
        assert!(config.proxy.is_none());
        assert_eq!(config.format, OutputFormat::Table);
    }

    #[test]
    fn test_endpoint_default() {
        let config = Config::default();
        assert_eq!(config.endpoint(), "http://webservices.amazon.com/onca/xml");

        let mut config = Config::default();
        config.endpoint = Some("http://localhost:8080/onca/xml".to_string());
        assert_eq!(config.endpoint(), "http://localhost:8080/onca/xml");
    }

    #[test]
    fn test_credentials_explicit() {
        let mut config = Config::default();
        config.access_key_id = Some("AKID".to_string());
        config.secret_key = Some("sekrit".to_string());
        config.partner_tag = Some("tag-20".to_string());

        let creds = config.credentials().unwrap();
        assert_eq!(creds.access_key_id, "AKID");
        assert_eq!(creds.secret_key, "sekrit");
        assert_eq!(creds.partner_tag, "tag-20");
    }

    #[test]
    fn test_credentials_env_fallback() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        // Save original env vars
        let orig_key = std::env::var(KEY_ENV).ok();
        let orig_secret = std::env::var(SECRET_ENV).ok();
        let orig_tag = std::env::var(TAG_ENV).ok();

        std::env::set_var(KEY_ENV, "ENVKEY");
        std::env::set_var(SECRET_ENV, "ENVSECRET");
        std::env::set_var(TAG_ENV, "envtag-20");

        // Explicit value beats the environment
        let mut config = Config::default();
        config.access_key_id = Some("EXPLICIT".to_string());

        let creds = config.credentials().unwrap();
        assert_eq!(creds.access_key_id, "EXPLICIT");
        assert_eq!(creds.secret_key, "ENVSECRET");
        assert_eq!(creds.partner_tag, "envtag-20");

        // Restore original env vars
        match orig_key {
            Some(v) => std::env::set_var(KEY_ENV, v),
            None => std::env::remove_var(KEY_ENV),
        }
        match orig_secret {
            Some(v) => std::env::set_var(SECRET_ENV, v),
            None => std::env::remove_var(SECRET_ENV),
        }
        match orig_tag {
            Some(v) => std::env::set_var(TAG_ENV, v),
            None => std::env::remove_var(TAG_ENV),
        }
    }

    #[test]
    fn test_credentials_missing() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let orig_secret = std::env::var(SECRET_ENV).ok();
        std::env::remove_var(SECRET_ENV);

        let mut config = Config::default();
        config.access_key_id = Some("AKID".to_string());
        config.partner_tag = Some("tag-20".to_string());

        let err = config.credentials().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("secret key"));
        assert!(msg.contains(SECRET_ENV));

        if let Some(v) = orig_secret {
            std::env::set_var(SECRET_ENV, v);
        }
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("TABLE".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("markdown".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);

        let err = "invalid".parse::<OutputFormat>().unwrap_err();
        assert!(err.contains("Unknown format"));
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Markdown.to_string(), "markdown");
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
    }

    #[test]
    fn test_config_from_toml() {
        let toml = r#"
            access_key_id = "AKID"
            partner_tag = "tag-20"
            endpoint = "http://localhost:9999/onca/xml"
            format = "json"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.access_key_id, Some("AKID".to_string()));
        assert_eq!(config.partner_tag, Some("tag-20".to_string()));
        assert_eq!(config.endpoint, Some("http://localhost:9999/onca/xml".to_string()));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.secret_key.is_none());
    }

    #[test]
    fn test_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            access_key_id = "FILEKEY"
            format = "csv"
            "#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.access_key_id, Some("FILEKEY".to_string()));
        assert_eq!(config.format, OutputFormat::Csv);
    }

    #[test]
    fn test_config_from_file_not_found() {
        let result = Config::from_file("/nonexistent/path/config.toml");
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_config_from_file_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml {{{{").unwrap();

        let result = Config::from_file(file.path());
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_with_env() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let orig_endpoint = std::env::var("AWS_ENDPOINT").ok();
        let orig_proxy = std::env::var("AWS_PROXY").ok();

        std::env::set_var("AWS_ENDPOINT", "http://proxy-endpoint/onca/xml");
        std::env::set_var("AWS_PROXY", "socks5://localhost:1080");

        let config = Config::new().with_env();
        assert_eq!(config.endpoint, Some("http://proxy-endpoint/onca/xml".to_string()));
        assert_eq!(config.proxy, Some("socks5://localhost:1080".to_string()));

        match orig_endpoint {
            Some(v) => std::env::set_var("AWS_ENDPOINT", v),
            None => std::env::remove_var("AWS_ENDPOINT"),
        }
        match orig_proxy {
            Some(v) => std::env::set_var("AWS_PROXY", v),
            None => std::env::remove_var("AWS_PROXY"),
        }
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let mut config = Config::default();
        config.access_key_id = Some("AKID".to_string());
        config.endpoint = Some("http://localhost/onca/xml".to_string());
        config.format = OutputFormat::Markdown;

        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.access_key_id, config.access_key_id);
        assert_eq!(parsed.endpoint, config.endpoint);
        assert_eq!(parsed.format, config.format);
    }
}
