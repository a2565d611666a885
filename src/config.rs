//! Environment configuration
//!
//! All runtime configuration is injected as constructor parameters; nothing
//! reads the process environment except [`ServiceConfig::from_env`], so tests
//! can substitute arbitrary values without environment manipulation.
//!
//! Mail settings are strict: a missing credential is a startup error.
//! Store settings are lenient: a missing or malformed tenant id must not
//! prevent the process from serving, because the page path falls back to a
//! "profile unavailable" render.

use crate::error::ConfigError;

/// Document-store connection settings plus the fixed tenant-record id.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// MongoDB connection string.
    pub uri: String,
    /// Database holding the tenant collection.
    pub database: String,
    /// Fixed per-deployment tenant document id. Never user-supplied at
    /// request time. May be absent or garbage; the lookup fails soft.
    pub tenant_id: String,
}

/// Outbound SMTP relay settings.
#[derive(Clone)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Sender address placed on relayed messages.
    pub from: String,
    /// The single fixed operator address all submissions are forwarded to.
    pub recipient: String,
}

impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("from", &self.from)
            .field("recipient", &self.recipient)
            .finish()
    }
}

/// Full service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub store: StoreConfig,
    pub mail: MailConfig,
}

const DEFAULT_DATABASE: &str = "test";
const DEFAULT_SMTP_PORT: u16 = 587;

impl StoreConfig {
    /// Read store settings from the process environment. Infallible by
    /// design: absent values stay empty and surface later as the
    /// fail-soft "profile unavailable" outcome.
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    /// Read store settings through an injected variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            uri: optional(&lookup, "MONGODB_URI"),
            database: {
                let db = optional(&lookup, "MONGODB_DATABASE");
                if db.is_empty() {
                    DEFAULT_DATABASE.to_string()
                } else {
                    db
                }
            },
            tenant_id: optional(&lookup, "TENANT_ID"),
        }
    }
}

impl MailConfig {
    /// Read relay settings from the process environment. Strict: the relay
    /// cannot run without its account identity and secret.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Read relay settings through an injected variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: required(&lookup, "SMTP_HOST")?,
            port: match lookup("SMTP_PORT") {
                Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                    name: "SMTP_PORT",
                    reason: format!("not a port number: {raw}"),
                })?,
                None => DEFAULT_SMTP_PORT,
            },
            username: required(&lookup, "SMTP_USERNAME")?,
            password: required(&lookup, "SMTP_PASSWORD")?,
            from: required(&lookup, "MAIL_FROM")?,
            recipient: required(&lookup, "MAIL_RECIPIENT")?,
        })
    }
}

impl ServiceConfig {
    /// Read full configuration from the process environment.
    ///
    /// Recognized variables: `MONGODB_URI`, `MONGODB_DATABASE`, `TENANT_ID`,
    /// `SMTP_HOST`, `SMTP_PORT`, `SMTP_USERNAME`, `SMTP_PASSWORD`,
    /// `MAIL_FROM`, `MAIL_RECIPIENT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Read full configuration through an injected variable lookup. Tests
    /// use this seam instead of mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            store: StoreConfig::from_lookup(&lookup),
            mail: MailConfig::from_lookup(&lookup)?,
        })
    }
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).ok_or(ConfigError::Missing(name))
}

fn optional<F>(lookup: &F, name: &'static str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).unwrap_or_default()
}
