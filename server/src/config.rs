//! Server configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! All process-level settings are read once at startup into a typed
//! `ServerConfig`. Parsing goes through a lookup function so tests can feed
//! a plain map instead of mutating the process environment.

use crate::services::email_auth::normalize_email;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_UPLOAD_MAX_BYTES: usize = 1_048_576;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} required")]
    Missing(&'static str),
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Resend credentials for delivering access codes by email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendConfig {
    pub api_key: String,
    pub from: String,
}

/// Sign-in policy for the email access-code flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Allow unknown emails to provision an account. Off by default: the
    /// sign-in UI hides sign-up and accounts are provisioned up front.
    pub sign_up_enabled: bool,
    /// Return the generated code in the API response (development only).
    pub echo_codes: bool,
    /// Normalized emails provisioned at startup.
    pub bootstrap_emails: Vec<String>,
    pub resend: Option<ResendConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub cookie_secure: bool,
    pub upload_max_bytes: usize,
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Build the config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or a numeric/boolean
    /// variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let resend = match (lookup("RESEND_API_KEY"), lookup("RESEND_FROM")) {
            (Some(api_key), Some(from)) if !api_key.is_empty() && !from.is_empty() => {
                Some(ResendConfig { api_key, from })
            }
            _ => None,
        };

        Ok(Self {
            database_url,
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
            cookie_secure: bool_or(&lookup, "COOKIE_SECURE", false)?,
            upload_max_bytes: parse_or(&lookup, "UPLOAD_MAX_BYTES", DEFAULT_UPLOAD_MAX_BYTES)?,
            auth: AuthConfig {
                sign_up_enabled: bool_or(&lookup, "AUTH_SIGN_UP_ENABLED", false)?,
                echo_codes: bool_or(&lookup, "AUTH_ECHO_CODES", false)?,
                bootstrap_emails: parse_email_list(lookup("AUTH_BOOTSTRAP_EMAILS").as_deref().unwrap_or("")),
                resend,
            },
        })
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

/// Parse a boolean flag value (`1/true/yes/on`, `0/false/no/off`).
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn bool_or<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { key, value: raw }),
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

/// Split a comma-separated email list, dropping blanks and invalid entries.
pub(crate) fn parse_email_list(raw: &str) -> Vec<String> {
    let mut emails = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        match normalize_email(entry) {
            Some(email) if !emails.contains(&email) => emails.push(email),
            Some(_) => {}
            None => tracing::warn!(entry, "ignoring invalid bootstrap email"),
        }
    }
    emails
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
