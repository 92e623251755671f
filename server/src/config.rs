//! Server configuration parsed from environment variables.
//!
//! `main` loads `.env` through `dotenvy` first, so every key here can live in
//! either the process environment or a local `.env` file.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CONTACT_FROM: &str = "Devansh Digital Studio <onboarding@resend.dev>";
pub const DEFAULT_CONTACT_TO: &str = "devansh.studio.work@gmail.com";
pub const DEFAULT_RATE_LIMIT_PER_CLIENT: usize = 5;
pub const DEFAULT_RATE_LIMIT_GLOBAL: usize = 50;
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 600;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("{var} must name at least one recipient")]
    NoRecipients { var: &'static str },
}

/// Where contact inquiries are delivered. Absent when `RESEND_API_KEY` is unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub api_key: String,
    pub from: String,
    pub to: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_client_limit: usize,
    pub global_limit: usize,
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_client_limit: DEFAULT_RATE_LIMIT_PER_CLIENT,
            global_limit: DEFAULT_RATE_LIMIT_GLOBAL,
            window: Duration::from_secs(DEFAULT_RATE_LIMIT_WINDOW_SECS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub mail: Option<MailConfig>,
    pub rate_limit: RateLimitConfig,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `RESEND_API_KEY`: contact relay disabled when absent or blank
    /// - `CONTACT_FROM`: sender, default the studio's Resend onboarding address
    /// - `CONTACT_TO`: comma-separated recipients
    /// - `CONTACT_RATE_LIMIT_PER_CLIENT`: default 5
    /// - `CONTACT_RATE_LIMIT_GLOBAL`: default 50
    /// - `CONTACT_RATE_LIMIT_WINDOW_SECS`: default 600
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is present but unparseable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_var(&lookup, "PORT", DEFAULT_PORT)?;
        let mail = mail_config(&lookup)?;
        let rate_limit = RateLimitConfig {
            per_client_limit: parse_var(&lookup, "CONTACT_RATE_LIMIT_PER_CLIENT", DEFAULT_RATE_LIMIT_PER_CLIENT)?,
            global_limit: parse_var(&lookup, "CONTACT_RATE_LIMIT_GLOBAL", DEFAULT_RATE_LIMIT_GLOBAL)?,
            window: Duration::from_secs(parse_var(
                &lookup,
                "CONTACT_RATE_LIMIT_WINDOW_SECS",
                DEFAULT_RATE_LIMIT_WINDOW_SECS,
            )?),
        };
        Ok(Self { port, mail, rate_limit })
    }
}

fn mail_config(lookup: &impl Fn(&str) -> Option<String>) -> Result<Option<MailConfig>, ConfigError> {
    let Some(api_key) = non_blank(lookup("RESEND_API_KEY")) else {
        return Ok(None);
    };
    let from = non_blank(lookup("CONTACT_FROM")).unwrap_or_else(|| DEFAULT_CONTACT_FROM.to_owned());
    let to = match non_blank(lookup("CONTACT_TO")) {
        Some(raw) => parse_recipients(&raw),
        None => vec![DEFAULT_CONTACT_TO.to_owned()],
    };
    if to.is_empty() {
        return Err(ConfigError::NoRecipients { var: "CONTACT_TO" });
    }
    Ok(Some(MailConfig { api_key, from, to }))
}

fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match non_blank(lookup(var)) {
        None => Ok(default),
        Some(raw) => raw.parse::<T>().map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}
