// Process configuration, read once from the environment at startup.

use crate::modules::registrations::core::calendar::{CalendarError, WorkshopCalendar};
use crate::modules::registrations::use_cases::register_attendance::confirmation::ConfirmationTemplate;
use crate::shared::infrastructure::notifier::smtp::SmtpSettings;
use chrono::FixedOffset;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_UTC_OFFSET: &str = "+01:00";
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_FROM_ADDRESS: &str = "noreply@localhost";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("SMTP_USERNAME and SMTP_PASSWORD must be set together")]
    IncompleteCredentials,

    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    InMemory,
    Csv(PathBuf),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub calendar: WorkshopCalendar,
    pub utc_offset: FixedOffset,
    pub store: StoreConfig,
    pub smtp: Option<SmtpSettings>,
    pub confirmation: ConfirmationTemplate,
}

fn invalid(key: &'static str, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        key,
        reason: reason.to_string(),
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| invalid("BIND_ADDR", e))?;

        let calendar = match get("WORKSHOP_DATES") {
            Some(spec) => WorkshopCalendar::parse(&spec)?,
            None => WorkshopCalendar::default(),
        };

        let utc_offset = get("WORKSHOP_UTC_OFFSET")
            .unwrap_or_else(|| DEFAULT_UTC_OFFSET.to_string())
            .parse::<FixedOffset>()
            .map_err(|e| invalid("WORKSHOP_UTC_OFFSET", e))?;

        let store = match get("REGISTRATIONS_CSV") {
            Some(path) => StoreConfig::Csv(PathBuf::from(path)),
            None => StoreConfig::InMemory,
        };

        let organiser_name = get("MAIL_FROM_NAME").unwrap_or_else(|| "Workshop Registration".into());
        let confirmation = ConfirmationTemplate {
            workshop_title: get("WORKSHOP_TITLE").unwrap_or_else(|| "Workshop".into()),
            organiser_name,
            results_url: get("RESULTS_URL"),
            contact_email: get("CONTACT_EMAIL"),
            site_url: get("SITE_URL"),
        };

        let smtp = match get("SMTP_HOST") {
            None => None,
            Some(host) => {
                let port = match get("SMTP_PORT") {
                    Some(port) => port.parse::<u16>().map_err(|e| invalid("SMTP_PORT", e))?,
                    None => DEFAULT_SMTP_PORT,
                };
                let use_tls = match get("SMTP_USE_TLS") {
                    Some(flag) => flag.parse::<bool>().map_err(|e| invalid("SMTP_USE_TLS", e))?,
                    None => true,
                };
                let username = get("SMTP_USERNAME");
                let password = get("SMTP_PASSWORD");
                if username.is_some() != password.is_some() {
                    return Err(ConfigError::IncompleteCredentials);
                }
                Some(SmtpSettings {
                    host,
                    port,
                    username,
                    password,
                    use_tls,
                    from_address: get("MAIL_FROM_ADDRESS")
                        .unwrap_or_else(|| DEFAULT_FROM_ADDRESS.into()),
                })
            }
        };

        Ok(Self {
            bind_addr,
            calendar,
            utc_offset,
            store,
            smtp,
            confirmation,
        })
    }
}
