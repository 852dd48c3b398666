use anyhow::{Context, Result};

const DEFAULT_MAIL_SUBJECT: &str = "Hii there";
const DEFAULT_MAIL_BODY: &str = "This is a test mail";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub smtp: SmtpConfig,
    pub mail: MailDefaults,
    pub port: u16,
    pub rust_log: String,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

/// Sender and fixed content used when a dispatch request does not override them.
#[derive(Debug, Clone)]
pub struct MailDefaults {
    pub from: String,
    pub subject: String,
    pub body: String,
}

impl Default for MailDefaults {
    fn default() -> Self {
        Self {
            from: "tracker@localhost".to_string(),
            subject: DEFAULT_MAIL_SUBJECT.to_string(),
            body: DEFAULT_MAIL_BODY.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", 10)?,
            smtp: SmtpConfig {
                host: require_env("SMTP_HOST")?,
                port: parse_env("SMTP_PORT", 587)?,
                username: require_env("SMTP_USERNAME")?,
                password: require_env("SMTP_PASSWORD")?,
            },
            mail: MailDefaults {
                from: require_env("MAIL_FROM")?,
                subject: std::env::var("MAIL_SUBJECT")
                    .unwrap_or_else(|_| DEFAULT_MAIL_SUBJECT.to_string()),
                body: std::env::var("MAIL_BODY").unwrap_or_else(|_| DEFAULT_MAIL_BODY.to_string()),
            },
            port: parse_env("PORT", 5000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .ok()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
