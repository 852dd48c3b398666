//! Mail relay — the only place that talks SMTP.
//!
//! `AppState` carries an `Arc<dyn MailRelay>`; production uses `SmtpRelay`.

use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::debug;

use crate::config::SmtpConfig;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("could not build message: {0}")]
    Message(String),

    #[error("relay rejected message: {0}")]
    Transport(String),
}

/// A single outgoing email.
#[derive(Debug, Clone, Copy)]
pub struct OutgoingMail<'a> {
    pub to: &'a str,
    pub subject: &'a str,
    pub body: &'a str,
}

#[async_trait]
pub trait MailRelay: Send + Sync {
    async fn send(&self, mail: OutgoingMail<'_>) -> Result<(), RelayError>;
}

/// SMTP relay over STARTTLS with username/password credentials.
pub struct SmtpRelay {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpRelay {
    pub fn new(config: &SmtpConfig, from: &str) -> Result<Self> {
        let from: Mailbox = from
            .parse()
            .with_context(|| format!("MAIL_FROM '{from}' is not a valid mailbox"))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .with_context(|| format!("invalid SMTP relay host '{}'", config.host))?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl MailRelay for SmtpRelay {
    async fn send(&self, mail: OutgoingMail<'_>) -> Result<(), RelayError> {
        let to = mail
            .to
            .parse::<Mailbox>()
            .map_err(|e| RelayError::InvalidAddress {
                address: mail.to.to_string(),
                reason: e.to_string(),
            })?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(mail.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(mail.body.to_string())
            .map_err(|e| RelayError::Message(e.to_string()))?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        debug!("Relay accepted mail to {}: {:?}", mail.to, response.code());
        Ok(())
    }
}
