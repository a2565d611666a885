//! Outbound contact-form mail relay
//!
//! Fire-and-forget forwarding of one [`ContactMessage`] to the single fixed
//! operator address. A successful return means the relay accepted the
//! hand-off, nothing more: no delivery guarantee, no bounce handling, no
//! retry, no queueing.
//!
//! Known hardening gap, flagged rather than fixed: the submitted sender
//! email is never verified to belong to the submitter, so absent upstream
//! rate limiting the form can relay arbitrary attacker-supplied text to the
//! operator address. Whether that matters depends on the deployment's trust
//! model (public form vs internal tool), which is decided per tenant, not
//! here.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::MailConfig;
use crate::error::RelayError;
use crate::profile::ContactMessage;

/// Subject line placed on every relayed submission.
pub const RELAY_SUBJECT: &str = "New Contact Form Submission";

/// Outbound mail transport seam.
///
/// The HTTP handler depends on this trait so tests can substitute stub
/// transports without a live relay.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Compose and hand the message to the relay.
    async fn deliver(&self, message: &ContactMessage) -> Result<(), RelayError>;
}

/// SMTP relay over STARTTLS with out-of-band credentials.
pub struct SmtpRelay {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    recipient: Mailbox,
}

impl SmtpRelay {
    /// Build the relay from configuration. Fails if the relay host is
    /// unusable or the configured addresses do not parse; credentials are
    /// only exercised at send time.
    pub fn new(config: &MailConfig) -> Result<Self, RelayError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|err| RelayError::Transport(err.to_string()))?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from: parse_mailbox(&config.from)?,
            recipient: parse_mailbox(&config.recipient)?,
        })
    }
}

#[async_trait]
impl MailTransport for SmtpRelay {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), RelayError> {
        let email = Message::builder()
            .from(self.from.clone())
            .to(self.recipient.clone())
            .subject(RELAY_SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(compose_body(message))
            .map_err(|err| RelayError::Compose(err.to_string()))?;

        self.transport
            .send(email)
            .await
            .map(|_| ())
            .map_err(|err| RelayError::Send(err.to_string()))
    }
}

/// Plain-text body embedding the three submitted fields.
pub fn compose_body(message: &ContactMessage) -> String {
    format!(
        "Name: {}\nEmail: {}\nMessage: {}",
        message.name, message.email, message.message
    )
}

fn parse_mailbox(address: &str) -> Result<Mailbox, RelayError> {
    address
        .parse()
        .map_err(|err: lettre::address::AddressError| {
            RelayError::Compose(format!("bad configured address {address:?}: {err}"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MailConfig;

    fn mail_config() -> MailConfig {
        MailConfig {
            host: "smtp.example.com".to_string(),
            port: 587,
            username: "relay@example.com".to_string(),
            password: "secret".to_string(),
            from: "relay@example.com".to_string(),
            recipient: "owner@example.com".to_string(),
        }
    }

    #[test]
    fn compose_body_embeds_all_three_fields() {
        let body = compose_body(&ContactMessage {
            name: "Jo Bloggs".to_string(),
            email: "jo@example.com".to_string(),
            message: "Can you quote for a patio?".to_string(),
        });

        assert_eq!(
            body,
            "Name: Jo Bloggs\nEmail: jo@example.com\nMessage: Can you quote for a patio?"
        );
    }

    #[tokio::test]
    async fn relay_builds_from_valid_config() {
        assert!(SmtpRelay::new(&mail_config()).is_ok());
    }

    #[tokio::test]
    async fn bad_configured_address_is_a_compose_error() {
        let mut config = mail_config();
        config.recipient = "not-an-address".to_string();

        match SmtpRelay::new(&config) {
            Err(RelayError::Compose(reason)) => assert!(reason.contains("not-an-address")),
            other => panic!("expected Compose error, got {:?}", other.err()),
        }
    }
}
