use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;
use crate::domain::model::OutgoingCard;
use crate::domain::ports::Mailer;
use crate::utils::error::Result;

/// Mail submission over STARTTLS with authenticated credentials. Each send
/// composes a multipart message: the configured plain-text body plus the
/// rendered card as an HTML attachment. The transport timeout bounds
/// worst-case latency per recipient.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    subject: String,
    body: String,
}

impl SmtpMailer {
    pub fn from_config(config: &SmtpConfig) -> Result<Self> {
        let sender: Mailbox = config.sender.parse()?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .timeout(Some(Duration::from_secs(config.timeout_seconds)))
            .build();

        Ok(Self {
            transport,
            sender,
            subject: config.subject.clone(),
            body: config.body.clone(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, card: &OutgoingCard) -> Result<()> {
        let to: Mailbox = card.to.parse()?;

        let attachment = Attachment::new(card.attachment_name.clone())
            .body(card.html.clone(), ContentType::TEXT_HTML);

        let message = Message::builder()
            .from(self.sender.clone())
            .to(to)
            .subject(self.subject.clone())
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::plain(self.body.clone()))
                    .singlepart(attachment),
            )?;

        tracing::debug!(
            "Submitting {} ({} bytes) to {}",
            card.attachment_name,
            card.html.len(),
            card.to
        );
        self.transport.send(message).await?;
        Ok(())
    }
}

/// Runs the pipeline end to end without touching the network; artifacts are
/// still rendered and persisted.
pub struct DryRunMailer;

#[async_trait]
impl Mailer for DryRunMailer {
    async fn send(&self, card: &OutgoingCard) -> Result<()> {
        tracing::info!(
            "Dry run: would send {} ({} bytes) to {}",
            card.attachment_name,
            card.html.len(),
            card.to
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SmtpConfig {
        SmtpConfig {
            host: "smtp.example.com".to_string(),
            port: 587,
            username: "bingo@example.com".to_string(),
            password: "secret".to_string(),
            sender: "bingo@example.com".to_string(),
            subject: "Meeting Bingo Card".to_string(),
            body: "Please find your Meeting Bingo card attached!".to_string(),
            timeout_seconds: 30,
        }
    }

    #[test]
    fn test_from_config_accepts_valid_sender() {
        assert!(SmtpMailer::from_config(&config()).is_ok());
    }

    #[test]
    fn test_from_config_rejects_malformed_sender() {
        let mut config = config();
        config.sender = "not an address".to_string();
        assert!(SmtpMailer::from_config(&config).is_err());
    }

    #[tokio::test]
    async fn test_send_rejects_malformed_recipient_without_network() {
        let mailer = SmtpMailer::from_config(&config()).unwrap();
        let card = OutgoingCard {
            to: "@@".to_string(),
            attachment_name: "x.html".to_string(),
            html: b"<html>".to_vec(),
        };

        // Address parsing fails before any connection is attempted.
        assert!(mailer.send(&card).await.is_err());
    }

    #[tokio::test]
    async fn test_dry_run_mailer_always_succeeds() {
        let card = OutgoingCard {
            to: "alice@example.com".to_string(),
            attachment_name: "alice.html".to_string(),
            html: b"<html>".to_vec(),
        };
        assert!(DryRunMailer.send(&card).await.is_ok());
    }
}
