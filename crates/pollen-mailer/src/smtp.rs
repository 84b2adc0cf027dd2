//! SMTP delivery

use crate::error::MailerError;
use crate::message::EmailMessage;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, Message, SmtpTransport, Transport};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

/// Default relay (Gmail, STARTTLS)
pub const DEFAULT_SMTP_SERVER: &str = "smtp.gmail.com";

/// Default submission port
pub const DEFAULT_SMTP_PORT: u16 = 587;

const SEND_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can deliver a rendered alert
pub trait Mailer {
    /// Deliver one message to the configured recipient
    fn deliver(&self, email: &EmailMessage) -> Result<(), MailerError>;
}

/// Relay, credentials and addressing for one delivery
#[derive(Clone)]
pub struct SmtpSettings {
    /// SMTP relay host
    pub server: String,
    /// SMTP port (STARTTLS)
    pub port: u16,
    /// Sender account, also the login name
    pub sender: String,
    /// App password for the sender account
    pub password: String,
    /// Where the alert goes
    pub recipient: String,
    /// Display name on the `From` header
    pub sender_name: String,
}

impl SmtpSettings {
    /// Fail when any credential is missing
    pub fn validate(&self) -> Result<(), MailerError> {
        let missing: Vec<&str> = [
            ("SMTP_EMAIL", &self.sender),
            ("SMTP_PASSWORD", &self.password),
            ("ALERT_RECIPIENT", &self.recipient),
        ]
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(MailerError::MissingCredentials(format!(
                "{} not set. Please set SMTP_EMAIL, SMTP_PASSWORD and ALERT_RECIPIENT.",
                missing.join(", ")
            )))
        }
    }
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            server: DEFAULT_SMTP_SERVER.to_string(),
            port: DEFAULT_SMTP_PORT,
            sender: String::new(),
            password: String::new(),
            recipient: String::new(),
            sender_name: "Allergy Monitor 🌿".to_string(),
        }
    }
}

impl fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("server", &self.server)
            .field("port", &self.port)
            .field("sender", &self.sender)
            .field("password", &"<redacted>")
            .field("recipient", &self.recipient)
            .field("sender_name", &self.sender_name)
            .finish()
    }
}

/// Sends alerts through an SMTP relay with STARTTLS and login auth
pub struct SmtpMailer {
    transport: SmtpTransport,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    /// Validate settings and prepare the transport
    ///
    /// No connection is opened until the first delivery.
    pub fn new(settings: &SmtpSettings) -> Result<Self, MailerError> {
        settings.validate()?;

        let sender: Address = settings.sender.trim().parse()?;
        let recipient: Address = settings.recipient.trim().parse()?;

        let transport = SmtpTransport::starttls_relay(&settings.server)?
            .port(settings.port)
            .credentials(Credentials::new(
                settings.sender.trim().to_string(),
                settings.password.clone(),
            ))
            .timeout(Some(SEND_TIMEOUT))
            .build();

        debug!("SMTP relay {}:{}", settings.server, settings.port);

        Ok(Self {
            transport,
            from: Mailbox::new(Some(settings.sender_name.clone()), sender),
            to: Mailbox::new(None, recipient),
        })
    }

    /// Recipient mailbox
    pub fn recipient(&self) -> &Mailbox {
        &self.to
    }
}

/// Build the `multipart/alternative` message for an alert
pub(crate) fn build_message(
    from: Mailbox,
    to: Mailbox,
    email: &EmailMessage,
) -> Result<Message, MailerError> {
    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(email.subject.clone())
        .multipart(MultiPart::alternative_plain_html(
            email.plain.clone(),
            email.html.clone(),
        ))?;
    Ok(message)
}

impl Mailer for SmtpMailer {
    fn deliver(&self, email: &EmailMessage) -> Result<(), MailerError> {
        let message = build_message(self.from.clone(), self.to.clone(), email)?;
        self.transport.send(&message)?;
        info!("Email sent to {}", self.to.email);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> SmtpSettings {
        SmtpSettings {
            sender: "monitor@example.com".to_string(),
            password: "app-password".to_string(),
            recipient: "me@example.com".to_string(),
            ..SmtpSettings::default()
        }
    }

    #[test]
    fn test_defaults() {
        let settings = SmtpSettings::default();
        assert_eq!(settings.server, "smtp.gmail.com");
        assert_eq!(settings.port, 587);
    }

    #[test]
    fn test_missing_credentials_are_named() {
        let settings = SmtpSettings {
            password: String::new(),
            recipient: "  ".to_string(),
            ..settings()
        };
        match settings.validate() {
            Err(MailerError::MissingCredentials(msg)) => {
                assert!(msg.starts_with("SMTP_PASSWORD, ALERT_RECIPIENT not set"));
            }
            other => panic!("Expected MissingCredentials, got {:?}", other),
        }
    }

    #[test]
    fn test_mailer_rejects_missing_credentials() {
        let result = SmtpMailer::new(&SmtpSettings::default());
        assert!(matches!(result, Err(MailerError::MissingCredentials(_))));
    }

    #[test]
    fn test_mailer_rejects_bad_address() {
        let settings = SmtpSettings {
            recipient: "not-an-address".to_string(),
            ..settings()
        };
        let result = SmtpMailer::new(&settings);
        assert!(matches!(result, Err(MailerError::Address(_))));
    }

    #[test]
    fn test_mailer_builds_without_connecting() {
        let mailer = SmtpMailer::new(&settings()).unwrap();
        assert_eq!(mailer.recipient().email.to_string(), "me@example.com");
    }

    #[test]
    fn test_message_headers() {
        let from = Mailbox::new(
            Some("Allergy Monitor 🌿".to_string()),
            "monitor@example.com".parse().unwrap(),
        );
        let to = Mailbox::new(None, "me@example.com".parse().unwrap());
        let email = EmailMessage {
            subject: "🟢 Chicago Allergy Alert (06/15/2026): Low".to_string(),
            html: "<html><body>Low</body></html>".to_string(),
            plain: "Chicago Daily Allergy Report".to_string(),
        };

        let message = build_message(from, to, &email).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("multipart/alternative"));
        assert!(raw.contains("text/plain"));
        assert!(raw.contains("text/html"));
        assert!(raw.contains("<monitor@example.com>"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", settings());
        assert!(!rendered.contains("app-password"));
        assert!(rendered.contains("<redacted>"));
    }
}
