//! Error types for the Mailer

use thiserror::Error;

/// Errors that can occur while building or sending the alert email
#[derive(Error, Debug)]
pub enum MailerError {
    /// Sender, password or recipient not configured
    #[error("Missing email configuration: {0}")]
    MissingCredentials(String),

    /// A sender or recipient address failed to parse
    #[error("Invalid address: {0}")]
    Address(String),

    /// The MIME message could not be assembled
    #[error("Failed to build message: {0}")]
    Message(String),

    /// The server rejected the login
    #[error("SMTP authentication failed: {0}")]
    Authentication(String),

    /// Connection, TLS or protocol failure
    #[error("SMTP error: {0}")]
    Transport(String),
}

impl From<lettre::address::AddressError> for MailerError {
    fn from(e: lettre::address::AddressError) -> Self {
        MailerError::Address(e.to_string())
    }
}

impl From<lettre::error::Error> for MailerError {
    fn from(e: lettre::error::Error) -> Self {
        MailerError::Message(e.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for MailerError {
    fn from(e: lettre::transport::smtp::Error) -> Self {
        // 530/534/535 are the login-related permanent replies
        let auth_code = e
            .status()
            .map(|code| matches!(code.to_string().as_str(), "530" | "534" | "535"))
            .unwrap_or(false);

        if auth_code {
            MailerError::Authentication(format!("{}. Check your app password.", e))
        } else {
            MailerError::Transport(e.to_string())
        }
    }
}
