//! Pollen Mailer
//!
//! Renders a `DailyPollenReport` into the daily alert email and delivers it
//! over SMTP.
//!
//! # Overview
//!
//! - [`build_email_html`]: styled HTML body (overall level, category table,
//!   optional weather block, recommendation, AAAAI scale, attribution)
//! - [`build_email_subject`]: one-line subject with the worst severity
//! - [`EmailMessage::compose`]: subject, HTML body and plain-text fallback
//! - [`SmtpMailer`]: STARTTLS delivery behind the [`Mailer`] trait
//!
//! # Example Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use pollen_domain::{Category, DailyPollenReport, Reading, Severity};
//! use pollen_mailer::EmailMessage;
//!
//! let at = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap().and_hms_opt(8, 0, 0).unwrap();
//! let report = DailyPollenReport::new(
//!     "06/15/2026",
//!     vec![Reading::new(Category::TreePollen, Severity::VeryHigh, "06/15/2026")],
//!     at,
//! )
//! .unwrap();
//!
//! let email = EmailMessage::compose(&report, None, "Chicago");
//! assert_eq!(email.subject, "🔴 Chicago Allergy Alert (06/15/2026): Very High");
//! assert!(email.html.contains("Tree Pollen"));
//! ```

#![warn(missing_docs)]

mod error;
mod html;
mod message;
mod smtp;
mod style;
mod subject;

pub use error::MailerError;
pub use html::build_email_html;
pub use message::EmailMessage;
pub use smtp::{Mailer, SmtpMailer, SmtpSettings, DEFAULT_SMTP_PORT, DEFAULT_SMTP_SERVER};
pub use style::{recommendation, SeverityStyle};
pub use subject::build_email_subject;
