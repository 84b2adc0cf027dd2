//! Run command implementation.

use super::weather_client;
use crate::cli::RunArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::pipeline::{build_alert, Alert, Outcome, RunContext};
use chrono::Local;
use pollen_extractor::HttpPageSource;
use pollen_mailer::{Mailer, MailerError, SmtpMailer};

/// Execute the run command.
///
/// Credentials are only checked once there is something to send, so an
/// off-season or weekend run succeeds without them.
pub fn execute_run(args: RunArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let ctx = RunContext {
        now: Local::now().naive_local(),
        force: args.force,
    };

    let source = HttpPageSource::new(&config.source)?;
    let weather = weather_client(config);

    if let Outcome::Built(alert) = build_alert(config, source, weather.as_ref(), formatter, ctx)? {
        let settings = config.smtp_settings(args.smtp_email, args.smtp_password, args.recipient);
        let mailer = SmtpMailer::new(&settings)?;
        send_alert(&alert, &mailer, formatter)?;
    }

    Ok(())
}

/// Deliver a built alert.
pub fn send_alert<M: Mailer>(alert: &Alert, mailer: &M, formatter: &Formatter) -> Result<()> {
    formatter.emit(&formatter.info("Sending email..."));

    match mailer.deliver(&alert.email) {
        Ok(()) => {
            formatter.emit(&formatter.success("Daily allergy alert sent"));
            Ok(())
        }
        Err(e) => {
            if matches!(e, MailerError::Authentication(_)) {
                formatter.emit(&formatter.error(
                    "Generate an app password at https://myaccount.google.com/apppasswords",
                ));
            }
            Err(e.into())
        }
    }
}
