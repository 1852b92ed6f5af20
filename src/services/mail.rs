use tracing::info;

use crate::domain::error::AppResult;
use crate::domain::services::mail::{MailMessage, MailSender};

/// Local sender that logs the payload instead of delivering real mail.
pub struct TracingMailSender;

impl MailSender for TracingMailSender {
    fn send(&self, message: &MailMessage) -> AppResult<()> {
        info!(
            to = %message.to,
            subject = %message.subject,
            body = %message.body,
            "mail send stub"
        );

        Ok(())
    }
}
