use crate::domain::error::AppResult;

#[derive(Debug, Clone)]
pub struct MailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Outbound mail abstraction. The demo wires a sender that logs instead of
/// delivering.
pub trait MailSender: 'static + Sync + Send {
    fn send(&self, message: &MailMessage) -> AppResult<()>;
}
