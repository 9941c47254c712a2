use async_trait::async_trait;

/// Outbound SMS delivery for one-time codes.
#[async_trait]
pub trait SmsNotifier: Send + Sync {
    async fn send(&self, mobile: &str, code: &str) -> anyhow::Result<()>;
}

/// Stub notifier for environments without an SMS gateway: the code is
/// exposed through the log stream instead of a text message. Not for
/// production use.
pub struct LogSmsNotifier;

#[async_trait]
impl SmsNotifier for LogSmsNotifier {
    async fn send(&self, mobile: &str, code: &str) -> anyhow::Result<()> {
        tracing::info!("Sending OTP {} to {}", code, mobile);
        Ok(())
    }
}
