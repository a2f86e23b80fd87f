//! Outbound notifications.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::Recipient;
use tracing::info;

use crate::config::Config;
use crate::error::{BotError, BotResult};

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str) -> BotResult<()>;
}

/// Sends plain text to a single Telegram chat.
pub struct TelegramNotifier {
    bot: Bot,
    recipient: Recipient,
}

impl TelegramNotifier {
    pub fn new(config: &Config) -> Self {
        Self {
            bot: Bot::new(&config.telegram_token),
            recipient: parse_recipient(&config.telegram_chat_id),
        }
    }
}

/// Numeric ids address a chat directly; anything else is a channel username.
fn parse_recipient(chat_id: &str) -> Recipient {
    match chat_id.trim().parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) => Recipient::ChannelUsername(chat_id.trim().to_string()),
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, message: &str) -> BotResult<()> {
        self.bot
            .send_message(self.recipient.clone(), message)
            .await
            .map_err(BotError::delivery)?;
        info!(chat = ?self.recipient, "Message delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_chat_id() {
        assert_eq!(parse_recipient("-100123"), Recipient::Id(ChatId(-100123)));
    }

    #[test]
    fn test_channel_username() {
        assert_eq!(
            parse_recipient("@homework_feed"),
            Recipient::ChannelUsername("@homework_feed".to_string())
        );
    }
}
