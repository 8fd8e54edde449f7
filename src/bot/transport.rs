//! Transport module: the outbound side of the chat as seen by the bot logic

use anyhow::Result;
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{InputFile, ParseMode};

use super::ui_builder::create_genre_keyboard;

/// Outbound chat operations used by the conversation logic.
///
/// Text and captions are HTML formatted.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send a text message
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<()>;

    /// Send an image by URL with a caption
    async fn send_photo(&self, chat_id: ChatId, photo_url: &str, caption: &str) -> Result<()>;

    /// Send a text message with a fixed-choice reply keyboard
    async fn send_menu(
        &self,
        chat_id: ChatId,
        text: &str,
        options: &[&str],
        placeholder: &str,
    ) -> Result<()>;
}

/// Telegram Bot API transport
#[derive(Clone)]
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ChatTransport for TelegramTransport {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<()> {
        self.bot
            .send_message(chat_id, text)
            .parse_mode(ParseMode::Html)
            .await?;
        Ok(())
    }

    async fn send_photo(&self, chat_id: ChatId, photo_url: &str, caption: &str) -> Result<()> {
        let url = reqwest::Url::parse(photo_url)?;
        self.bot
            .send_photo(chat_id, InputFile::url(url))
            .caption(caption)
            .parse_mode(ParseMode::Html)
            .await?;
        Ok(())
    }

    async fn send_menu(
        &self,
        chat_id: ChatId,
        text: &str,
        options: &[&str],
        placeholder: &str,
    ) -> Result<()> {
        self.bot
            .send_message(chat_id, text)
            .parse_mode(ParseMode::Html)
            .reply_markup(create_genre_keyboard(options, placeholder))
            .await?;
        Ok(())
    }
}
