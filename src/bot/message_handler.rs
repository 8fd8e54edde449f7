//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, error};

use crate::context::BotContext;
use crate::dialogue::{GenreDialogue, GenreDialogueState};

use super::conversation::handle_text_input;
use super::transport::{ChatTransport, TelegramTransport};

pub async fn message_handler(
    bot: Bot,
    msg: Message,
    dialogue: GenreDialogue,
    ctx: Arc<BotContext>,
) -> Result<()> {
    // Stickers, photos and the like are treated as an empty selection
    let text = msg.text().unwrap_or_default();

    // Extract user's language code from Telegram
    let language_code = msg
        .from
        .as_ref()
        .and_then(|user| user.language_code.as_deref());

    debug!(user_id = %msg.chat.id, message_length = text.len(), "Received text message from user");

    let transport = TelegramTransport::new(bot);
    handle_message(
        &ctx,
        &transport,
        &dialogue,
        msg.chat.id,
        language_code,
        text,
    )
    .await
}

/// Run one conversation turn against the stored dialogue state.
///
/// An error anywhere in the turn resets the dialogue to idle and is answered
/// with a generic failure message.
pub async fn handle_message<T>(
    ctx: &BotContext,
    transport: &T,
    dialogue: &GenreDialogue,
    chat_id: ChatId,
    language_code: Option<&str>,
    text: &str,
) -> Result<()>
where
    T: ChatTransport + ?Sized,
{
    let stored = dialogue.get().await?;
    let state = stored.unwrap_or_default();

    let next = match handle_text_input(ctx, transport, chat_id, language_code, state, text).await {
        Ok(next) => next,
        Err(e) => {
            error!(user_id = %chat_id, error = %e, "Conversation turn failed, resetting dialogue");
            let message = ctx.localization.t_lang("internal-error", language_code);
            if let Err(send_err) = transport.send_text(chat_id, &message).await {
                error!(user_id = %chat_id, error = %send_err, "Failed to send error message");
            }
            GenreDialogueState::Idle
        }
    };

    // Idle chats keep no entry in storage
    match next {
        GenreDialogueState::Idle if stored.is_some() => dialogue.exit().await?,
        GenreDialogueState::Idle => {}
        GenreDialogueState::AwaitingGenre => dialogue.update(next).await?,
    }
    Ok(())
}
