//! Conversation module: genre selection state transitions
//!
//! `Idle --/start--> AwaitingGenre --genre--> Idle`, with unknown input while
//! awaiting a genre answered by a re-prompt. Whatever happens while results
//! are fetched and shown, a genre selection always ends the dialogue.

use anyhow::Result;
use teloxide::types::ChatId;
use tracing::{debug, error, info, warn};

use crate::context::BotContext;
use crate::dialogue::{is_start_command, validate_genre_selection, GenreDialogueState};
use crate::genre::Genre;

use super::presenter::deliver_movie;
use super::transport::ChatTransport;

/// What a genre selection ended up showing the user
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// This many movie cards were delivered
    Delivered(usize),
    NoResults,
    CatalogFailed,
}

/// Handle one text message and return the state the dialogue moves to
pub async fn handle_text_input<T>(
    ctx: &BotContext,
    transport: &T,
    chat_id: ChatId,
    language_code: Option<&str>,
    state: GenreDialogueState,
    text: &str,
) -> Result<GenreDialogueState>
where
    T: ChatTransport + ?Sized,
{
    if is_start_command(text) {
        send_genre_menu(ctx, transport, chat_id, language_code).await?;
        return Ok(GenreDialogueState::AwaitingGenre);
    }

    match state {
        GenreDialogueState::Idle => {
            debug!(user_id = %chat_id, "Text received outside of genre selection");
            transport
                .send_text(chat_id, &ctx.localization.t_lang("idle-hint", language_code))
                .await?;
            Ok(GenreDialogueState::Idle)
        }
        GenreDialogueState::AwaitingGenre => {
            // Validate against the menu language `send_genre_menu` rendered
            let language = ctx.localization.resolve_language(language_code);
            match validate_genre_selection(text, language) {
                Ok(genre) => {
                    handle_genre_selection(ctx, transport, chat_id, language_code, genre).await;
                    Ok(GenreDialogueState::Idle)
                }
                Err(reason) => {
                    debug!(user_id = %chat_id, reason, "Invalid genre selection");
                    transport
                        .send_text(
                            chat_id,
                            &ctx.localization.t_lang("invalid-genre", language_code),
                        )
                        .await?;
                    // Keep dialogue active, user can try again
                    Ok(GenreDialogueState::AwaitingGenre)
                }
            }
        }
    }
}

/// Send the welcome text with the genre keyboard
pub async fn send_genre_menu<T>(
    ctx: &BotContext,
    transport: &T,
    chat_id: ChatId,
    language_code: Option<&str>,
) -> Result<()>
where
    T: ChatTransport + ?Sized,
{
    let language = ctx.localization.resolve_language(language_code);
    let menu_text = format!(
        "🎬 <b>{}</b>\n{}",
        ctx.localization.t_lang("welcome-title", language_code),
        ctx.localization.t_lang("choose-genre", language_code)
    );
    let labels = Genre::menu_labels(language);

    transport
        .send_menu(
            chat_id,
            &menu_text,
            &labels,
            &ctx.localization.t_lang("genre-placeholder", language_code),
        )
        .await
}

/// Fetch and show movies for a genre.
///
/// Failures past this point are reported to the user here; the caller only
/// has to end the dialogue.
pub async fn handle_genre_selection<T>(
    ctx: &BotContext,
    transport: &T,
    chat_id: ChatId,
    language_code: Option<&str>,
    genre: Genre,
) where
    T: ChatTransport + ?Sized,
{
    match present_genre_results(ctx, transport, chat_id, language_code, genre).await {
        Ok(outcome) => {
            info!(user_id = %chat_id, genre = %genre, outcome = ?outcome, "Genre selection completed");
        }
        Err(e) => {
            error!(user_id = %chat_id, genre = %genre, error = %e, "Failed to present genre results");
            let message = ctx.localization.t_lang("internal-error", language_code);
            if let Err(send_err) = transport.send_text(chat_id, &message).await {
                error!(user_id = %chat_id, error = %send_err, "Failed to send error message");
            }
        }
    }
}

async fn present_genre_results<T>(
    ctx: &BotContext,
    transport: &T,
    chat_id: ChatId,
    language_code: Option<&str>,
    genre: Genre,
) -> Result<SelectionOutcome>
where
    T: ChatTransport + ?Sized,
{
    let language = ctx.localization.resolve_language(language_code);
    let genre_label = genre.label(language);

    transport
        .send_text(
            chat_id,
            &ctx.localization
                .t_args_lang("searching", &[("genre", genre_label)], language_code),
        )
        .await?;

    let movies = match ctx.catalog.fetch_movies(genre).await {
        Ok(movies) => movies,
        Err(e) => {
            error!(user_id = %chat_id, genre = %genre, error = %e, "Catalog query failed");
            transport
                .send_text(
                    chat_id,
                    &ctx.localization.t_lang("catalog-failed", language_code),
                )
                .await?;
            return Ok(SelectionOutcome::CatalogFailed);
        }
    };

    if movies.is_empty() {
        warn!(user_id = %chat_id, genre = %genre, "Catalog returned no movies");
        transport
            .send_text(
                chat_id,
                &ctx.localization
                    .t_args_lang("no-results", &[("genre", genre_label)], language_code),
            )
            .await?;
        return Ok(SelectionOutcome::NoResults);
    }

    let rating_label = ctx.localization.t_lang("movie-rating", language_code);
    for movie in &movies {
        deliver_movie(transport, chat_id, movie, &rating_label).await?;
    }

    transport
        .send_text(
            chat_id,
            &ctx.localization.t_lang("search-complete", language_code),
        )
        .await?;

    Ok(SelectionOutcome::Delivered(movies.len()))
}
