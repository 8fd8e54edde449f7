//! Presenter module: turns a movie record into outbound chat messages

use anyhow::Result;
use teloxide::types::ChatId;
use tracing::{debug, warn};

use crate::movie::MovieRecord;

use super::transport::ChatTransport;
use super::ui_builder::format_movie_caption;

/// How a movie card is delivered
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MovieDelivery {
    /// Poster with the card as caption, falling back to `Text` on failure
    Photo { url: String, caption: String },
    Text { text: String },
}

/// Decide how to deliver a movie card
pub fn plan_delivery(movie: &MovieRecord, rating_label: &str) -> MovieDelivery {
    let caption = format_movie_caption(movie, rating_label);
    match &movie.poster_url {
        Some(url) => MovieDelivery::Photo {
            url: url.clone(),
            caption,
        },
        None => MovieDelivery::Text { text: caption },
    }
}

/// Send a movie card to the chat.
///
/// A rejected poster never loses the card: the caption is re-sent as a plain
/// message. Only a failure of that text send is returned as an error.
pub async fn deliver_movie<T>(
    transport: &T,
    chat_id: ChatId,
    movie: &MovieRecord,
    rating_label: &str,
) -> Result<()>
where
    T: ChatTransport + ?Sized,
{
    match plan_delivery(movie, rating_label) {
        MovieDelivery::Photo { url, caption } => {
            match transport.send_photo(chat_id, &url, &caption).await {
                Ok(()) => {
                    debug!(user_id = %chat_id, title = %movie.title, "Movie poster sent");
                    Ok(())
                }
                Err(e) => {
                    warn!(
                        user_id = %chat_id,
                        poster_url = %url,
                        error = %e,
                        "Failed to send movie poster, falling back to text"
                    );
                    transport.send_text(chat_id, &caption).await
                }
            }
        }
        MovieDelivery::Text { text } => transport.send_text(chat_id, &text).await,
    }
}
