//! UI Builder module for creating keyboards and formatting messages

use teloxide::types::{KeyboardButton, KeyboardMarkup};
use teloxide::utils::html;

use crate::movie::MovieRecord;

/// Create the reply keyboard offering one button per genre, all on one row
pub fn create_genre_keyboard(options: &[&str], placeholder: &str) -> KeyboardMarkup {
    let row: Vec<KeyboardButton> = options
        .iter()
        .map(|option| KeyboardButton::new(*option))
        .collect();

    KeyboardMarkup::new(vec![row])
        .resize_keyboard()
        .input_field_placeholder(placeholder)
}

/// Format the HTML card shown for a movie, used as photo caption or as a
/// plain message
pub fn format_movie_caption(movie: &MovieRecord, rating_label: &str) -> String {
    format!(
        "🎥 <b>{}</b> ({})\n⭐ {}: {}/10\n📝 {}",
        html::escape(&movie.title),
        html::escape(&movie.year),
        html::escape(rating_label),
        html::escape(&movie.rating),
        html::escape(&movie.description)
    )
}
