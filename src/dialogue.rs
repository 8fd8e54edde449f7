//! Genre selection dialogue module for handling conversation state with users.

use serde::{Deserialize, Serialize};
use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};

use crate::genre::Genre;

/// Represents the conversation state for genre selection dialogue
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenreDialogueState {
    #[default]
    Idle,
    AwaitingGenre,
}

/// Type alias for our genre dialogue
pub type GenreDialogue = Dialogue<GenreDialogueState, InMemStorage<GenreDialogueState>>;

/// Validates a genre selection input against the menu shown in `language`
pub fn validate_genre_selection(input: &str, language: &str) -> Result<Genre, &'static str> {
    if input.trim().is_empty() {
        return Err("empty");
    }

    Genre::parse(input, language).ok_or("unknown_genre")
}

/// Check whether a message is the `/start` command, with or without a bot
/// mention or payload
pub fn is_start_command(text: &str) -> bool {
    let command = text.split_whitespace().next().unwrap_or("");
    let command = command.split('@').next().unwrap_or("");
    command == "/start"
}
