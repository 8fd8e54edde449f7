//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules:
//! - `message_handler`: Entry point for incoming messages, owns dialogue storage updates
//! - `conversation`: Genre selection state transitions
//! - `presenter`: Delivers movie cards, with text fallback for failed posters
//! - `transport`: Outbound chat operations and their Telegram implementation
//! - `ui_builder`: Creates keyboards and formats messages

pub mod conversation;
pub mod message_handler;
pub mod presenter;
pub mod transport;
pub mod ui_builder;

// Re-export main handler function for use in main.rs
pub use message_handler::message_handler;

pub use conversation::{handle_text_input, SelectionOutcome};
pub use presenter::{deliver_movie, plan_delivery, MovieDelivery};
pub use transport::{ChatTransport, TelegramTransport};
