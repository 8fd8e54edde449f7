//! # Kinobot
//!
//! A Telegram bot that offers a fixed menu of movie genres and answers a
//! selection with the top rated movies of that genre from the Kinopoisk
//! catalog, each shown with its poster, rating and description.

pub mod bot;
pub mod catalog;
pub mod catalog_errors;
pub mod config;
pub mod context;
pub mod dialogue;
pub mod genre;
pub mod localization;
pub mod movie;
