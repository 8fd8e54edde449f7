//! Shared collaborators handed to every update handler.

use anyhow::Result;
use std::sync::Arc;

use crate::catalog::{KinopoiskClient, MovieCatalog};
use crate::config::BotConfig;
use crate::localization::LocalizationManager;

/// Handler context injected through the dispatcher's dependency map
pub struct BotContext {
    pub catalog: Arc<dyn MovieCatalog>,
    pub localization: LocalizationManager,
}

impl BotContext {
    pub fn new(catalog: Arc<dyn MovieCatalog>, localization: LocalizationManager) -> Self {
        Self {
            catalog,
            localization,
        }
    }

    /// Build the production context: Kinopoisk catalog and embedded locales
    pub fn from_config(config: &BotConfig) -> Result<Self> {
        let catalog = KinopoiskClient::new(
            config.kinopoisk_api_key.clone(),
            config.catalog_api_url.clone(),
            config.catalog_timeout,
        )?;
        let localization = LocalizationManager::new(&config.default_language)?;

        Ok(Self::new(Arc::new(catalog), localization))
    }
}
