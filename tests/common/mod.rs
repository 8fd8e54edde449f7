//! Fakes shared by the integration tests

#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::Router;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use teloxide::types::ChatId;

use kinobot::bot::ChatTransport;
use kinobot::catalog::MovieCatalog;
use kinobot::catalog_errors::CatalogError;
use kinobot::context::BotContext;
use kinobot::genre::Genre;
use kinobot::localization::LocalizationManager;
use kinobot::movie::MovieRecord;

/// A message the bot sent through the fake transport
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sent {
    Text(String),
    Photo { url: String, caption: String },
    Menu {
        text: String,
        options: Vec<String>,
        placeholder: String,
    },
}

/// Transport recording every outbound message
#[derive(Default)]
pub struct FakeTransport {
    pub sent: Mutex<Vec<Sent>>,
    pub fail_photos: bool,
    pub fail_menus: bool,
    /// Text sends containing this fragment fail
    pub fail_texts_containing: Option<String>,
}

impl FakeTransport {
    pub fn failing_photos() -> Self {
        Self {
            fail_photos: true,
            ..Default::default()
        }
    }

    pub fn failing_menus() -> Self {
        Self {
            fail_menus: true,
            ..Default::default()
        }
    }

    pub fn failing_photos_and_texts_containing(fragment: &str) -> Self {
        Self {
            fail_photos: true,
            fail_texts_containing: Some(fragment.to_string()),
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|sent| match sent {
                Sent::Text(text) => Some(text),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl ChatTransport for FakeTransport {
    async fn send_text(&self, _chat_id: ChatId, text: &str) -> Result<()> {
        if let Some(fragment) = &self.fail_texts_containing {
            if text.contains(fragment.as_str()) {
                return Err(anyhow!("Bad Request: message is too long"));
            }
        }
        self.sent.lock().unwrap().push(Sent::Text(text.to_string()));
        Ok(())
    }

    async fn send_photo(&self, _chat_id: ChatId, photo_url: &str, caption: &str) -> Result<()> {
        if self.fail_photos {
            return Err(anyhow!("Bad Request: wrong file identifier/HTTP URL specified"));
        }
        self.sent.lock().unwrap().push(Sent::Photo {
            url: photo_url.to_string(),
            caption: caption.to_string(),
        });
        Ok(())
    }

    async fn send_menu(
        &self,
        _chat_id: ChatId,
        text: &str,
        options: &[&str],
        placeholder: &str,
    ) -> Result<()> {
        if self.fail_menus {
            return Err(anyhow!("Forbidden: bot was blocked by the user"));
        }
        self.sent.lock().unwrap().push(Sent::Menu {
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            placeholder: placeholder.to_string(),
        });
        Ok(())
    }
}

/// Scripted catalog answer
#[derive(Clone, Debug)]
pub enum CatalogReply {
    Movies(Vec<MovieRecord>),
    Fail,
}

/// Catalog returning a fixed reply and recording requested genres
pub struct FakeCatalog {
    reply: CatalogReply,
    pub calls: Mutex<Vec<Genre>>,
}

impl FakeCatalog {
    pub fn new(reply: CatalogReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Genre> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MovieCatalog for FakeCatalog {
    async fn fetch_movies(&self, genre: Genre) -> Result<Vec<MovieRecord>, CatalogError> {
        self.calls.lock().unwrap().push(genre);
        match &self.reply {
            CatalogReply::Movies(movies) => Ok(movies.clone()),
            CatalogReply::Fail => Err(CatalogError::Status {
                status: 500,
                body: "Internal Server Error".to_string(),
            }),
        }
    }
}

/// Context with English messages around the given catalog
pub fn context(catalog: Arc<dyn MovieCatalog>) -> BotContext {
    let localization = LocalizationManager::new("en").expect("Failed to create localization");
    BotContext::new(catalog, localization)
}

pub fn movie(title: &str, poster_url: Option<&str>) -> MovieRecord {
    MovieRecord {
        title: title.to_string(),
        year: "1999".to_string(),
        rating: "8.5".to_string(),
        poster_url: poster_url.map(str::to_string),
        description: format!("About {title}"),
    }
}

/// Request seen by the fake catalog server
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub params: HashMap<String, String>,
    pub api_key: Option<String>,
}

#[derive(Clone, Default)]
pub struct RecordedRequests(Arc<Mutex<Vec<RecordedRequest>>>);

impl RecordedRequests {
    pub fn all(&self) -> Vec<RecordedRequest> {
        self.0.lock().unwrap().clone()
    }
}

/// Serve a fixed catalog response on an ephemeral port, returning the movie
/// endpoint URL
pub async fn spawn_catalog(
    status: StatusCode,
    body: &'static str,
    delay: Duration,
) -> (String, RecordedRequests) {
    let recorded = RecordedRequests::default();

    let app = Router::new()
        .route(
            "/v1.4/movie",
            get(
                move |State(recorded): State<RecordedRequests>,
                      Query(params): Query<HashMap<String, String>>,
                      headers: HeaderMap| async move {
                    recorded.0.lock().unwrap().push(RecordedRequest {
                        params,
                        api_key: headers
                            .get("x-api-key")
                            .and_then(|value| value.to_str().ok())
                            .map(str::to_string),
                    });
                    tokio::time::sleep(delay).await;
                    (status, body)
                },
            ),
        )
        .with_state(recorded.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/v1.4/movie"), recorded)
}
