//! # Catalog Client Module
//!
//! Queries the Kinopoisk catalog for the top rated movies of a genre and
//! normalizes the answer into [`MovieRecord`]s. Each lookup is a single HTTP
//! request with a bounded timeout and no retry.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::catalog_errors::CatalogError;
use crate::genre::Genre;
use crate::movie::MovieRecord;

/// Number of movies requested per genre
pub const RESULT_LIMIT: u32 = 5;
/// Catalog field the results are sorted by
pub const SORT_FIELD: &str = "rating.kp";
/// Catalog sort direction for descending order
pub const SORT_DESCENDING: &str = "-1";
/// Header carrying the catalog API key
pub const API_KEY_HEADER: &str = "X-API-KEY";
/// Longest error response body kept in a `CatalogError::Status`
pub const MAX_ERROR_BODY_CHARS: usize = 512;

/// Parameters of one catalog lookup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogQuery {
    pub genre: Genre,
    pub limit: u32,
}

impl CatalogQuery {
    /// Top rated query for a genre
    pub fn top_rated(genre: Genre) -> Self {
        Self {
            genre,
            limit: RESULT_LIMIT,
        }
    }

    /// Query string pairs in the catalog's parameter names
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("genres.name", self.genre.catalog_name().to_string()),
            ("limit", self.limit.to_string()),
            ("sortField", SORT_FIELD.to_string()),
            ("sortType", SORT_DESCENDING.to_string()),
        ]
    }
}

/// Source of movie recommendations
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Fetch the top rated movies for a genre, best first.
    ///
    /// `Ok(vec![])` means the catalog had no match; any failure to obtain a
    /// complete answer is an `Err`.
    async fn fetch_movies(&self, genre: Genre) -> Result<Vec<MovieRecord>, CatalogError>;
}

/// HTTP client for the Kinopoisk movie endpoint
#[derive(Clone)]
pub struct KinopoiskClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl KinopoiskClient {
    /// Create a client with the given request timeout
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            api_key,
            api_url,
        })
    }
}

#[async_trait]
impl MovieCatalog for KinopoiskClient {
    async fn fetch_movies(&self, genre: Genre) -> Result<Vec<MovieRecord>, CatalogError> {
        let query = CatalogQuery::top_rated(genre);
        debug!(genre = %genre, limit = query.limit, "Querying movie catalog");

        let response = self
            .http_client
            .get(&self.api_url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(&query.to_query_pairs())
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = truncate_error_body(&response.text().await.unwrap_or_default());
            warn!(genre = %genre, status = status.as_u16(), "Catalog returned an error status");
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let movies = parse_movies(&body)?;

        info!(genre = %genre, movies_found = movies.len(), "Catalog query completed");
        Ok(movies)
    }
}

/// Cut an error body down to `MAX_ERROR_BODY_CHARS` characters
pub fn truncate_error_body(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((cut, _)) => format!("{}…", &body[..cut]),
        None => body.to_string(),
    }
}

/// Parse a catalog response body into records, preserving upstream order.
///
/// A missing `docs` key is an empty result; a `docs` value that is not an
/// array, or a body that is not a JSON object, is malformed.
pub fn parse_movies(body: &str) -> Result<Vec<MovieRecord>, CatalogError> {
    let document: Value = serde_json::from_str(body)?;

    let object = document.as_object().ok_or_else(|| {
        CatalogError::MalformedPayload("response is not a JSON object".to_string())
    })?;

    match object.get("docs") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(docs)) => Ok(docs.iter().map(MovieRecord::from_catalog_entry).collect()),
        Some(_) => Err(CatalogError::MalformedPayload(
            "`docs` is not an array".to_string(),
        )),
    }
}
