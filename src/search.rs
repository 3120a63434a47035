//! Catalog search and lookup — the root `ws` endpoint family.
//!
//! # Endpoints
//!
//! ## `search` — `GET .../MZStoreServices.woa/wa/wsSearch`
//!
//! Query parameters:
//! - `term` — search keyword (required)
//! - `media` — media kind filter (`music`, `movie`, `tvShow`, ...)
//! - `entity` — result entity kinds, comma-delimited when more than one
//! - `limit` — maximum number of results
//!
//! Response JSON:
//! ```json
//! { "resultCount": 5, "results": [ { "artistName": "Wilco", ... } ] }
//! ```
//!
//! ## `tv_search` — `GET .../wa/wsTVSearch`
//!
//! Same parameters against the parallel TV catalog.
//!
//! ## `lookup` — `GET .../wa/wsLookup?id=...`
//!
//! Same envelope with at most one result.

use crate::client::ItunesClient;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::types::{Args, Media, Response, ResultPage};

/// Parameters for a catalog search, built up fluent style.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    term: String,
    media: Option<Media>,
    entities: Vec<String>,
    limit: Option<u64>,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    /// Restrict results to one media kind.
    pub fn media(mut self, media: Media) -> Self {
        self.media = Some(media);
        self
    }

    /// Restrict results to an entity kind (e.g. `movie`, `tvShow`).
    /// Repeated calls accumulate; multiple entities are sent as one
    /// comma-delimited `entity` parameter.
    pub fn entity(mut self, entity: impl Into<String>) -> Self {
        self.entities.push(entity.into());
        self
    }

    /// Cap the number of results.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    fn to_args(&self) -> Args {
        let mut args = Args::new().set("term", self.term.as_str());
        if let Some(media) = self.media {
            args = args.set("media", media.as_param());
        }
        if !self.entities.is_empty() {
            args = args.set("entity", self.entities.clone());
        }
        if let Some(limit) = self.limit {
            args = args.set("limit", limit);
        }
        args
    }
}

impl ItunesClient {
    /// Search the catalog (`wsSearch`).
    pub fn search(&self, query: &SearchQuery) -> Result<Response<ResultPage>> {
        self.ws_call("search", &query.to_args())
    }

    /// Search the TV catalog (`wsTVSearch`).
    pub fn tv_search(&self, query: &SearchQuery) -> Result<Response<ResultPage>> {
        self.ws_call("tvSearch", &query.to_args())
    }

    /// Look up a single catalog item by its store ID (`wsLookup`).
    pub fn lookup(&self, id: u64) -> Result<Response<ResultPage>> {
        self.ws_call("lookup", &Args::new().set("id", id))
    }

    fn ws_call(&self, method: &str, args: &Args) -> Result<Response<ResultPage>> {
        let resp = self.call(&Endpoint::root(), method, args)?;
        let page: ResultPage = serde_json::from_value(resp.body)?;
        Ok(Response {
            status: resp.status,
            headers: resp.headers,
            body: page,
        })
    }
}
