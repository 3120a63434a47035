//! iTunes Store web-service API client.
//!
//! Maps method names and argument maps onto the legacy iTunes Store
//! endpoints, issues the matching HTTP requests, and returns normalized
//! responses.
//!
//! # Endpoint mapping
//!
//! | Method                          | URL                                  | Body      |
//! |---------------------------------|--------------------------------------|-----------|
//! | [`ItunesClient::search`]        | `MZStoreServices.woa/wa/wsSearch`    | JSON      |
//! | [`ItunesClient::tv_search`]     | `MZStoreServices.woa/wa/wsTVSearch`  | JSON      |
//! | [`ItunesClient::lookup`]        | `MZStoreServices.woa/wa/wsLookup`    | JSON      |
//! | [`ItunesClient::view_artist`]   | `MZStore.woa/wa/viewArtist`          | raw HTML  |
//! | [`ItunesClient::view_album`]    | `MZStore.woa/wa/viewAlbum`           | raw HTML  |
//! | [`ItunesClient::artist_exists`] | `MZStore.woa/wa/viewArtist` (HEAD)   | —         |
//! | [`ItunesClient::call`]          | any method name, resolved at runtime | JSON      |
//!
//! # URL resolution
//!
//! [`Endpoint::resolve`] is pure and usable without a client, for callers
//! who only want the URL:
//!
//! ```
//! use itunes_api::{Args, Endpoint};
//!
//! let url = Endpoint::root().resolve(
//!     "search",
//!     &Args::new()
//!         .set("term", "wilco")
//!         .set("media", "music")
//!         .set("limit", 5_u64),
//! );
//! assert_eq!(
//!     url,
//!     "http://ax.phobos.apple.com.edgesuite.net/WebObjects/MZStoreServices.woa/wa/wsSearch\
//!      ?term=wilco&media=music&limit=5",
//! );
//! ```
//!
//! Method names keep the store's naming quirks: the leading character is
//! uppercased, internal camel casing is preserved, and a literal `tv`
//! prefix switches to the parallel TV endpoint family (`tvSearch` →
//! `wsTVSearch`).
//!
//! Every request is a single blocking round trip; the crate performs no
//! retries, caching, or authentication.

pub mod client;
pub mod endpoint;
pub mod error;
mod search;
mod store;
pub mod types;

pub use client::{ClientConfig, ItunesClient};
pub use endpoint::Endpoint;
pub use error::{ItunesError, Result};
pub use search::SearchQuery;
pub use types::{Arg, Args, Media, Response, ResultPage};
