//! Store catalog pages — the `MZStore.woa` subclass endpoint family.
//!
//! These endpoints render HTML storefront pages rather than JSON, so they
//! go through [`ItunesClient::fetch_storefront`]. Example:
//!
//! ```text
//! http://phobos.apple.com/WebObjects/MZStore.woa/wa/viewArtist?id=909253
//! ```

use crate::client::ItunesClient;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::types::{Args, Response};

impl ItunesClient {
    /// Fetch the storefront page for an artist (`viewArtist?id=...`).
    ///
    /// The body is the raw HTML as served. Cleaning it up into parseable
    /// XML is left to the caller.
    pub fn view_artist(&self, id: u64) -> Result<Response<String>> {
        self.store_page("viewArtist", id)
    }

    /// Fetch the storefront page for an album (`viewAlbum?id=...`).
    pub fn view_album(&self, id: u64) -> Result<Response<String>> {
        self.store_page("viewAlbum", id)
    }

    /// Probe whether an artist page exists (HEAD, true iff 200).
    pub fn artist_exists(&self, id: u64) -> Result<bool> {
        let url = store_url("viewArtist", id);
        self.exists(&url)
    }

    fn store_page(&self, subclass: &str, id: u64) -> Result<Response<String>> {
        self.fetch_storefront(&store_url(subclass, id))
    }
}

fn store_url(subclass: &str, id: u64) -> String {
    Endpoint::with_subclass(subclass).resolve("", &Args::new().set("id", id))
}
