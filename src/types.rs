//! Argument and response types shared by the resolver and the dispatcher.

use serde::Deserialize;
use serde_json::Value;

/// A single argument value: a scalar or a list of scalars.
///
/// Lists are flattened to one comma-delimited string when the URL is built
/// (`entity=movie,tvShow`), matching the store's query conventions.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Int(i64),
    Uint(u64),
    Bool(bool),
    List(Vec<String>),
}

impl Arg {
    /// Normalized wire value: lists are comma-joined, scalars formatted
    /// as-is. The result is raw text; percent-encoding happens later, in
    /// one pass over the whole query string.
    pub fn to_query_value(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Int(i) => i.to_string(),
            Self::Uint(u) => u.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::List(items) => items.join(","),
        }
    }
}

impl From<&str> for Arg {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for Arg {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<i64> for Arg {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for Arg {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

impl From<bool> for Arg {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Vec<String>> for Arg {
    fn from(v: Vec<String>) -> Self {
        Self::List(v)
    }
}

impl From<Vec<&str>> for Arg {
    fn from(v: Vec<&str>) -> Self {
        Self::List(v.into_iter().map(str::to_owned).collect())
    }
}

/// Ordered argument map for endpoint resolution.
///
/// Keys keep their insertion order and the resolver serializes them in that
/// same order; no key is dropped or renamed. The map is never mutated once
/// handed to the resolver.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args(Vec<(String, Arg)>);

impl Args {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a key/value pair, builder style.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Arg>) -> Self {
        self.0.push((key.into(), value.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arg)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Normalized HTTP response envelope.
///
/// Created fresh per request, never cached. `body` is raw text for
/// storefront pages and a parsed structure for catalog calls.
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// HTTP status code.
    pub status: u16,
    /// Response headers in wire order.
    pub headers: Vec<(String, String)>,
    /// Response body.
    pub body: T,
}

/// JSON envelope returned by the `ws` catalog endpoints.
///
/// ```json
/// { "resultCount": 2, "results": [ { "artistName": "Wilco", ... }, ... ] }
/// ```
///
/// Result objects vary by media kind, so they are kept as raw JSON values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultPage {
    /// Number of results in this page.
    #[serde(rename = "resultCount", default)]
    pub result_count: u64,
    /// Catalog entries, shape depending on the entity searched for.
    #[serde(default)]
    pub results: Vec<Value>,
}

/// Catalog media kind, mapped to the `media` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Media {
    Music,
    MusicVideo,
    Movie,
    ShortFilm,
    TvShow,
    Podcast,
    Audiobook,
    Ebook,
    All,
}

impl Media {
    /// Wire value sent as the `media` parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            Self::Music => "music",
            Self::MusicVideo => "musicVideo",
            Self::Movie => "movie",
            Self::ShortFilm => "shortFilm",
            Self::TvShow => "tvShow",
            Self::Podcast => "podcast",
            Self::Audiobook => "audiobook",
            Self::Ebook => "ebook",
            Self::All => "all",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_values_join_with_comma() {
        let arg = Arg::from(vec!["movie", "tvShow"]);
        assert_eq!(arg.to_query_value(), "movie,tvShow");
    }

    #[test]
    fn empty_list_joins_to_empty_string() {
        let arg = Arg::List(Vec::new());
        assert_eq!(arg.to_query_value(), "");
    }

    #[test]
    fn scalars_pass_through() {
        assert_eq!(Arg::from("wilco").to_query_value(), "wilco");
        assert_eq!(Arg::from(5_u64).to_query_value(), "5");
        assert_eq!(Arg::from(-1_i64).to_query_value(), "-1");
        assert_eq!(Arg::from(true).to_query_value(), "true");
    }

    #[test]
    fn args_preserve_insertion_order() {
        let args = Args::new().set("z", 1_u64).set("a", 2_u64).set("m", 3_u64);
        let keys: Vec<&str> = args.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn media_wire_values() {
        assert_eq!(Media::TvShow.as_param(), "tvShow");
        assert_eq!(Media::Music.as_param(), "music");
    }

    #[test]
    fn result_page_parses_envelope() {
        let json = r#"{"resultCount":1,"results":[{"artistName":"Wilco"}]}"#;
        let page: ResultPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.result_count, 1);
        assert_eq!(page.results[0]["artistName"], "Wilco");
    }
}
