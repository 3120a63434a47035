//! Endpoint resolution for the iTunes Store web services.
//!
//! The store exposes two endpoint families:
//!
//! - Root web services under `MZStoreServices.woa/wa/ws<Name>` — JSON
//!   catalog calls such as `wsSearch` and `wsLookup`.
//! - Store catalog pages under `MZStore.woa/wa/<subclass><Name>` — HTML
//!   storefront pages such as `viewArtist?id=909253`.
//!
//! [`Endpoint::resolve`] is a pure function from a method name plus an
//! ordered argument map to a fully qualified URL. Method names follow the
//! store's naming scheme: the leading character is uppercased (`search` →
//! `wsSearch`) and a literal `tv` prefix selects the parallel TV endpoint
//! family (`tvSearch` → `wsTVSearch`).

use crate::types::Args;

/// Base URL for store catalog pages (subclass routes).
const STORE_BASE: &str = "http://phobos.apple.com/WebObjects/MZStore.woa/wa/";

/// Base URL for the root web services. The trailing `ws` is part of every
/// endpoint name (`wsSearch`, `wsLookup`, ...).
const WS_BASE: &str =
    "http://ax.phobos.apple.com.edgesuite.net/WebObjects/MZStoreServices.woa/wa/ws";

/// Handle selecting one of the two endpoint families.
///
/// A stateless value type: [`Endpoint::root`] addresses the JSON web
/// services, [`Endpoint::with_subclass`] addresses a store-page family by
/// its URL path prefix (e.g. `viewArtist`). Handles are immutable once
/// constructed and freely discarded after use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoint {
    subclass: Option<String>,
}

impl Endpoint {
    /// The root web-service endpoint family (`MZStoreServices.woa`).
    pub fn root() -> Self {
        Self { subclass: None }
    }

    /// A store-page endpoint family scoped to `subclass` (`MZStore.woa`).
    pub fn with_subclass(subclass: impl Into<String>) -> Self {
        Self {
            subclass: Some(subclass.into()),
        }
    }

    /// The subclass path segment, if this handle is scoped to one.
    pub fn subclass(&self) -> Option<&str> {
        self.subclass.as_deref()
    }

    /// Resolve `method` + `args` into a fully qualified URL.
    ///
    /// Pure function, no I/O: identical inputs always produce an identical
    /// URL string. The query string always follows a `?`, even when `args`
    /// is empty — the live service has always been addressed with the
    /// trailing `?` and it is kept byte-for-byte.
    pub fn resolve(&self, method: &str, args: &Args) -> String {
        let (stripped, tv) = match method.strip_prefix("tv") {
            Some(rest) => (rest, true),
            None => (method, false),
        };
        let mut name = ucwords(stripped);
        if tv {
            name.insert_str(0, "TV");
        }
        let query = build_query(args);
        match self.subclass.as_deref() {
            Some(subclass) if !subclass.is_empty() => {
                format!("{STORE_BASE}{subclass}{name}?{query}")
            }
            _ => format!("{WS_BASE}{name}?{query}"),
        }
    }
}

/// Capitalize the first letter of each whitespace-delimited word.
///
/// Method names are single tokens, so in practice only the leading
/// character changes; internal camel casing is passed through untouched
/// (`viewAlbum` → `ViewAlbum`, not `Viewalbum`). The store's endpoint
/// names depend on exactly this behavior.
fn ucwords(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Serialize `args` into `key=value&...` in insertion order.
///
/// List values are comma-joined first and the whole string is
/// percent-encoded in one pass, so the join separator itself ends up
/// encoded (`entity=movie%2CtvShow`). An empty list keeps its key with an
/// empty value; an empty map yields an empty string.
fn build_query(args: &Args) -> String {
    args.iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                urlencoding::encode(k),
                urlencoding::encode(&v.to_query_value())
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
