use std::fmt;
use std::str::FromStr;

use url::Url;

/// Coarse content classification derived from an entry's media URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamKind {
    Live,
    Movie,
    Series,
    Unknown,
}

impl StreamKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StreamKind::Live => "live",
            StreamKind::Movie => "movie",
            StreamKind::Series => "series",
            StreamKind::Unknown => "unknown",
        }
    }

    /// Lookup table for URL path segments and query values. Some providers
    /// use `/tv/` for series content.
    fn from_token(token: &str) -> Option<StreamKind> {
        match token.to_ascii_lowercase().as_str() {
            "live" | "lives" => Some(StreamKind::Live),
            "movie" | "movies" => Some(StreamKind::Movie),
            "series" | "tv" => Some(StreamKind::Series),
            _ => None,
        }
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A kind token outside `live`, `movie`, `series`, `unknown`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown kind value: {0} (valid: live,movie,series,unknown)")]
pub struct ParseKindError(pub String);

impl FromStr for StreamKind {
    type Err = ParseKindError;

    /// Accepts exactly the four kind names, case-insensitively. The aliases
    /// in the URL lookup table (`lives`, `tv`, ...) are not valid here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "live" => Ok(StreamKind::Live),
            "movie" => Ok(StreamKind::Movie),
            "series" => Ok(StreamKind::Series),
            "unknown" => Ok(StreamKind::Unknown),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}

/// Derive a [`StreamKind`] from a media URL.
///
/// Path segments are inspected left to right and the first match against the
/// lookup table wins. If no segment matches, query values are consulted: all
/// values of `type` when any is present, otherwise all values of `kind`.
/// Total: a malformed URL classifies as [`StreamKind::Unknown`], never an
/// error.
pub fn classify(url: &str) -> StreamKind {
    let Ok(parsed) = Url::parse(url) else {
        return StreamKind::Unknown;
    };

    if let Some(segments) = parsed.path_segments() {
        for segment in segments {
            if let Some(kind) = StreamKind::from_token(segment) {
                return kind;
            }
        }
    }

    let values_for = |name: &str| -> Vec<String> {
        parsed
            .query_pairs()
            .filter(|(key, value)| key == name && !value.is_empty())
            .map(|(_, value)| value.into_owned())
            .collect()
    };

    let mut values = values_for("type");
    if values.is_empty() {
        values = values_for("kind");
    }
    for value in values {
        if let Some(kind) = StreamKind::from_token(&value) {
            return kind;
        }
    }

    StreamKind::Unknown
}
