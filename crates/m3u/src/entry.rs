use std::sync::LazyLock;

use regex::Regex;

use crate::kind::{StreamKind, classify};

static GROUP_TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)group-title="([^"]+)""#).expect("valid regex"));
static TVG_GROUP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)tvg-group="([^"]+)""#).expect("valid regex"));

/// A single channel record: the `#EXTINF` introducer line plus any absorbed
/// metadata/comment/blank lines, and the media URL that terminated the block
/// (`None` when the input ended first).
///
/// `group`, `title` and `kind` are derived once at construction, from the
/// introducer line and the URL respectively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct M3uEntry {
    metadata: Vec<String>,
    url: Option<String>,
    group: Option<String>,
    title: String,
    kind: StreamKind,
}

impl M3uEntry {
    pub fn new(metadata: Vec<String>, url: Option<String>) -> Self {
        let group = extract_group(&metadata);
        let title = extract_title(&metadata);
        let kind = url.as_deref().map_or(StreamKind::Unknown, classify);
        Self {
            metadata,
            url,
            group,
            title,
            kind,
        }
    }

    pub fn metadata_lines(&self) -> &[String] {
        &self.metadata
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Group name declared on the introducer line, if any. Absence is
    /// explicit: no empty-string sentinel.
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> StreamKind {
        self.kind
    }

    /// Consume the entry into its serializable parts.
    pub fn into_parts(self) -> (Vec<String>, Option<String>) {
        (self.metadata, self.url)
    }
}

/// First pattern that matches wins: `group-title` takes precedence over
/// `tvg-group`, and values are never merged across patterns.
fn extract_group(metadata: &[String]) -> Option<String> {
    let introducer = metadata.first()?;
    for pattern in [&GROUP_TITLE_REGEX, &TVG_GROUP_REGEX] {
        if let Some(captures) = pattern.captures(introducer) {
            return Some(captures[1].trim().to_string());
        }
    }
    None
}

/// Display title: the text after the last comma on the introducer line.
/// Anchoring on the last comma keeps quoted attribute values that contain
/// commas out of the title.
fn extract_title(metadata: &[String]) -> String {
    let Some(introducer) = metadata.first() else {
        return String::new();
    };
    match introducer.rsplit_once(',') {
        Some((_, title)) => title.trim().to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_group_title_attribute() {
        let entry = M3uEntry::new(
            vec![r#"#EXTINF:-1 tvg-id="x" group-title="Sports",ESPN"#.to_string()],
            Some("http://host/live/1.ts".to_string()),
        );
        assert_eq!(entry.group(), Some("Sports"));
        assert_eq!(entry.title(), "ESPN");
        assert_eq!(entry.kind(), StreamKind::Live);
    }

    #[test]
    fn group_title_takes_precedence_over_tvg_group() {
        let entry = M3uEntry::new(
            vec![r#"#EXTINF:-1 group-title="News" tvg-group="Sports",CNN"#.to_string()],
            Some("http://host/1.ts".to_string()),
        );
        assert_eq!(entry.group(), Some("News"));
    }

    #[test]
    fn falls_back_to_tvg_group() {
        let entry = M3uEntry::new(
            vec![r#"#EXTINF:-1 tvg-group="Kids",Cartoons"#.to_string()],
            Some("http://host/1.ts".to_string()),
        );
        assert_eq!(entry.group(), Some("Kids"));
    }

    #[test]
    fn attribute_name_match_is_case_insensitive_value_preserving() {
        let entry = M3uEntry::new(
            vec![r#"#EXTINF:-1 GROUP-TITLE="NEWS",CNN"#.to_string()],
            Some("http://host/1.ts".to_string()),
        );
        assert_eq!(entry.group(), Some("NEWS"));
    }

    #[test]
    fn title_anchors_on_the_last_comma() {
        let entry = M3uEntry::new(
            vec![r#"#EXTINF:-1 group-title="News, Local",CNN"#.to_string()],
            Some("http://host/1.ts".to_string()),
        );
        assert_eq!(entry.group(), Some("News, Local"));
        assert_eq!(entry.title(), "CNN");
    }

    #[test]
    fn missing_group_and_title() {
        let entry = M3uEntry::new(
            vec!["#EXTINF:-1".to_string()],
            Some("http://host/1.ts".to_string()),
        );
        assert_eq!(entry.group(), None);
        assert_eq!(entry.title(), "");
    }

    #[test]
    fn entry_without_url_is_unknown_kind() {
        let entry = M3uEntry::new(vec!["#EXTINF:-1,Cut short".to_string()], None);
        assert_eq!(entry.url(), None);
        assert_eq!(entry.kind(), StreamKind::Unknown);
    }
}
