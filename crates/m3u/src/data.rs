use crate::entry::M3uEntry;

/// One logical item of a tokenized playlist: a channel entry, or a
/// pass-through line (header, directive, stray comment) carried as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum M3uData {
    Line(String),
    Entry(M3uEntry),
}

impl M3uData {
    /// Whether this item is a pass-through `#EXTM3U` header line.
    pub fn is_header(&self) -> bool {
        match self {
            M3uData::Line(line) => is_header_line(line),
            M3uData::Entry(_) => false,
        }
    }
}

/// Playlist header marker, matched case-insensitively.
pub fn is_header_line(line: &str) -> bool {
    line.get(..7)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("#EXTM3U"))
}
