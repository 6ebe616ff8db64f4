//! Playlist tokenizer: a single forward pass that splits raw lines into
//! channel entries and pass-through lines, never reordering anything.

use std::iter::Peekable;

use tracing::debug;

use crate::data::M3uData;
use crate::entry::M3uEntry;

fn is_entry_introducer(line: &str) -> bool {
    line.get(..7)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("#EXTINF"))
}

/// Normalize line endings (`\r\n` and bare `\r` become `\n`) and split into
/// owned lines.
pub fn split_lines(content: &str) -> Vec<String> {
    content
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(str::to_string)
        .collect()
}

/// Tokenize playlist lines into a lazy sequence of [`M3uData`] items.
pub fn parse<I>(lines: I) -> EntryIter<I::IntoIter>
where
    I: IntoIterator<Item = String>,
{
    EntryIter {
        lines: lines.into_iter().peekable(),
    }
}

/// Lazy tokenizer over playlist lines.
///
/// An `#EXTINF` line opens an entry; following lines that are blank or start
/// with `#` are absorbed into its metadata block, and the first line that is
/// neither terminates the entry as its media URL. Input ending before a URL
/// line leaves the entry with `url: None`. Any other non-blank line is
/// yielded as a one-line pass-through item; blank lines between entries are
/// dropped.
pub struct EntryIter<I: Iterator<Item = String>> {
    lines: Peekable<I>,
}

impl<I: Iterator<Item = String>> Iterator for EntryIter<I> {
    type Item = M3uData;

    fn next(&mut self) -> Option<M3uData> {
        loop {
            let line = self.lines.next()?;
            if is_entry_introducer(&line) {
                let mut metadata = vec![line];
                while let Some(absorbed) = self
                    .lines
                    .next_if(|next| next.trim().is_empty() || next.starts_with('#'))
                {
                    metadata.push(absorbed);
                }
                let url = self.lines.next().map(|url| url.trim().to_string());
                if url.is_none() {
                    debug!("input ended inside an entry, no URL line");
                }
                return Some(M3uData::Entry(M3uEntry::new(metadata, url)));
            }
            if !line.trim().is_empty() {
                return Some(M3uData::Line(line));
            }
        }
    }
}
