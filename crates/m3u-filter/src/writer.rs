//! Buffered playlist output with atomic file replacement.

use std::io;
use std::path::Path;

use m3u::M3uData;
use tracing::{debug, warn};

/// Accumulates filtered playlist items and writes them out in one shot.
///
/// Output is buffered in memory so the destination file is never observed in
/// a half-written state: `write_atomic` writes to a sibling temp file and
/// renames it over the destination.
#[derive(Debug, Default)]
pub struct PlaylistWriter {
    lines: Vec<String>,
    entries_written: usize,
}

impl PlaylistWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one pipeline output item to the buffer.
    pub fn push(&mut self, item: M3uData) {
        match item {
            M3uData::Line(line) => self.lines.push(line),
            M3uData::Entry(entry) => {
                let (metadata, url) = entry.into_parts();
                self.lines.extend(metadata);
                if let Some(url) = url {
                    self.lines.push(url);
                    self.entries_written += 1;
                }
            }
        }
    }

    /// Number of complete entries pushed so far.
    pub fn entries_written(&self) -> usize {
        self.entries_written
    }

    /// The buffered playlist text, newline-terminated.
    pub fn contents(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }

    /// Write the buffered playlist to `path` via a temp file and rename.
    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        let tmp_path = path.with_extension("tmp");
        std::fs::write(&tmp_path, self.contents())?;
        if let Err(e) = std::fs::rename(&tmp_path, path) {
            warn!(path = %path.display(), "failed to move temp playlist into place: {}", e);
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e);
        }
        debug!(
            path = %path.display(),
            entries = self.entries_written,
            "playlist written"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use m3u::M3uEntry;

    use super::*;

    fn sample_writer() -> PlaylistWriter {
        let mut writer = PlaylistWriter::new();
        writer.push(M3uData::Line("#EXTM3U".to_string()));
        writer.push(M3uData::Entry(M3uEntry::new(
            vec!["#EXTINF:-1 group-title=\"Sports\",ESPN".to_string()],
            Some("http://host/live/1.ts".to_string()),
        )));
        writer
    }

    #[test]
    fn contents_preserve_metadata_then_url_order() {
        let writer = sample_writer();
        assert_eq!(
            writer.contents(),
            "#EXTM3U\n#EXTINF:-1 group-title=\"Sports\",ESPN\nhttp://host/live/1.ts\n"
        );
        assert_eq!(writer.entries_written(), 1);
    }

    #[test]
    fn write_atomic_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.m3u");
        std::fs::write(&path, "stale").unwrap();

        let writer = sample_writer();
        writer.write_atomic(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, writer.contents());
        assert!(!dir.path().join("out.tmp").exists());
    }

    #[test]
    fn multi_line_metadata_blocks_stay_contiguous() {
        let mut writer = PlaylistWriter::new();
        writer.push(M3uData::Entry(M3uEntry::new(
            vec![
                "#EXTINF:-1,One".to_string(),
                "#EXTGRP:Sports".to_string(),
            ],
            Some("http://host/1.ts".to_string()),
        )));
        assert_eq!(
            writer.contents(),
            "#EXTINF:-1,One\n#EXTGRP:Sports\nhttp://host/1.ts\n"
        );
    }
}
