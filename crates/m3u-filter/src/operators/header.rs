use m3u::{M3uData, is_header_line};
use tracing::debug;

use crate::error::FilterError;
use crate::processor::PlaylistProcessor;

/// Guarantees exactly one `#EXTM3U` header in the output.
///
/// The source's own header line is reused when one arrives before the first
/// surviving entry; otherwise a bare `#EXTM3U` is synthesized immediately
/// before that entry. All other pass-through lines are stripped, as are
/// entries whose metadata block was never terminated by a URL line.
pub struct HeaderOperator {
    wrote_header: bool,
}

impl HeaderOperator {
    pub fn new() -> Self {
        Self { wrote_header: false }
    }
}

impl Default for HeaderOperator {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaylistProcessor for HeaderOperator {
    fn process(
        &mut self,
        input: M3uData,
        output: &mut dyn FnMut(M3uData) -> Result<(), FilterError>,
    ) -> Result<(), FilterError> {
        match input {
            M3uData::Line(line) => {
                if !self.wrote_header && is_header_line(&line) {
                    self.wrote_header = true;
                    output(M3uData::Line(line))
                } else {
                    Ok(())
                }
            }
            M3uData::Entry(entry) => {
                if entry.url().is_none() {
                    debug!(title = entry.title(), "dropping truncated entry without URL");
                    return Ok(());
                }
                if !self.wrote_header {
                    self.wrote_header = true;
                    output(M3uData::Line("#EXTM3U".to_string()))?;
                }
                output(M3uData::Entry(entry))
            }
        }
    }

    fn finish(
        &mut self,
        _output: &mut dyn FnMut(M3uData) -> Result<(), FilterError>,
    ) -> Result<(), FilterError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "Header"
    }
}
