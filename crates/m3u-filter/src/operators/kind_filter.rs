use std::collections::HashSet;

use m3u::{M3uData, StreamKind};
use tracing::debug;

use crate::error::FilterError;
use crate::processor::PlaylistProcessor;

/// Drops URL-bearing entries whose derived kind is not in the configured
/// set. Pass-through lines and entries without a URL are forwarded
/// unmodified.
pub struct KindFilterOperator {
    kinds: HashSet<StreamKind>,
    dropped: usize,
}

impl KindFilterOperator {
    pub fn new(kinds: HashSet<StreamKind>) -> Self {
        Self { kinds, dropped: 0 }
    }
}

impl PlaylistProcessor for KindFilterOperator {
    fn process(
        &mut self,
        input: M3uData,
        output: &mut dyn FnMut(M3uData) -> Result<(), FilterError>,
    ) -> Result<(), FilterError> {
        match &input {
            M3uData::Entry(entry) if entry.url().is_some() => {
                if self.kinds.contains(&entry.kind()) {
                    output(input)
                } else {
                    self.dropped += 1;
                    debug!(
                        kind = %entry.kind(),
                        title = entry.title(),
                        "dropping entry outside kind filter"
                    );
                    Ok(())
                }
            }
            _ => output(input),
        }
    }

    fn finish(
        &mut self,
        _output: &mut dyn FnMut(M3uData) -> Result<(), FilterError>,
    ) -> Result<(), FilterError> {
        if self.dropped > 0 {
            debug!(dropped = self.dropped, "kind filter finished");
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "KindFilter"
    }
}
