//! Shared helpers for operator and pipeline tests.

use m3u::{M3uData, M3uEntry};

use crate::error::FilterError;
use crate::processor::PlaylistProcessor;

pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Build a one-line entry item from an introducer line and a URL.
pub(crate) fn entry(introducer: &str, url: &str) -> M3uData {
    M3uData::Entry(M3uEntry::new(
        vec![introducer.to_string()],
        Some(url.to_string()),
    ))
}

/// Run items through a single operator and collect its output, including
/// anything flushed by `finish`.
pub(crate) fn collect_via(
    operator: &mut dyn PlaylistProcessor,
    items: Vec<M3uData>,
) -> Vec<M3uData> {
    let mut out = Vec::new();
    let mut output_fn = |item: M3uData| -> Result<(), FilterError> {
        out.push(item);
        Ok(())
    };
    for item in items {
        operator.process(item, &mut output_fn).unwrap();
    }
    operator.finish(&mut output_fn).unwrap();
    out
}
