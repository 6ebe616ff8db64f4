use m3u::M3uData;

use crate::error::FilterError;

/// A stage in the playlist filtering pipeline.
///
/// Each stage receives one item at a time and emits zero or more items
/// through the output callback, which hands them to the next stage in the
/// chain. `finish` is called once at end of input so stages can flush any
/// buffered state.
pub trait PlaylistProcessor {
    fn process(
        &mut self,
        input: M3uData,
        output: &mut dyn FnMut(M3uData) -> Result<(), FilterError>,
    ) -> Result<(), FilterError>;

    fn finish(
        &mut self,
        output: &mut dyn FnMut(M3uData) -> Result<(), FilterError>,
    ) -> Result<(), FilterError>;

    /// Name of this stage for logging.
    fn name(&self) -> &'static str;
}
