//! # M3U Filter
//!
//! Filtering pipeline for M3U playlists: a synchronous chain of operators
//! that applies URL-kind and group keep/drop semantics to tokenized playlist
//! items, plus group listing and atomic playlist serialization.

pub mod error;
pub mod group_set;
pub mod groups;
pub mod operators;
pub mod pipeline;
pub mod processor;
pub mod writer;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export key components for easier access
pub use error::FilterError;
pub use group_set::{DEFAULT_COMMENT_PREFIX, GroupSet};
pub use groups::{collect_groups, render_drop_template};
pub use pipeline::{FilterPipeline, FilterPipelineConfig, parse_kind_filter};
pub use processor::PlaylistProcessor;
pub use writer::PlaylistWriter;
