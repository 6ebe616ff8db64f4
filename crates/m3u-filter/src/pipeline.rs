//! # Playlist Filtering Pipeline
//!
//! Chains the filtering operators into a single synchronous pass:
//!
//! ```text
//! Input → KindFilter → GroupFilter → Header → Output
//! ```
//!
//! The kind and group stages are only installed when configured; the header
//! stage always runs last so the surviving stream carries exactly one
//! `#EXTM3U` line. With nothing configured the pipeline is an identity
//! transform over URL-bearing entries.

use std::collections::HashSet;

use m3u::{M3uData, StreamKind};
use tracing::debug;

use crate::error::FilterError;
use crate::group_set::GroupSet;
use crate::operators::{GroupFilterOperator, HeaderOperator, KindFilterOperator};
use crate::processor::PlaylistProcessor;

/// Configuration for one filtering run.
#[derive(Debug, Default)]
pub struct FilterPipelineConfig {
    /// Restrict output to entries of these kinds. `None` disables the stage.
    pub kinds: Option<HashSet<StreamKind>>,
    /// Allow-list of group names; mutually exclusive with `drop`.
    pub keep: GroupSet,
    /// Deny-list of group names; mutually exclusive with `keep`.
    pub drop: GroupSet,
}

impl FilterPipelineConfig {
    /// Keep and drop lists are mutually exclusive: both non-empty is a
    /// configuration error, not a runtime skip.
    pub fn validate(&self) -> Result<(), FilterError> {
        if !self.keep.is_empty() && !self.drop.is_empty() {
            return Err(FilterError::Config(
                "use either a keep list or a drop list, not both".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parse a comma-separated kind filter (the `--type` value) into a kind set.
/// Tokens are trimmed; empty tokens are dropped; any unrecognized token is a
/// configuration error.
pub fn parse_kind_filter(raw: &str) -> Result<HashSet<StreamKind>, FilterError> {
    let mut kinds = HashSet::new();
    let mut bad = Vec::new();
    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match token.parse::<StreamKind>() {
            Ok(kind) => {
                kinds.insert(kind);
            }
            Err(_) => bad.push(token.to_string()),
        }
    }
    if !bad.is_empty() {
        return Err(FilterError::InvalidKind(bad.join(", ")));
    }
    Ok(kinds)
}

/// Sequential filtering pipeline over tokenized playlist items.
pub struct FilterPipeline {
    processors: Vec<Box<dyn PlaylistProcessor>>,
}

impl FilterPipeline {
    /// Build the operator chain for `config`, failing fast on invalid
    /// configuration.
    pub fn new(config: FilterPipelineConfig) -> Result<Self, FilterError> {
        config.validate()?;

        let mut processors: Vec<Box<dyn PlaylistProcessor>> = Vec::new();
        if let Some(kinds) = config.kinds {
            processors.push(Box::new(KindFilterOperator::new(kinds)));
        }
        if let Some(group_filter) = GroupFilterOperator::from_sets(config.keep, config.drop) {
            processors.push(Box::new(group_filter));
        }
        processors.push(Box::new(HeaderOperator::new()));

        debug!(
            stages = ?processors.iter().map(|p| p.name()).collect::<Vec<_>>(),
            "filter pipeline built"
        );
        Ok(Self { processors })
    }

    /// Run `input` through every stage in order, passing final items to
    /// `output`. Items flushed by a stage's `finish` still traverse the
    /// remaining stages.
    pub fn process<I>(
        mut self,
        input: I,
        output: &mut dyn FnMut(M3uData),
    ) -> Result<(), FilterError>
    where
        I: IntoIterator<Item = M3uData>,
    {
        for item in input {
            let mut current = vec![item];
            for processor in &mut self.processors {
                let mut next = Vec::new();
                for item in current {
                    processor.process(item, &mut |out| {
                        next.push(out);
                        Ok(())
                    })?;
                }
                current = next;
                if current.is_empty() {
                    break;
                }
            }
            for item in current {
                output(item);
            }
        }

        for index in 0..self.processors.len() {
            let (head, tail) = self.processors.split_at_mut(index + 1);
            let mut flushed = Vec::new();
            head[index].finish(&mut |item| {
                flushed.push(item);
                Ok(())
            })?;

            let mut current = flushed;
            for processor in tail.iter_mut() {
                let mut next = Vec::new();
                for item in current {
                    processor.process(item, &mut |out| {
                        next.push(out);
                        Ok(())
                    })?;
                }
                current = next;
                if current.is_empty() {
                    break;
                }
            }
            for item in current {
                output(item);
            }
        }

        Ok(())
    }
}
