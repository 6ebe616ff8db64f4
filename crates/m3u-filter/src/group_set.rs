use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::FilterError;

/// Default comment prefix for keep/drop list files.
pub const DEFAULT_COMMENT_PREFIX: &str = "#";

/// A set of group names merged from inline and file sources, with provenance
/// discarded. When built with `ignore_case`, names are lowercased at
/// insertion and lookups are normalized identically, never asymmetrically.
#[derive(Debug, Clone, Default)]
pub struct GroupSet {
    names: HashSet<String>,
    ignore_case: bool,
}

impl GroupSet {
    pub fn new(ignore_case: bool) -> Self {
        Self {
            names: HashSet::new(),
            ignore_case,
        }
    }

    fn normalize(&self, name: &str) -> String {
        if self.ignore_case {
            name.to_lowercase()
        } else {
            name.to_string()
        }
    }

    /// Add trimmed, non-empty tokens from a comma-separated list.
    pub fn extend_from_inline(&mut self, csv: &str) {
        for token in csv.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let name = self.normalize(token);
            self.names.insert(name);
        }
    }

    /// Add one group per line from a list file. Blank lines and lines
    /// starting with `comment_prefix` are ignored.
    pub fn extend_from_file(&mut self, path: &Path, comment_prefix: &str) -> Result<(), FilterError> {
        let bytes = fs::read(path).map_err(|source| FilterError::ListFile {
            path: path.to_path_buf(),
            source,
        })?;
        for raw in String::from_utf8_lossy(&bytes).lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(comment_prefix) {
                continue;
            }
            let name = self.normalize(line);
            self.names.insert(name);
        }
        Ok(())
    }

    /// Membership test, with `name` normalized the same way stored members
    /// were.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&self.normalize(name))
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}
