use m3u::M3uData;
use tracing::debug;

use crate::error::FilterError;
use crate::group_set::GroupSet;
use crate::processor::PlaylistProcessor;

enum Mode {
    Keep(GroupSet),
    Drop(GroupSet),
}

/// Applies keep/drop set semantics to URL-bearing entries.
///
/// An entry without a group compares as the empty string, so keep/drop lists
/// see ungrouped entries too. Pass-through lines and URL-less entries are
/// forwarded unmodified.
pub struct GroupFilterOperator {
    mode: Mode,
    dropped: usize,
}

impl GroupFilterOperator {
    /// Build from the validated configuration sets. Returns `None` when both
    /// sets are empty (no group filtering configured); callers must already
    /// have rejected the case where both are non-empty.
    pub fn from_sets(keep: GroupSet, drop: GroupSet) -> Option<Self> {
        let mode = if !keep.is_empty() {
            Mode::Keep(keep)
        } else if !drop.is_empty() {
            Mode::Drop(drop)
        } else {
            return None;
        };
        Some(Self { mode, dropped: 0 })
    }

    fn includes(&self, group: &str) -> bool {
        match &self.mode {
            Mode::Keep(set) => set.contains(group),
            Mode::Drop(set) => !set.contains(group),
        }
    }
}

impl PlaylistProcessor for GroupFilterOperator {
    fn process(
        &mut self,
        input: M3uData,
        output: &mut dyn FnMut(M3uData) -> Result<(), FilterError>,
    ) -> Result<(), FilterError> {
        match &input {
            M3uData::Entry(entry) if entry.url().is_some() => {
                let group = entry.group().unwrap_or("");
                if self.includes(group) {
                    output(input)
                } else {
                    self.dropped += 1;
                    debug!(group, title = entry.title(), "dropping entry by group filter");
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
            debug!(dropped = self.dropped, "group filter finished");
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "GroupFilter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{collect_via, entry, init_tracing};

    fn set(ignore_case: bool, csv: &str) -> GroupSet {
        let mut set = GroupSet::new(ignore_case);
        set.extend_from_inline(csv);
        set
    }

    #[test]
    fn keep_mode_includes_only_members() {
        init_tracing();
        let mut operator =
            GroupFilterOperator::from_sets(set(false, "Sports"), GroupSet::new(false)).unwrap();

        let items = vec![
            entry(r#"#EXTINF:-1 group-title="Sports",One"#, "http://h/1.ts"),
            entry(r#"#EXTINF:-1 group-title="News",Two"#, "http://h/2.ts"),
        ];
        let out = collect_via(&mut operator, items);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn drop_mode_excludes_members() {
        init_tracing();
        let mut operator =
            GroupFilterOperator::from_sets(GroupSet::new(false), set(false, "News")).unwrap();

        let items = vec![
            entry(r#"#EXTINF:-1 group-title="Sports",One"#, "http://h/1.ts"),
            entry(r#"#EXTINF:-1 group-title="News",Two"#, "http://h/2.ts"),
        ];
        let out = collect_via(&mut operator, items);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn case_insensitive_drop_matches_differently_cased_group() {
        init_tracing();
        let mut operator =
            GroupFilterOperator::from_sets(GroupSet::new(true), set(true, "news")).unwrap();

        let items = vec![entry(
            r#"#EXTINF:-1 group-title="NEWS",Two"#,
            "http://h/2.ts",
        )];
        let out = collect_via(&mut operator, items);
        assert!(out.is_empty());
    }

    #[test]
    fn ungrouped_entry_compares_as_empty_string() {
        init_tracing();
        // keep-mode with a non-empty set: ungrouped entries are excluded
        let mut operator =
            GroupFilterOperator::from_sets(set(false, "Sports"), GroupSet::new(false)).unwrap();
        let out = collect_via(&mut operator, vec![entry("#EXTINF:-1,One", "http://h/1.ts")]);
        assert!(out.is_empty());

        // drop-mode: ungrouped entries survive unless "" is a member
        let mut operator =
            GroupFilterOperator::from_sets(GroupSet::new(false), set(false, "News")).unwrap();
        let out = collect_via(&mut operator, vec![entry("#EXTINF:-1,One", "http://h/1.ts")]);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn no_sets_means_no_operator() {
        assert!(GroupFilterOperator::from_sets(GroupSet::new(false), GroupSet::new(false)).is_none());
    }
}
