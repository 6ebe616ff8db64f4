//! Group discovery for the drop-list workflow.
//!
//! Collects the distinct group names present in a playlist so they can be
//! printed, or rendered as an editable drop-list file where every
//! uncommented name is dropped on the next filtering run.

use std::collections::HashSet;

use m3u::{M3uData, StreamKind};

/// Collect the distinct, non-empty group names of URL-bearing entries, in a
/// deterministic case-insensitive order. When `kinds` is given, only entries
/// of those kinds contribute.
pub fn collect_groups<I>(items: I, kinds: Option<&HashSet<StreamKind>>) -> Vec<String>
where
    I: IntoIterator<Item = M3uData>,
{
    let mut seen = HashSet::new();
    let mut groups = Vec::new();
    for item in items {
        let M3uData::Entry(entry) = item else {
            continue;
        };
        if entry.url().is_none() {
            continue;
        }
        if let Some(kinds) = kinds
            && !kinds.contains(&entry.kind())
        {
            continue;
        }
        let Some(group) = entry.group() else {
            continue;
        };
        if group.is_empty() {
            continue;
        }
        if seen.insert(group.to_string()) {
            groups.push(group.to_string());
        }
    }
    groups.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then(a.cmp(b)));
    groups
}

/// Render the editable drop-list file: an instructional comment header
/// followed by one group name per line.
pub fn render_drop_template(groups: &[String]) -> String {
    let mut out = String::new();
    out.push_str(
        "######  This is a DROP list. Put a '#' in front of any group you want to KEEP. ######\n",
    );
    out.push_str(
        "######  Lines without '#' will be DROPPED. Blank lines are ignored.              ######\n",
    );
    out.push('\n');
    for group in groups {
        out.push_str(group);
        out.push('\n');
    }
    out
}
