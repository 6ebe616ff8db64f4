//! Subcommand implementations.

use std::collections::HashSet;
use std::path::PathBuf;

use m3u::StreamKind;
use m3u_filter::{
    DEFAULT_COMMENT_PREFIX, FilterPipeline, FilterPipelineConfig, GroupSet, PlaylistWriter,
    collect_groups, parse_kind_filter, render_drop_template,
};
use tracing::info;

use crate::error::AppError;
use crate::source;

/// Group and kind selection for the `filter` subcommand.
pub struct FilterOptions {
    pub keep: Option<String>,
    pub drop: Option<String>,
    pub keep_file: Option<PathBuf>,
    pub drop_file: Option<PathBuf>,
    pub ignore_case: bool,
    pub kinds: Option<String>,
}

/// Parse an optional `--type` value; an empty set means no kind filtering.
fn kind_filter(kinds: Option<&str>) -> Result<Option<HashSet<StreamKind>>, AppError> {
    let Some(raw) = kinds else {
        return Ok(None);
    };
    let kinds = parse_kind_filter(raw)?;
    Ok((!kinds.is_empty()).then_some(kinds))
}

pub async fn make_drop_list(
    src: &str,
    kinds: Option<&str>,
    timeout_secs: u64,
) -> Result<(), AppError> {
    let kinds = kind_filter(kinds)?;
    let lines = source::read_lines(src, timeout_secs).await?;
    let groups = collect_groups(m3u::parse(lines), kinds.as_ref());
    info!(groups = groups.len(), "drop list rendered");
    print!("{}", render_drop_template(&groups));
    Ok(())
}

pub async fn list_groups(
    src: &str,
    kinds: Option<&str>,
    timeout_secs: u64,
) -> Result<(), AppError> {
    let kinds = kind_filter(kinds)?;
    let lines = source::read_lines(src, timeout_secs).await?;
    let groups = collect_groups(m3u::parse(lines), kinds.as_ref());
    for group in &groups {
        println!("{group}");
    }
    Ok(())
}

pub async fn filter(
    src: &str,
    out: &PathBuf,
    options: FilterOptions,
    timeout_secs: u64,
) -> Result<(), AppError> {
    let mut keep = GroupSet::new(options.ignore_case);
    if let Some(csv) = &options.keep {
        keep.extend_from_inline(csv);
    }
    if let Some(path) = &options.keep_file {
        keep.extend_from_file(path, DEFAULT_COMMENT_PREFIX)?;
    }

    let mut drop = GroupSet::new(options.ignore_case);
    if let Some(csv) = &options.drop {
        drop.extend_from_inline(csv);
    }
    if let Some(path) = &options.drop_file {
        drop.extend_from_file(path, DEFAULT_COMMENT_PREFIX)?;
    }

    let config = FilterPipelineConfig {
        kinds: kind_filter(options.kinds.as_deref())?,
        keep,
        drop,
    };
    // validate the configuration before touching the network
    let pipeline = FilterPipeline::new(config)?;

    let lines = source::read_lines(src, timeout_secs).await?;
    let mut writer = PlaylistWriter::new();
    pipeline.process(m3u::parse(lines), &mut |item| writer.push(item))?;

    writer.write_atomic(out)?;
    println!(
        "Wrote {} with {} channels",
        out.display(),
        writer.entries_written()
    );
    Ok(())
}
