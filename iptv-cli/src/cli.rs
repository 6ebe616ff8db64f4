use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Classify and filter IPTV M3U playlists.
#[derive(Parser, Debug)]
#[command(name = "iptv", version, about, long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// HTTP timeout in seconds when fetching a playlist URL
    #[arg(long, global = true, default_value_t = 60)]
    pub timeout: u64,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print an editable drop-list of the groups found in a playlist
    MakeDropList {
        /// Playlist source: a local file path or an http(s) URL
        src: String,

        /// Only consider entries of these kinds (comma-separated:
        /// live,movie,series,unknown)
        #[arg(long = "type", value_name = "KINDS")]
        kinds: Option<String>,
    },

    /// Print the distinct group names found in a playlist
    ListGroups {
        /// Playlist source: a local file path or an http(s) URL
        src: String,

        /// Only consider entries of these kinds (comma-separated:
        /// live,movie,series,unknown)
        #[arg(long = "type", value_name = "KINDS")]
        kinds: Option<String>,
    },

    /// Filter a playlist by kind and group and write the result
    Filter {
        /// Playlist source: a local file path or an http(s) URL
        src: String,

        /// Destination file for the filtered playlist
        out: PathBuf,

        /// Comma-separated groups to keep (everything else is dropped)
        #[arg(long, value_name = "GROUPS", conflicts_with = "drop")]
        keep: Option<String>,

        /// Comma-separated groups to drop
        #[arg(long, value_name = "GROUPS")]
        drop: Option<String>,

        /// File with one group to keep per line ('#' comments ignored)
        #[arg(long, value_name = "FILE")]
        keep_file: Option<PathBuf>,

        /// File with one group to drop per line ('#' comments ignored)
        #[arg(long, value_name = "FILE")]
        drop_file: Option<PathBuf>,

        /// Match group names case-insensitively
        #[arg(short = 'i', long)]
        ignore_case: bool,

        /// Only keep entries of these kinds (comma-separated:
        /// live,movie,series,unknown)
        #[arg(long = "type", value_name = "KINDS")]
        kinds: Option<String>,
    },
}
