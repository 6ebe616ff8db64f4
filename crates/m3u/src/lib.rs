// M3U/M3U8 playlist handling: entry tokenization, attribute extraction
// and URL-based content kind classification.
pub mod data;
pub mod entry;
pub mod kind;
pub mod parser;

// Export common types for ease of use
pub use data::{M3uData, is_header_line};
pub use entry::M3uEntry;
pub use kind::{ParseKindError, StreamKind, classify};
pub use parser::{EntryIter, parse, split_lines};
