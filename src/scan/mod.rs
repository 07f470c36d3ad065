//! Directory discovery and listing

pub mod dirs;
pub mod entries;

pub use dirs::{discover_directories, ScanOptions};
pub use entries::{EntrySource, FsEntrySource};
