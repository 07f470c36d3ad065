//! Shared helpers

pub mod paths;

pub use paths::relative_key;
