//! Core data types shared across the pipeline

use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Key used for the traversal root in [`MatchTally`].
pub const ROOT_KEY: &str = ".";

/// A directory found during discovery.
///
/// `key` is for display and tally lookups only; listing always goes through
/// `path`, which is the exact path the walk produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredDir {
    pub key: String,
    pub path: PathBuf,
}

/// Number of matching entries found directly inside one directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryCount {
    /// Root-relative, `/`-separated path; the root itself is [`ROOT_KEY`]
    pub path: String,
    pub count: usize,
}

/// Per-directory match counts in discovery order.
///
/// Only directories with at least one match are stored, and each key
/// appears once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MatchTally {
    entries: Vec<DirectoryCount>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl MatchTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `count` matches for `path`.
    ///
    /// Zero counts are dropped. Recording an existing key replaces its count
    /// without moving it.
    pub fn record(&mut self, path: impl Into<String>, count: usize) {
        if count == 0 {
            return;
        }
        let path = path.into();
        match self.index.get(&path) {
            Some(&slot) => self.entries[slot].count = count,
            None => {
                self.index.insert(path.clone(), self.entries.len());
                self.entries.push(DirectoryCount { path, count });
            }
        }
    }

    pub fn get(&self, path: &str) -> Option<usize> {
        self.index.get(path).map(|&slot| self.entries[slot].count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DirectoryCount> {
        self.entries.iter()
    }

    /// Counts in insertion order.
    pub fn counts(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.count).collect()
    }
}

/// A directory whose listing failed with a recoverable error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedDirectory {
    pub path: String,
    pub reason: String,
}

/// Result of the tally pass.
#[derive(Debug, Clone, Default)]
pub struct TallyOutcome {
    pub tally: MatchTally,
    pub skipped: Vec<SkippedDirectory>,
}

/// Everything a completed run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub tally: MatchTally,
    pub skipped: Vec<SkippedDirectory>,
    pub chart_path: PathBuf,
}
