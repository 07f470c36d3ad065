//! Directory discovery.

use crate::domain::{DiscoveredDir, ROOT_KEY};
use crate::utils::relative_key;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Options controlling which directories are discovered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Descend into directories whose name starts with `.`
    pub include_hidden: bool,
    /// Descend through symbolic links to directories. Without it a symlinked
    /// directory is still listed, but its subdirectories are not walked.
    pub follow_symlinks: bool,
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }
}

/// Discover every directory under `root`, root included.
///
/// Keys are root-relative (see [`relative_key`]); each entry also carries the
/// path the walk produced. Order is a pre-order walk with siblings sorted by
/// name, so the root always comes first.
pub fn discover_directories(root: &Path, options: &ScanOptions) -> Vec<DiscoveredDir> {
    let include_hidden = options.include_hidden;
    let walker = WalkDir::new(root)
        .follow_links(options.follow_symlinks)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| entry.depth() == 0 || include_hidden || !is_hidden(entry));

    let mut directories =
        vec![DiscoveredDir { key: ROOT_KEY.to_string(), path: root.to_path_buf() }];
    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                // Unreadable subtrees are reported again by the tally pass.
                tracing::debug!("Skipping unreadable path during discovery: {}", err);
                continue;
            }
        };

        if entry.depth() == 0 || !is_directory(&entry) {
            continue;
        }
        directories.push(DiscoveredDir {
            key: relative_key(root, entry.path()),
            path: entry.path().to_path_buf(),
        });
    }

    directories
}

/// Directories, plus unfollowed symlinks that point at one.
fn is_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().as_encoded_bytes().starts_with(b".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn keys(dirs: &[DiscoveredDir]) -> Vec<&str> {
        dirs.iter().map(|d| d.key.as_str()).collect()
    }

    #[test]
    fn root_without_subdirectories_yields_root_only() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("file.txt"), "x").expect("write");

        let dirs = discover_directories(tmp.path(), &ScanOptions::new());
        assert_eq!(keys(&dirs), vec!["."]);
        assert_eq!(dirs[0].path, tmp.path());
    }

    #[test]
    fn nested_directories_in_sorted_preorder() {
        let tmp = TempDir::new().expect("tmp");
        let root = tmp.path();
        fs::create_dir_all(root.join("b/inner")).expect("mkdir b/inner");
        fs::create_dir_all(root.join("a/deep/deeper")).expect("mkdir a/deep/deeper");
        fs::write(root.join("a/file.log"), "x").expect("write");

        let dirs = discover_directories(root, &ScanOptions::new());
        assert_eq!(keys(&dirs), vec![".", "a", "a/deep", "a/deep/deeper", "b", "b/inner"]);
        assert_eq!(dirs[2].path, root.join("a").join("deep"));
    }

    #[test]
    fn hidden_directories_pruned_by_default() {
        let tmp = TempDir::new().expect("tmp");
        let root = tmp.path();
        fs::create_dir_all(root.join(".cache/nested")).expect("mkdir .cache");
        fs::create_dir_all(root.join("visible")).expect("mkdir visible");

        let dirs = discover_directories(root, &ScanOptions::new());
        assert_eq!(keys(&dirs), vec![".", "visible"]);

        let dirs = discover_directories(root, &ScanOptions::new().include_hidden(true));
        assert_eq!(keys(&dirs), vec![".", ".cache", ".cache/nested", "visible"]);
    }

    #[test]
    fn hidden_root_is_still_scanned() {
        let tmp = TempDir::new().expect("tmp");
        let root = tmp.path().join(".hidden-root");
        fs::create_dir_all(root.join("sub")).expect("mkdir");

        let dirs = discover_directories(&root, &ScanOptions::new());
        assert_eq!(keys(&dirs), vec![".", "sub"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directories_listed_but_only_descended_when_following() {
        let tmp = TempDir::new().expect("tmp");
        let root = tmp.path().join("root");
        let outside = tmp.path().join("outside");
        fs::create_dir_all(&root).expect("mkdir root");
        fs::create_dir_all(outside.join("nested")).expect("mkdir outside/nested");
        std::os::unix::fs::symlink(&outside, root.join("link")).expect("symlink");
        std::os::unix::fs::symlink(outside.join("missing"), root.join("dangling"))
            .expect("dangling symlink");

        let dirs = discover_directories(&root, &ScanOptions::new());
        assert_eq!(keys(&dirs), vec![".", "link"]);
        assert_eq!(dirs[1].path, root.join("link"));

        let dirs = discover_directories(&root, &ScanOptions::new().follow_symlinks(true));
        assert_eq!(keys(&dirs), vec![".", "link", "link/nested"]);
    }

    #[cfg(unix)]
    #[test]
    fn hidden_symlinked_directories_are_pruned() {
        let tmp = TempDir::new().expect("tmp");
        let root = tmp.path().join("root");
        let outside = tmp.path().join("outside");
        fs::create_dir_all(&root).expect("mkdir root");
        fs::create_dir_all(&outside).expect("mkdir outside");
        std::os::unix::fs::symlink(&outside, root.join(".link")).expect("symlink");

        let dirs = discover_directories(&root, &ScanOptions::new());
        assert_eq!(keys(&dirs), vec!["."]);
    }

    #[cfg(unix)]
    #[test]
    fn paths_are_kept_exactly_as_walked() {
        let tmp = TempDir::new().expect("tmp");
        fs::create_dir_all(tmp.path().join(r"a\b")).expect("mkdir");

        let dirs = discover_directories(tmp.path(), &ScanOptions::new());
        assert_eq!(keys(&dirs), vec![".", r"a\b"]);
        assert_eq!(dirs[1].path, tmp.path().join(r"a\b"));
        assert!(dirs[1].path.is_dir());
    }
}
