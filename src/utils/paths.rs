//! Tally keys for discovered paths

use crate::domain::ROOT_KEY;
use std::path::Path;

/// Display key for `path` under `root`: relative components joined with `/`,
/// with the root itself as [`ROOT_KEY`]. Paths outside `root` keep their full
/// form.
///
/// The key is lossy for names that are not valid UTF-8 and is never turned
/// back into a path.
pub fn relative_key(root: &Path, path: &Path) -> String {
    let Ok(rel) = path.strip_prefix(root) else {
        return path.to_string_lossy().into_owned();
    };
    let parts: Vec<String> =
        rel.components().map(|c| c.as_os_str().to_string_lossy().into_owned()).collect();
    if parts.is_empty() {
        ROOT_KEY.to_string()
    } else {
        parts.join("/")
    }
}
