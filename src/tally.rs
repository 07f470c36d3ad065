//! Per-directory match counting

use crate::domain::{DiscoveredDir, SkippedDirectory, TallyOutcome};
use crate::error::TallyError;
use crate::pattern::NamePattern;
use crate::scan::EntrySource;
use std::io;

/// Count entry names matching `pattern` in each of `directories`.
///
/// `directories` come from [`crate::scan::discover_directories`]; each one is
/// listed through its walked path and recorded under its key. Only the direct
/// entries of each directory are counted. A directory that cannot be listed
/// because of a permission error or because it no longer exists is logged and
/// skipped; any other listing error aborts the pass.
pub fn build_tally<S: EntrySource + ?Sized>(
    directories: &[DiscoveredDir],
    pattern: &NamePattern,
    lister: &S,
) -> Result<TallyOutcome, TallyError> {
    let mut outcome = TallyOutcome::default();

    for dir in directories {
        let names = match lister.list_entries(&dir.path) {
            Ok(names) => names,
            Err(err) if is_recoverable(&err) => {
                tracing::info!("{}: {}", dir.path.display(), err);
                outcome
                    .skipped
                    .push(SkippedDirectory { path: dir.key.clone(), reason: err.to_string() });
                continue;
            }
            Err(source) => {
                return Err(TallyError::ListDirectory { path: dir.path.clone(), source })
            }
        };

        let count = names.iter().filter(|name| pattern.is_match(name)).count();
        outcome.tally.record(dir.key.as_str(), count);
    }

    Ok(outcome)
}

fn is_recoverable(err: &io::Error) -> bool {
    matches!(err.kind(), io::ErrorKind::PermissionDenied | io::ErrorKind::NotFound)
}
