//! Directory listing port

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

/// Lists the immediate entry names of a directory.
///
/// The tally pass only talks to the filesystem through this trait, so its
/// error isolation can be exercised with fakes. Names are returned as the
/// OS reports them, without any lossy conversion.
pub trait EntrySource {
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<OsString>>;
}

/// [`EntrySource`] backed by `std::fs::read_dir`.
///
/// Files and subdirectories are both returned; `.` and `..` never are.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsEntrySource;

impl EntrySource for FsEntrySource {
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            names.push(entry?.file_name());
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lists_files_and_directories() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("a.log"), "x").expect("write");
        fs::create_dir(tmp.path().join("logs")).expect("mkdir");

        let mut names = FsEntrySource.list_entries(tmp.path()).expect("list");
        names.sort();
        assert_eq!(names, vec![OsString::from("a.log"), OsString::from("logs")]);
    }

    #[test]
    fn missing_directory_is_not_found() {
        let tmp = TempDir::new().expect("tmp");
        let err = FsEntrySource.list_entries(&tmp.path().join("gone")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_names_are_returned_unchanged() {
        use std::os::unix::ffi::OsStrExt;

        let tmp = TempDir::new().expect("tmp");
        let name = std::ffi::OsStr::from_bytes(b"bad\xff.log");
        fs::write(tmp.path().join(name), "x").expect("write");

        let names = FsEntrySource.list_entries(tmp.path()).expect("list");
        assert_eq!(names, vec![name.to_os_string()]);
    }
}
