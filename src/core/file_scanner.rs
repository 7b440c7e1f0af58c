use std::{
    fs, io,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::core::filter::FileFilter;
use crate::error::{Error, Result};

/// Recursively collects the files under `root` accepted by `filter`.
///
/// The walk is depth-first and pre-order, siblings in file-name order. Only non-directory
/// entries are tested, against their path relative to `root`; `root` itself is never
/// tested. Returned paths are `root` joined with the relative path.
///
/// The first directory that cannot be listed aborts the whole scan, as does a symlink loop.
/// A symlink whose target is missing counts as a file: it is skipped when the filter
/// rejects it and returned otherwise, so reading it fails later.
pub fn scan_files<F: FileFilter>(root: &Path, filter: &F) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(Error::invalid_argument(format!(
            "source root '{}' is not a directory",
            root.display()
        )));
    }

    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let path = match entry {
            Ok(entry) if entry.file_type().is_dir() => continue,
            Ok(entry) => entry.into_path(),
            Err(source) => match dangling_link(&source) {
                Some(path) => path,
                None => {
                    return Err(Error::Scan {
                        path: source
                            .path()
                            .map(Path::to_path_buf)
                            .unwrap_or_else(|| root.to_path_buf()),
                        source,
                    });
                }
            },
        };

        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };

        if filter.matches(&relative.to_string_lossy()) {
            files.push(path);
        }
    }

    Ok(files)
}

/// The path of a symlink that could not be followed because its target does not exist.
fn dangling_link(err: &walkdir::Error) -> Option<PathBuf> {
    if err.loop_ancestor().is_some() {
        return None;
    }
    let path = err.path()?;
    let not_found = err
        .io_error()
        .is_some_and(|e| e.kind() == io::ErrorKind::NotFound);
    let is_link = fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink());
    (not_found && is_link).then(|| path.to_path_buf())
}
