//! JSON group writer
//!
//! Provides the output directory lifecycle and per-group file writing.

use crate::error::{Error, Result};
use crate::types::Group;
use std::collections::HashSet;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Summary of a finished write pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteStats {
    /// Number of groups written, collisions included
    pub groups_written: usize,
    /// Number of groups that replaced a file written earlier in the same run
    pub collisions: usize,
    /// Number of files found in the directory afterwards
    pub files_present: usize,
}

/// Writes groups into a freshly reset output directory
#[derive(Debug)]
pub struct GroupWriter {
    /// Output directory
    dir: PathBuf,
    /// Dates already written during this run
    seen: HashSet<String>,
    /// Number of groups written
    groups_written: usize,
    /// Number of same-date overwrites
    collisions: usize,
}

impl GroupWriter {
    /// Reset `dir` and return a writer for it
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        reset_output_dir(&dir)?;

        Ok(Self {
            dir,
            seen: HashSet::new(),
            groups_written: 0,
            collisions: 0,
        })
    }

    /// Output directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a group is written to
    pub fn path_for(&self, group: &Group) -> PathBuf {
        self.dir.join(group.file_name())
    }

    /// Write one group, overwriting any file with the same date
    ///
    /// Returns the path written.
    pub fn write(&mut self, group: &Group) -> Result<PathBuf> {
        let path = self.path_for(group);

        if !self.seen.insert(group.date.clone()) {
            self.collisions += 1;
            warn!(
                date = %group.date,
                path = %path.display(),
                "Date already written in this run, earlier file will be overwritten (input not sorted by date?)"
            );
        }

        write_group_file(&path, group)?;
        self.groups_written += 1;

        debug!(path = %path.display(), items = group.len(), "Wrote group");
        Ok(path)
    }

    /// Number of groups written so far
    pub fn groups_written(&self) -> usize {
        self.groups_written
    }

    /// Number of same-date overwrites so far
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    /// Finish the run and count the files actually present
    pub fn finish(self) -> Result<WriteStats> {
        let files_present = count_output_files(&self.dir)?;

        info!(
            dir = %self.dir.display(),
            groups = self.groups_written,
            files = files_present,
            collisions = self.collisions,
            "Finished writing groups"
        );

        Ok(WriteStats {
            groups_written: self.groups_written,
            collisions: self.collisions,
            files_present,
        })
    }
}

/// Serialize a group as pretty-printed JSON to `path`
pub fn write_group_file(path: impl AsRef<Path>, group: &Group) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::output_io("create", path, e))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, group)?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|e| Error::output_io("write", path, e))?;

    Ok(())
}

/// Delete `dir` recursively if it exists, then create it empty
///
/// A regular file or symlink at `dir` is removed and replaced by the
/// directory.
///
/// The old tree is first renamed to a hidden sibling and deleted from
/// there, so `dir` itself is never left half-deleted.
pub fn reset_output_dir(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();

    match stale_path(dir) {
        Some(stale) => {
            // Leftover from an interrupted run
            if fs::symlink_metadata(&stale).is_ok() {
                warn!(path = %stale.display(), "Removing leftover from an earlier reset");
                remove_tree(&stale)?;
            }

            match fs::rename(dir, &stale) {
                Ok(()) => remove_tree(&stale)?,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => {
                    warn!(
                        dir = %dir.display(),
                        error = %e,
                        "Could not detach output directory, deleting in place"
                    );
                    remove_tree(dir)?;
                }
            }
        }
        None => remove_tree(dir)?,
    }

    fs::create_dir_all(dir).map_err(|e| Error::output_io("create directory", dir, e))?;
    debug!(dir = %dir.display(), "Reset output directory");
    Ok(())
}

/// Count regular files directly inside `dir`
pub fn count_output_files(dir: impl AsRef<Path>) -> Result<usize> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| Error::output_io("list", dir, e))?;

    let mut count = 0;
    for entry in entries {
        let entry = entry.map_err(|e| Error::output_io("list", dir, e))?;
        if entry.file_type()?.is_file() {
            count += 1;
        }
    }
    Ok(count)
}

/// Hidden sibling used to detach the old tree: `out` -> `.out.stale`
fn stale_path(dir: &Path) -> Option<PathBuf> {
    let name = dir.file_name()?;
    let mut stale = OsString::from(".");
    stale.push(name);
    stale.push(".stale");
    Some(dir.with_file_name(stale))
}

/// Remove a directory tree, file or symlink; a missing path is success
fn remove_tree(path: &Path) -> Result<()> {
    let removed = match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(e) => Err(e),
    };

    match removed {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::output_io("remove", path, e)),
    }
}
