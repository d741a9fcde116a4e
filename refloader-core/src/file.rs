use std::{
    io::Write,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr, bail};
use tempfile::{NamedTempFile, TempPath};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the destination path of the file
    fn path(&self) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Render into a [`File`] ready to be staged
    fn to_file(&self) -> File {
        File::new(self.path(), self.render())
    }
}

/// A file to be generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A group of files that are written all together or not at all.
///
/// Every file is first staged into a temporary file next to its destination.
/// Only once all of them are staged are they renamed into place. Existing
/// destinations are moved aside first and put back if a later rename fails,
/// so a failure while writing leaves every destination untouched.
#[derive(Debug, Default)]
pub struct FileSet {
    files: Vec<File>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the set.
    pub fn push(&mut self, file: File) -> &mut Self {
        self.files.push(file);
        self
    }

    /// Add a generated file to the set.
    pub fn add(&mut self, file: &impl GeneratedFile) -> &mut Self {
        self.push(file.to_file())
    }

    /// Files in the set, in insertion order.
    pub fn files(&self) -> &[File] {
        &self.files
    }

    /// Stage every file, then persist them all. Returns the written paths.
    pub fn commit(self) -> Result<Vec<PathBuf>> {
        let mut staged = Vec::with_capacity(self.files.len());
        for file in &self.files {
            if file.path.is_dir() {
                bail!("cannot write '{}': it is a directory", file.path.display());
            }
            let tmp = stage(file)?;
            staged.push((tmp, file.path.clone()));
        }
        persist_all(staged)
    }
}

/// A destination that has been written, with the file it replaced.
struct Persisted {
    path: PathBuf,
    backup: Option<TempPath>,
}

fn persist_all(staged: Vec<(NamedTempFile, PathBuf)>) -> Result<Vec<PathBuf>> {
    let mut persisted: Vec<Persisted> = Vec::with_capacity(staged.len());
    for (tmp, path) in staged {
        let backup = match back_up(&path) {
            Ok(backup) => backup,
            Err(err) => {
                restore(persisted);
                return Err(err);
            }
        };
        if let Err(err) = tmp.persist(&path) {
            let failed = Persisted {
                path: path.clone(),
                backup,
            };
            persisted.push(failed);
            restore(persisted);
            return Err(err.error)
                .wrap_err_with(|| format!("failed to write '{}'", path.display()));
        }
        log::debug!("wrote {}", path.display());
        persisted.push(Persisted { path, backup });
    }

    // Dropping the backups deletes them.
    Ok(persisted.into_iter().map(|p| p.path).collect())
}

/// Move an existing destination aside, next to it.
fn back_up(path: &Path) -> Result<Option<TempPath>> {
    if !path.exists() {
        return Ok(None);
    }
    let backup = NamedTempFile::new_in(parent_dir(path))
        .wrap_err_with(|| format!("failed to back up '{}'", path.display()))?
        .into_temp_path();
    std::fs::rename(path, &backup)
        .wrap_err_with(|| format!("failed to back up '{}'", path.display()))?;
    log::trace!("moved {} aside to {}", path.display(), backup.display());
    Ok(Some(backup))
}

/// Undo `persisted`, newest first.
fn restore(persisted: Vec<Persisted>) {
    for Persisted { path, backup } in persisted.into_iter().rev() {
        let result = match backup {
            Some(backup) => backup.persist(&path).map_err(|e| e.error),
            None => match std::fs::remove_file(&path) {
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                other => other,
            },
        };
        match result {
            Ok(()) => log::debug!("restored {}", path.display()),
            Err(err) => log::error!("failed to restore '{}': {err}", path.display()),
        }
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn stage(file: &File) -> Result<NamedTempFile> {
    let dir = parent_dir(&file.path);
    std::fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create directory '{}'", dir.display()))?;

    let mut tmp = NamedTempFile::new_in(dir)
        .wrap_err_with(|| format!("failed to stage '{}'", file.path.display()))?;
    tmp.write_all(file.content.as_bytes())
        .wrap_err_with(|| format!("failed to stage '{}'", file.path.display()))?;
    log::trace!("staged {} at {}", file.path.display(), tmp.path().display());
    Ok(tmp)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Hello(PathBuf);

    impl GeneratedFile for Hello {
        fn path(&self) -> PathBuf {
            self.0.clone()
        }

        fn render(&self) -> String {
            "hello".to_string()
        }
    }

    #[test]
    fn test_commit_creates_files() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a.js");
        let b = temp.path().join("b.js");

        let mut set = FileSet::new();
        set.push(File::new(&a, "a")).push(File::new(&b, "b"));
        let written = set.commit().unwrap();

        assert_eq!(written, vec![a.clone(), b.clone()]);
        assert_eq!(fs::read_to_string(&a).unwrap(), "a");
        assert_eq!(fs::read_to_string(&b).unwrap(), "b");
    }

    #[test]
    fn test_commit_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("x").join("y").join("loader.js");

        let mut set = FileSet::new();
        set.push(File::new(&path, "nested"));
        set.commit().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_commit_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("loader.js");
        fs::write(&path, "original").unwrap();

        let mut set = FileSet::new();
        set.push(File::new(&path, "updated"));
        set.commit().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_commit_writes_nothing_when_staging_fails() {
        let temp = TempDir::new().unwrap();
        let good = temp.path().join("loader.js");
        // A regular file where a directory is needed makes staging fail.
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let bad = blocker.join("loader.bin.js");

        let mut set = FileSet::new();
        set.push(File::new(&good, "good")).push(File::new(&bad, "bad"));

        assert!(set.commit().is_err());
        assert!(!good.exists());
    }

    #[test]
    fn test_commit_refuses_directory_destination() {
        let temp = TempDir::new().unwrap();
        let flat = temp.path().join("loader.bin.js");
        let loader = temp.path().join("loader.js");
        fs::write(&flat, "old flat").unwrap();
        fs::create_dir(&loader).unwrap();

        let mut set = FileSet::new();
        set.push(File::new(&flat, "new flat"))
            .push(File::new(&loader, "new loader"));

        let err = set.commit().unwrap_err();
        assert!(err.to_string().contains("is a directory"));
        assert_eq!(fs::read_to_string(&flat).unwrap(), "old flat");
        assert!(loader.is_dir());
    }

    #[test]
    fn test_failed_rename_restores_earlier_files() {
        let temp = TempDir::new().unwrap();
        let existing = temp.path().join("loader.bin.js");
        let fresh = temp.path().join("extra.js");
        let loader = temp.path().join("loader.js");
        fs::write(&existing, "old flat").unwrap();

        let staged = [
            File::new(&existing, "new flat"),
            File::new(&fresh, "extra"),
            File::new(&loader, "new loader"),
        ]
        .iter()
        .map(|file| (stage(file).unwrap(), file.path.clone()))
        .collect();
        // Appears after staging, so only the rename onto it fails.
        fs::create_dir(&loader).unwrap();
        fs::write(loader.join("keep"), "").unwrap();

        assert!(persist_all(staged).is_err());
        assert_eq!(fs::read_to_string(&existing).unwrap(), "old flat");
        assert!(!fresh.exists());
        assert!(loader.join("keep").exists());

        let mut names: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        names.sort();
        assert_eq!(names, vec!["loader.bin.js", "loader.js"]);
    }

    #[test]
    fn test_add_generated_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("hello.txt");

        let mut set = FileSet::new();
        set.add(&Hello(path.clone()));
        assert_eq!(set.files()[0].content(), "hello");

        set.commit().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }
}
