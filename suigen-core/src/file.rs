use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};

/// An output file whose content is rendered on demand.
pub trait GeneratedFile {
    /// Location of the file under `base`.
    fn path(&self, base: &Path) -> PathBuf;

    /// Overwrite policy; generated bindings are always replaced.
    fn rules(&self) -> FileRules {
        FileRules::always()
    }

    fn render(&self) -> String;

    /// Render and write under `base`, honouring [`GeneratedFile::rules`].
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        store(&path, self.rules(), || self.render())
    }
}

/// Outcome of writing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// The file existed and its rules forbid replacing it.
    Skipped,
}

/// Overwrite policy for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Replace whatever is on disk.
    pub fn always() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }

    /// Leave an existing file untouched, e.g. a user-edited `suigen.toml`.
    pub fn create_once() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

impl Default for FileRules {
    fn default() -> Self {
        Self::always()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    Always,
    IfMissing,
}

/// A path paired with fixed content.
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn write(&self) -> Result<WriteResult> {
        store(&self.path, self.rules, || self.content.clone())
    }
}

fn store(path: &Path, rules: FileRules, render: impl FnOnce() -> String) -> Result<WriteResult> {
    if rules.overwrite == Overwrite::IfMissing && path.exists() {
        return Ok(WriteResult::Skipped);
    }
    write_atomic(path, &render())?;
    Ok(WriteResult::Written)
}

/// Write through a sibling temp file and rename it into place, so readers
/// see either the old content or the new, never a partial file.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }

    let mut staging = path.as_os_str().to_owned();
    staging.push(".tmp");
    let staging = PathBuf::from(staging);

    fs::write(&staging, content)
        .wrap_err_with(|| format!("failed to write {}", staging.display()))?;
    fs::rename(&staging, path)
        .wrap_err_with(|| format!("failed to move {} into place", path.display()))?;
    Ok(())
}
