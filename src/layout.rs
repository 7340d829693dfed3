use std::path::{Path, PathBuf};

use crate::action::ScriptAction;
use crate::error::{ClaudebarError, Result};

const MANIFEST_FILE: &str = "package.json";

/// Resolved installation root and the files claudebar looks up under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Layout for the running executable.
    pub fn current() -> Result<Self> {
        let exe = std::env::current_exe()?;
        let exe = std::fs::canonicalize(&exe).unwrap_or(exe);
        Self::from_exe(&exe)
    }

    /// The root is one level above the directory holding the executable. A
    /// directory with no parent (`/`) is its own root.
    pub fn from_exe(exe: &Path) -> Result<Self> {
        let dir = exe.parent().ok_or_else(|| {
            ClaudebarError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("cannot locate installation root for {}", exe.display()),
            ))
        })?;
        Ok(Self::new(dir.parent().unwrap_or(dir)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn script_path(&self, action: ScriptAction) -> PathBuf {
        self.root.join(action.script_name())
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }
}
