use std::path::PathBuf;

/// Host platform families that affect how scripts are launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Posix,
    Windows,
}

impl Platform {
    pub fn host() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }
}

/// Interpreter used to run the action scripts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    program: PathBuf,
    missing_hint: Option<&'static str>,
}

impl Shell {
    pub fn new(program: impl Into<PathBuf>, missing_hint: Option<&'static str>) -> Self {
        Self {
            program: program.into(),
            missing_hint,
        }
    }

    /// Bash at its well-known location on POSIX; on Windows it must be on
    /// PATH (WSL or Git Bash).
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Posix => Self::new("/bin/bash", None),
            Platform::Windows => Self::new("bash", Some("On Windows, please use WSL or Git Bash.")),
        }
    }

    pub fn host() -> Self {
        Self::for_platform(Platform::host())
    }

    pub fn program(&self) -> &std::path::Path {
        &self.program
    }

    /// Name shown when the interpreter cannot be found.
    pub fn display_name(&self) -> String {
        self.program
            .file_stem()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.program.to_string_lossy().into_owned())
    }

    pub fn missing_hint(&self) -> Option<&'static str> {
        self.missing_hint
    }
}
