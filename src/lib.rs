pub mod action;
pub mod dispatch;
mod error;
pub mod layout;
pub mod runner;
pub mod shell;
pub mod ui;
pub mod version;

pub use error::{ClaudebarError, Result};

use dispatch::Dispatcher;
use layout::Layout;
use runner::ProcessRunner;
use shell::Shell;
use version::PackageManifest;

/// Entry point for the CLI. Returns the exit code the process should use.
pub fn run() -> Result<i32> {
    let tokens: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let runner = ProcessRunner::new(Shell::host());
    let mut stdout = std::io::stdout().lock();
    Dispatcher::new(Layout::current, &runner, &PackageManifest)
        .dispatch(tokens.as_slice(), &mut stdout)
}
