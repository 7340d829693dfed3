use std::io::Write;

use crate::action::Action;
use crate::error::{ClaudebarError, Result};
use crate::layout::Layout;
use crate::runner::ActionRunner;
use crate::version::VersionSource;

pub const PROGRAM_NAME: &str = "claudebar";

pub const HELP: &str = "
claudebar - A bash statusline for Claude Code

Usage:
  claudebar [command]

Commands:
  install      Install claudebar statusline (default)
  uninstall    Remove claudebar statusline
  update       Update to the latest version

Options:
  --version, -v    Show version number
  --help, -h       Show this help message

Examples:
  claudebar            # Install (default)
  claudebar update     # Update to latest
  claudebar uninstall  # Remove

Documentation: https://github.com/kevinmaes/claudebar
";

/// Turns an invocation into exactly one terminal behavior and its exit code.
///
/// The installation layout is looked up only by the paths that need it, so
/// help and unknown-command handling work even when it cannot be resolved.
pub struct Dispatcher<'a, L, R, V> {
    locate: L,
    runner: &'a R,
    version: &'a V,
}

impl<'a, L, R, V> Dispatcher<'a, L, R, V>
where
    L: Fn() -> Result<Layout>,
    R: ActionRunner,
    V: VersionSource,
{
    pub fn new(locate: L, runner: &'a R, version: &'a V) -> Self {
        Self {
            locate,
            runner,
            version,
        }
    }

    /// Help and version text go to `out`; script actions write straight to
    /// the inherited streams.
    pub fn dispatch<S: AsRef<str>>(&self, tokens: &[S], out: &mut impl Write) -> Result<i32> {
        match Action::resolve(tokens) {
            Action::ShowHelp => {
                write_output(out, &format!("{HELP}\n"))?;
                Ok(0)
            }
            Action::ShowVersion => {
                let version = self.version.version(&(self.locate)()?)?;
                write_output(out, &format!("{PROGRAM_NAME} v{version}\n"))?;
                Ok(0)
            }
            Action::Script(action) => self.runner.run(action, &(self.locate)()?),
            Action::Unknown(token) => Err(ClaudebarError::UnknownCommand(token)),
        }
    }
}

/// A reader that went away (`claudebar -v | head -0`) is not a failure.
fn write_output(out: &mut impl Write, text: &str) -> Result<()> {
    match out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
        Err(err) if err.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        other => Ok(other?),
    }
}
