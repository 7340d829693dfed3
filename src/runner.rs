use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::action::ScriptAction;
use crate::error::{ClaudebarError, Result};
use crate::layout::Layout;
use crate::shell::Shell;

/// Runs the script bound to an action and reports the child's exit code.
///
/// Implementations block until the child finishes and must not capture its
/// output.
pub trait ActionRunner {
    fn run(&self, action: ScriptAction, layout: &Layout) -> Result<i32>;
}

/// Spawns action scripts under the host shell with inherited stdio.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    shell: Shell,
}

impl ProcessRunner {
    pub fn new(shell: Shell) -> Self {
        Self { shell }
    }
}

impl ActionRunner for ProcessRunner {
    fn run(&self, action: ScriptAction, layout: &Layout) -> Result<i32> {
        let status = Command::new(self.shell.program())
            .arg(layout.script_path(action))
            .current_dir(layout.root())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|err| launch_error(&self.shell, layout.root(), err))?;
        Ok(exit_code(status))
    }
}

fn launch_error(shell: &Shell, root: &Path, err: io::Error) -> ClaudebarError {
    // A missing working directory also surfaces as NotFound.
    if err.kind() == io::ErrorKind::NotFound && root.is_dir() {
        return ClaudebarError::ShellNotFound {
            shell: shell.display_name(),
            hint: shell.missing_hint(),
        };
    }
    ClaudebarError::Launch(err)
}

/// Signal deaths map to 128 + signal, like a POSIX shell reports them.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
