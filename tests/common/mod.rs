use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch installation root with the built binary under `bin/`.
pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = tempfile::Builder::new()
            .prefix("claudebar-")
            .tempdir_in(env!("CARGO_TARGET_TMPDIR"))
            .expect("create temp dir");
        let root = fs::canonicalize(tmp.path()).expect("canonical root");
        let bin_dir = root.join("bin");
        fs::create_dir_all(&bin_dir).expect("create bin dir");

        let bin = bin_dir.join(format!("claudebar{}", std::env::consts::EXE_SUFFIX));
        let built = Path::new(env!("CARGO_BIN_EXE_claudebar"));
        // Linking avoids "text file busy" races from writing an executable.
        if fs::hard_link(built, &bin).is_err() {
            fs::copy(built, &bin).expect("copy binary");
        }

        Self {
            _tmp: tmp,
            root,
            bin,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.env_remove("CLICOLOR_FORCE");
        cmd
    }

    pub fn write_manifest(&self, version: &str) {
        let content = format!("{{\n  \"name\": \"claudebar\",\n  \"version\": \"{version}\"\n}}\n");
        fs::write(self.root.join("package.json"), content).expect("write manifest");
    }

    /// Writes a script that logs its name and working directory, then exits
    /// with `code`.
    pub fn write_script(&self, name: &str, code: i32) {
        let body = format!(
            "#!/bin/bash\necho \"{name} $(pwd -P)\" >> \"$(pwd -P)/calls.log\"\nexit {code}\n"
        );
        fs::write(self.root.join(name), body).expect("write script");
    }

    pub fn write_all_scripts(&self, code: i32) {
        for name in ["install.sh", "uninstall.sh", "update.sh"] {
            self.write_script(name, code);
        }
    }

    /// Lines appended by scripts that ran, in order.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.root.join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}
