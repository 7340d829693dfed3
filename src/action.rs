/// Lifecycle actions backed by an external script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptAction {
    Install,
    Uninstall,
    Update,
}

impl ScriptAction {
    /// Command name as typed on the command line.
    pub fn name(self) -> &'static str {
        match self {
            ScriptAction::Install => "install",
            ScriptAction::Uninstall => "uninstall",
            ScriptAction::Update => "update",
        }
    }

    /// Script file bound to this action, relative to the installation root.
    pub fn script_name(self) -> &'static str {
        match self {
            ScriptAction::Install => "install.sh",
            ScriptAction::Uninstall => "uninstall.sh",
            ScriptAction::Update => "update.sh",
        }
    }

    fn from_command(token: &str) -> Option<Self> {
        [
            ScriptAction::Install,
            ScriptAction::Uninstall,
            ScriptAction::Update,
        ]
        .into_iter()
        .find(|action| action.name() == token)
    }
}

/// What a single invocation resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Script(ScriptAction),
    ShowHelp,
    ShowVersion,
    Unknown(String),
}

impl Action {
    /// Resolves an action from the invocation tokens. Only the first token is
    /// consulted; anything after it is ignored.
    pub fn resolve<S: AsRef<str>>(tokens: &[S]) -> Action {
        let Some(first) = tokens.first().map(AsRef::as_ref) else {
            return Action::Script(ScriptAction::Install);
        };

        match first {
            "--help" | "-h" => Action::ShowHelp,
            "--version" | "-v" => Action::ShowVersion,
            other => match ScriptAction::from_command(other) {
                Some(action) => Action::Script(action),
                None => Action::Unknown(other.to_string()),
            },
        }
    }
}
