use std::{
    fmt,
    path::{Path, PathBuf},
};

/// A fully resolved backend process invocation.
///
/// Built just before execution and discarded afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Executable name or path.
    pub program: String,
    /// Arguments, in order. Never interpreted by a shell.
    pub args: Vec<String>,
    /// Working directory, inherited when `None`.
    pub working_dir: Option<PathBuf>,
    /// Environment variables set for the process.
    pub env: Vec<(String, String)>,
    /// Start from an empty environment instead of inheriting the caller's.
    pub clear_env: bool,
    /// Configuration file handed to the backend, if any.
    pub config_file: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Default::default()
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Append `flag value`.
    pub fn flag(self, flag: &str, value: impl Into<String>) -> Self {
        self.arg(flag).arg(value)
    }

    /// Append `flag value` only when `value` is not empty.
    pub fn flag_if_set(self, flag: &str, value: &str) -> Self {
        if value.is_empty() {
            self
        } else {
            self.flag(flag, value)
        }
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Run with an empty environment except for `PATH` (when the caller has one).
    pub fn only_path_env(mut self, path: Option<String>) -> Self {
        self.clear_env = true;
        self.env.retain(|(key, _)| key != "PATH");
        if let Some(path) = path {
            self.env.push(("PATH".to_string(), path));
        }
        self
    }

    pub fn config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// The full argument vector including the program.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.argv().into_iter().map(quote).collect();
        write!(f, "{}", rendered.join(" "))
    }
}

/// Quote an argument for display so it can be pasted into a shell.
fn quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:@+,".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
