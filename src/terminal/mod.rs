//! Terminal emulator selection for spawning debugger windows.

#[cfg(test)]
mod tests;

/// Orientation of a new split pane, for terminals that support splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    /// Side-by-side panes.
    Horizontal,
    /// Stacked panes.
    Vertical,
}

impl Split {
    /// The tmux `splitw` flag for this orientation.
    pub fn flag(self) -> &'static str {
        match self {
            Self::Horizontal => "-h",
            Self::Vertical => "-v",
        }
    }
}

/// Availability checks for terminal candidates.
///
/// Production code uses [`SystemProbe`]; tests substitute a fake to
/// simulate which terminals are installed.
pub trait Probe {
    /// Look up an environment variable.
    fn env(&self, name: &str) -> Option<String>;
    /// Check whether `program` is found on the search path.
    fn installed(&self, program: &str) -> bool;
}

/// Probe backed by the real environment and `PATH`.
pub struct SystemProbe;

impl Probe for SystemProbe {
    fn env(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn installed(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}

/// A known terminal emulator: how to launch it and when it is usable.
struct Candidate {
    /// Program probed on the search path.
    name: &'static str,
    /// Launch command prefix; a command to run inside is appended by the caller.
    command: &'static [&'static str],
    /// Whether the launch command takes the split-orientation flag.
    split_flag: bool,
    /// Environment variable that must be set (non-empty) for this candidate.
    requires_env: Option<&'static str>,
}

impl Candidate {
    fn available(&self, probe: &dyn Probe) -> bool {
        if let Some(var) = self.requires_env {
            match probe.env(var) {
                Some(value) if !value.is_empty() => {}
                _ => return false,
            }
        }
        probe.installed(self.name)
    }
}

/// Candidates in priority order; the first available one wins.
///
/// Only tmux opens a split pane and takes the orientation flag. The
/// rest open a new top-level window and ignore orientation.
const CANDIDATES: &[Candidate] = &[
    Candidate {
        name: "tmux",
        command: &["tmux", "splitw"],
        split_flag: true,
        requires_env: Some("TMUX"),
    },
    Candidate {
        name: "kitty",
        command: &["kitty", "-e"],
        split_flag: false,
        requires_env: None,
    },
    Candidate {
        name: "wezterm",
        command: &["wezterm", "start", "--"],
        split_flag: false,
        requires_env: None,
    },
    Candidate {
        name: "alacritty",
        command: &["alacritty", "-e"],
        split_flag: false,
        requires_env: None,
    },
    Candidate {
        name: "konsole",
        command: &["konsole", "-e"],
        split_flag: false,
        requires_env: None,
    },
    Candidate {
        name: "gnome-terminal",
        command: &["gnome-terminal", "--"],
        split_flag: false,
        requires_env: None,
    },
    Candidate {
        name: "xfce4-terminal",
        command: &["xfce4-terminal", "-e"],
        split_flag: false,
        requires_env: None,
    },
    Candidate {
        name: "terminator",
        command: &["terminator", "-x"],
        split_flag: false,
        requires_env: None,
    },
    Candidate {
        name: "xterm",
        command: &["xterm", "-e"],
        split_flag: false,
        requires_env: None,
    },
];

/// Used when no known terminal is available.
const FALLBACK: &[&str] = &["bash", "-lc"];

/// Pick a terminal launch command by probing the candidate list in
/// priority order. Always returns a non-empty command vector; if no
/// candidate is available the result is a plain login shell.
pub fn choose(split: Split, probe: &dyn Probe) -> Vec<String> {
    for candidate in CANDIDATES {
        if candidate.available(probe) {
            let mut command: Vec<String> =
                candidate.command.iter().map(ToString::to_string).collect();
            if candidate.split_flag {
                command.push(split.flag().to_string());
            }
            return command;
        }
    }
    FALLBACK.iter().map(ToString::to_string).collect()
}

/// Split a configured command string into argument-vector form.
/// Double quotes group words; no escape processing beyond that.
pub fn split_command(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in s.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ' ' | '\t' if !in_quotes => {
                if !current.is_empty() {
                    parts.push(current.clone());
                    current.clear();
                }
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}
