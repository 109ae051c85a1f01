mod ops;


use serde::{Deserialize, Serialize};

/// User configuration, stored as TOML under the config directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Terminal emulator settings.
    pub terminal: TerminalConfig,
    /// Debugger settings.
    pub gdb: GdbConfig,
}

/// Terminal emulator settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TerminalConfig {
    /// Command to open a terminal window, e.g. "kitty -e" or
    /// "tmux splitw -h". When set, automatic detection is skipped.
    pub command: Option<String>,
}

/// Debugger settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GdbConfig {
    /// Debugger executable to attach with, e.g. "gdb" or "rust-gdb".
    pub program: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            terminal: TerminalConfig::default(),
            gdb: GdbConfig::default(),
        }
    }
}

impl Default for GdbConfig {
    fn default() -> Self {
        Self {
            program: "gdb".to_string(),
        }
    }
}
