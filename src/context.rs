use anyhow::Result;
use std::path::Path;

use crate::binary::Binary;
use crate::terminal::{self, Probe, Split, SystemProbe};

/// Mutable launch state, threaded explicitly through calls.
///
/// Holds the memoized terminal command and the most recently loaded
/// binary. Construction does no probing; the terminal command is
/// computed on first use.
#[derive(Default)]
pub struct Context {
    terminal: Option<Vec<String>>,
    binary: Option<Binary>,
}

impl Context {
    /// An empty context: no terminal cached, no binary loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the terminal launch command, bypassing detection.
    /// A later call with `force` re-probes and overwrites the pin.
    pub fn set_terminal(&mut self, command: Vec<String>) {
        self.terminal = Some(command);
    }

    /// The terminal launch command, probing the system on first use.
    pub fn terminal(&mut self, split: Split, force: bool) -> &[String] {
        self.terminal_with(&SystemProbe, split, force)
    }

    /// Like [`Self::terminal`] but with an injected availability probe.
    ///
    /// The cached command is returned as-is unless `force` is set or
    /// nothing is cached yet.
    pub fn terminal_with(&mut self, probe: &dyn Probe, split: Split, force: bool) -> &[String] {
        if force {
            self.terminal = None;
        }
        self.terminal
            .get_or_insert_with(|| terminal::choose(split, probe))
    }

    /// Load the binary at `path` and record it as the current binary.
    /// Open and parse failures propagate unchanged.
    pub fn load_binary(&mut self, path: &Path) -> Result<Binary> {
        let binary = Binary::load(path)?;
        self.binary = Some(binary.clone());
        Ok(binary)
    }

    /// The most recently loaded binary, if any.
    pub fn binary(&self) -> Option<&Binary> {
        self.binary.as_ref()
    }
}
