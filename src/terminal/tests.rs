use super::*;
use crate::context::Context;
use std::collections::{HashMap, HashSet};

#[derive(Default)]
struct FakeProbe {
    env: HashMap<&'static str, &'static str>,
    installed: HashSet<&'static str>,
}

impl FakeProbe {
    fn with(programs: &[&'static str]) -> Self {
        Self {
            env: HashMap::new(),
            installed: programs.iter().copied().collect(),
        }
    }

    fn with_env(mut self, name: &'static str, value: &'static str) -> Self {
        self.env.insert(name, value);
        self
    }
}

impl Probe for FakeProbe {
    fn env(&self, name: &str) -> Option<String> {
        self.env.get(name).map(ToString::to_string)
    }

    fn installed(&self, program: &str) -> bool {
        self.installed.contains(program)
    }
}

#[test]
fn always_returns_a_command() {
    let probe = FakeProbe::default();
    for split in [Split::Horizontal, Split::Vertical] {
        let cmd = choose(split, &probe);
        assert!(!cmd.is_empty());
        assert_eq!(cmd, vec!["bash", "-lc"]);
    }
}

#[test]
fn tmux_gets_the_split_flag() {
    let probe = FakeProbe::with(&["tmux"]).with_env("TMUX", "/tmp/tmux-1000/default,42,0");
    insta::assert_snapshot!(
        format!("{:?}", choose(Split::Horizontal, &probe)),
        @r#"["tmux", "splitw", "-h"]"#
    );
    insta::assert_snapshot!(
        format!("{:?}", choose(Split::Vertical, &probe)),
        @r#"["tmux", "splitw", "-v"]"#
    );
}

#[test]
fn tmux_needs_the_env_var() {
    // tmux on PATH but no active session: skipped entirely
    let probe = FakeProbe::with(&["tmux"]);
    assert_eq!(choose(Split::Horizontal, &probe), vec!["bash", "-lc"]);
}

#[test]
fn empty_tmux_var_counts_as_unset() {
    let probe = FakeProbe::with(&["tmux", "xterm"]).with_env("TMUX", "");
    assert_eq!(choose(Split::Horizontal, &probe), vec!["xterm", "-e"]);
}

#[test]
fn earlier_candidates_win() {
    let probe = FakeProbe::with(&["kitty", "xterm"]);
    assert_eq!(choose(Split::Horizontal, &probe), vec!["kitty", "-e"]);

    let probe = FakeProbe::with(&["xterm"]);
    assert_eq!(choose(Split::Horizontal, &probe), vec!["xterm", "-e"]);
}

#[test]
fn only_tmux_honours_orientation() {
    let probe = FakeProbe::with(&["kitty"]);
    assert_eq!(choose(Split::Vertical, &probe), vec!["kitty", "-e"]);

    let probe = FakeProbe::with(&["gnome-terminal"]);
    assert_eq!(choose(Split::Vertical, &probe), vec!["gnome-terminal", "--"]);
}

#[test]
fn cached_command_survives_availability_changes() {
    let tmux = FakeProbe::with(&["tmux"]).with_env("TMUX", "/tmp/tmux-1000/default,42,0");
    let nothing = FakeProbe::default();

    let mut ctx = Context::new();
    let first = ctx.terminal_with(&tmux, Split::Horizontal, false).to_vec();
    assert_eq!(first, vec!["tmux", "splitw", "-h"]);

    // Availability changed underneath, but the cache holds
    let second = ctx.terminal_with(&nothing, Split::Horizontal, false).to_vec();
    assert_eq!(second, first);

    // force re-probes
    let third = ctx.terminal_with(&nothing, Split::Horizontal, true).to_vec();
    assert_eq!(third, vec!["bash", "-lc"]);
}

#[test]
fn pinned_command_is_used_until_forced() {
    let probe = FakeProbe::with(&["kitty"]);

    let mut ctx = Context::new();
    ctx.set_terminal(vec!["urxvt".to_string(), "-e".to_string()]);
    assert_eq!(
        ctx.terminal_with(&probe, Split::Horizontal, false).to_vec(),
        vec!["urxvt", "-e"]
    );

    assert_eq!(
        ctx.terminal_with(&probe, Split::Horizontal, true).to_vec(),
        vec!["kitty", "-e"]
    );
}

#[test]
fn split_command_handles_words_and_quotes() {
    assert_eq!(split_command("kitty -e"), vec!["kitty", "-e"]);
    assert_eq!(
        split_command("tmux  splitw\t-h"),
        vec!["tmux", "splitw", "-h"]
    );
    assert_eq!(
        split_command("xterm -T \"pwn window\" -e"),
        vec!["xterm", "-T", "pwn window", "-e"]
    );
    assert!(split_command("   ").is_empty());
}
