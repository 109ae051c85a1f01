use anyhow::{bail, Context as _, Result};
use std::process::{Child, Command, Stdio};

use crate::binary::Binary;
use crate::config::Config;
use crate::context::Context;
use crate::terminal::Split;

/// Write `gdbscript` to a temp file and spawn the configured debugger
/// on the binary inside a freshly selected terminal window. The temp
/// file is left in place; the debugger reads it after we return.
pub(super) fn attach(
    ctx: &mut Context,
    config: &Config,
    binary: &Binary,
    gdbscript: &str,
) -> Result<Child> {
    let script_path =
        std::env::temp_dir().join(format!("pwnlaunch-gdbscript-{}.gdb", std::process::id()));
    std::fs::write(&script_path, gdbscript.as_bytes())
        .with_context(|| format!("Failed to write gdbscript to {}", script_path.display()))?;

    let script_str = script_path
        .to_str()
        .context("Temp path contains non-UTF-8 characters")?;
    let binary_str = binary
        .path
        .to_str()
        .context("Binary path contains non-UTF-8 characters")?;

    let mut argv = ctx.terminal(Split::Horizontal, false).to_vec();
    argv.push(config.gdb.program.clone());
    argv.extend(["-q", "-x", script_str, binary_str].map(String::from));

    let Some((program, args)) = argv.split_first() else {
        bail!("Empty terminal command");
    };
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to spawn {program}"))
}
