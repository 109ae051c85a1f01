//! Three-way launch dispatch: debugger, remote service, or local process.

mod debugger;

#[cfg(test)]
mod tests;

use anyhow::{Context as _, Result};
use std::net::TcpStream;
use std::process::{Child, Command};

use crate::binary::Binary;
use crate::config::Config;
use crate::context::Context;

/// Position of the remote host in the target-argument list.
const REMOTE_HOST_ARG: usize = 0;
/// Position of the remote port in the target-argument list.
const REMOTE_PORT_ARG: usize = 1;

/// Launch-mode flags, parsed by the CLI and read here at dispatch time.
#[derive(Debug, Clone, Default)]
pub struct LaunchFlags {
    /// Attach a debugger instead of running the target directly.
    pub gdb: bool,
    /// Connect to a remote instance of the target.
    pub remote: bool,
    /// Raw trailing arguments; remote mode reads host and port from
    /// fixed positions in this list.
    pub target_args: Vec<String>,
}

/// Options accepted by [`start`].
#[derive(Debug, Clone, Default)]
pub struct StartOptions {
    /// Debugger commands to run at attach. Required for debug mode to
    /// be selected.
    pub gdbscript: Option<String>,
}

/// The launch mode selected from flags and options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Attach a debugger to the target in a new terminal window.
    Debug,
    /// Connect to a remote host/port instead of running locally.
    Remote,
    /// Spawn the target as a local child process.
    Local,
}

impl Mode {
    /// Pick the launch mode. Debug wins only when the flag is set AND
    /// a script was supplied; remote comes next; local is the default.
    pub fn resolve(flags: &LaunchFlags, opts: &StartOptions) -> Self {
        if flags.gdb && opts.gdbscript.is_some() {
            Self::Debug
        } else if flags.remote {
            Self::Remote
        } else {
            Self::Local
        }
    }
}

/// A running target, one variant per launch mode.
pub enum Target {
    /// Terminal window running the debugger session.
    Debugger(Child),
    /// Socket connected to the remote service.
    Remote(TcpStream),
    /// Locally spawned target process.
    Local(Child),
}

/// Launch `binary` in the mode selected by `flags` and `opts`.
///
/// All three branches delegate to the underlying primitive (terminal +
/// debugger spawn, socket connect, process spawn); its failures
/// propagate unchanged apart from added context.
pub fn start(
    ctx: &mut Context,
    config: &Config,
    binary: &Binary,
    flags: &LaunchFlags,
    opts: &StartOptions,
) -> Result<Target> {
    match Mode::resolve(flags, opts) {
        Mode::Debug => {
            let script = opts.gdbscript.as_deref().unwrap_or_default();
            debugger::attach(ctx, config, binary, script).map(Target::Debugger)
        }
        Mode::Remote => {
            let (host, port) = remote_endpoint(flags)?;
            let stream = TcpStream::connect((host.as_str(), port))
                .with_context(|| format!("Failed to connect to {host}:{port}"))?;
            Ok(Target::Remote(stream))
        }
        Mode::Local => spawn_local(binary).map(Target::Local),
    }
}

/// Read host and port from their fixed positions in the target args.
fn remote_endpoint(flags: &LaunchFlags) -> Result<(String, u16)> {
    let host = flags
        .target_args
        .get(REMOTE_HOST_ARG)
        .context("Remote mode needs a HOST as the first target argument")?;
    let port = flags
        .target_args
        .get(REMOTE_PORT_ARG)
        .context("Remote mode needs a PORT as the second target argument")?;
    let port: u16 = port
        .parse()
        .with_context(|| format!("Invalid port: {port}"))?;
    Ok((host.clone(), port))
}

/// Spawn the binary as a local child with inherited stdio.
fn spawn_local(binary: &Binary) -> Result<Child> {
    Command::new(&binary.path)
        .spawn()
        .with_context(|| format!("Failed to spawn {}", binary.path.display()))
}
