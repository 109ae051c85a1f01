use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use pwnlaunch::{
    config::Config,
    context::Context,
    launch::{self, LaunchFlags, StartOptions, Target},
    terminal::{self, Split},
};

#[derive(Parser)]
#[command(
    name = "pwnlaunch",
    about = "Launch exploit targets in a debugger, against a remote service, or as a local process"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a binary and launch it in the selected mode
    Run {
        /// Path to the target binary
        #[arg(value_name = "BINARY")]
        binary: PathBuf,

        /// Trailing target arguments; remote mode reads HOST and PORT
        /// from the first two
        #[arg(value_name = "ARGS")]
        target_args: Vec<String>,

        /// Attach a debugger (needs --gdbscript)
        #[arg(long)]
        gdb: bool,

        /// Debugger commands: a script file path, or literal commands
        /// if the value does not name a file
        #[arg(long, value_name = "SCRIPT")]
        gdbscript: Option<String>,

        /// Connect to a remote instance instead of running locally
        #[arg(long)]
        remote: bool,
    },

    /// Print the terminal command that would open a debugger window
    Terminal {
        /// Request a vertical split instead of a horizontal one
        #[arg(long)]
        vertical: bool,

        /// Re-probe even if a terminal command is configured
        #[arg(long)]
        force: bool,
    },

    /// Load a binary and print its metadata
    Info {
        /// Path to the target binary
        #[arg(value_name = "BINARY")]
        binary: PathBuf,
    },

    /// Manage pwnlaunch configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration to disk
    Init,
    /// Set a configuration value (e.g. terminal.command "kitty -e")
    Set { key: String, value: String },
    /// Get a configuration value
    Get { key: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            binary,
            target_args,
            gdb,
            gdbscript,
            remote,
        } => cmd_run(&binary, target_args, gdb, gdbscript, remote)?,

        Commands::Terminal { vertical, force } => cmd_terminal(vertical, force)?,

        Commands::Info { binary } => cmd_info(&binary)?,

        Commands::Config { action } => cmd_config(action)?,
    }

    Ok(())
}

fn cmd_run(
    binary_path: &Path,
    target_args: Vec<String>,
    gdb: bool,
    gdbscript: Option<String>,
    remote: bool,
) -> Result<()> {
    let config = Config::load()?;
    let mut ctx = new_context(&config);

    let binary = ctx.load_binary(binary_path)?;

    if gdb && gdbscript.is_none() {
        eprintln!("--gdb has no effect without --gdbscript; running without a debugger");
    }

    let opts = StartOptions {
        gdbscript: gdbscript.map(|s| read_gdbscript(&s)).transpose()?,
    };
    let flags = LaunchFlags {
        gdb,
        remote,
        target_args,
    };

    match launch::start(&mut ctx, &config, &binary, &flags, &opts)? {
        Target::Debugger(child) => {
            eprintln!("Opened debugger window (pid {})", child.id());
        }
        Target::Remote(stream) => {
            let peer = stream.peer_addr()?;
            eprintln!("Connected to {peer}");
        }
        Target::Local(mut child) => {
            let status = child.wait()?;
            if !status.success() {
                eprintln!("Target exited with status {:?}", status.code());
            }
        }
    }

    Ok(())
}

fn cmd_terminal(vertical: bool, force: bool) -> Result<()> {
    let config = Config::load()?;
    let mut ctx = new_context(&config);

    let split = if vertical {
        Split::Vertical
    } else {
        Split::Horizontal
    };
    println!("{}", ctx.terminal(split, force).join(" "));
    Ok(())
}

fn cmd_info(binary_path: &Path) -> Result<()> {
    let mut ctx = Context::new();
    let binary = ctx.load_binary(binary_path)?;
    println!("{binary}");
    Ok(())
}

fn cmd_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            let pretty = toml::to_string_pretty(&config)?;
            print!("{pretty}");
        }
        ConfigAction::Path => {
            let path = Config::path()?;
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let config = Config::default();
            config.save()?;
            println!("Wrote default config to {}", Config::path()?.display());
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set_value(&key, &value)?;
            config.save()?;
            println!("Set {key} = {value}");
        }
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            println!("{}", config.get_value(&key)?);
        }
    }
    Ok(())
}

/// Build a launch context, pinning the terminal command from config
/// when one is set.
fn new_context(config: &Config) -> Context {
    let mut ctx = Context::new();
    if let Some(cmd) = &config.terminal.command {
        let parts = terminal::split_command(cmd);
        if parts.is_empty() {
            eprintln!("Ignoring empty terminal.command in config");
        } else {
            ctx.set_terminal(parts);
        }
    }
    ctx
}

/// Treat the value as a script file path if one exists, otherwise as
/// literal debugger commands.
fn read_gdbscript(value: &str) -> Result<String> {
    use anyhow::Context as _;

    let path = std::path::Path::new(value);
    if path.is_file() {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read gdbscript {}", path.display()));
    }
    Ok(value.to_string())
}
