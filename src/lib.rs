//! Launch exploit targets in a debugger window, against a remote
//! service, or as a local process.

pub mod binary;
pub mod config;
pub mod context;
pub mod launch;
pub mod terminal;

pub use binary::Binary;
pub use config::Config;
pub use context::Context;
pub use launch::{LaunchFlags, Mode, StartOptions, Target};
pub use terminal::Split;
