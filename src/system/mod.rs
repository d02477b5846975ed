//! Serial command line for device configuration.
//!
//! This module holds everything between the UART driver and the
//! configuration image:
//!
//! - **[`cmdline`]**: line editor and dispatcher, fed one byte at a time
//! - **[`commands`]**: the command table and its lookup rules
//! - **[`vars`]**: typed configuration variables used by `set`
//! - **[`platform`]**: the board services the commands rely on
//!
//! # Design Principles
//!
//! - **Zero-Allocation**: fixed-size line buffer, no heap
//! - **Explicit state**: a [`Cmdline`] value per session instead of globals
//! - **Closed command set**: commands are an enum, not function pointers
//!
//! # Usage
//!
//! ```rust,no_run
//! # use laureline_cmdline::config::Config;
//! # use laureline_cmdline::system::platform::Platform;
//! use laureline_cmdline::system::Cmdline;
//!
//! fn serial_task<P: Platform>(board: P, config: Config, mut rx: impl FnMut() -> u8) -> ! {
//!     let mut cli = Cmdline::start(board, config);
//!     loop {
//!         cli.feed(rx());
//!     }
//! }
//! ```

/// Line editor and dispatcher.
pub mod cmdline;

/// Command table and lookup.
pub mod commands;

/// Board services consumed by the command line.
pub mod platform;

/// Typed configuration variables.
pub mod vars;

pub use cmdline::{Cmdline, Event};
pub use commands::Command;
pub use platform::{Platform, Uptime};
pub use vars::{ParseMode, Value, VarError, VarType, Variable};
