//! # laureline-cmdline
//!
//! Serial configuration console for the Laureline GPS NTP server. The crate
//! turns a stream of bytes from a UART into line editing, command dispatch
//! and typed edits of the device configuration. It is `no_std` and performs
//! no allocation.
//!
//! ## Features
//!
//! ### Command line
//! - Byte-at-a-time line editor with echo, backspace, clear screen and
//!   enable/disable handling
//! - Sorted command table with case-insensitive lookup
//! - `set` command over typed variables (integers, flags, IPv4 addresses)
//!
//! ### Configuration
//! - Fixed-layout configuration image with a version tag
//! - EEPROM store with CRC-32 validation and page-aware writes
//!
//! ## Usage
//!
//! ```rust,no_run
//! use laureline_cmdline::config::Config;
//! use laureline_cmdline::system::{Cmdline, Platform};
//!
//! fn run<P: Platform>(board: P, bytes: &[u8]) {
//!     let mut cli = Cmdline::start(board, Config::factory());
//!     cli.feed_bytes(bytes);
//! }
//! ```
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Log through `defmt` and derive `defmt::Format` for error types

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

#[macro_use]
mod fmt;

/// Device configuration image.
pub mod config;

/// Storage traits and the EEPROM configuration store.
pub mod storage;

/// Serial command line, command table and configuration variables.
pub mod system;
