//! Interactive command line over a byte stream.
//!
//! [`Cmdline`] is fed one byte at a time by the serial driver. It edits a
//! single line in a fixed buffer, echoes through the [`Platform`] writer and
//! runs the matching [`Command`] when the line is terminated.
//!
//! # States
//!
//! ```text
//!            CR / LF                      exit, Ctrl-D
//! Disabled ─────────▶ Enabled ──────────────────────▶ Disabled
//!  (input dropped)     (line editing)
//! ```
//!
//! # Character handling
//!
//! - **CR/LF**: run the line, or reprompt on an empty line. A LF is
//!   swallowed while the CR that ended the previous line is still pending,
//!   which lasts until a character is stored. In the disabled state that LF
//!   re-enables the line without a prompt.
//! - **Backspace/Delete**: erase the last character.
//! - **Ctrl-D** on an empty line: same as `exit`.
//! - **Ctrl-L**: clear the screen and reprompt.
//! - **Tab, `?`**: reserved for completion, ignored.
//! - **Printable ASCII**: appended and echoed; leading spaces are dropped and
//!   input past [`LINE_CAPACITY`] is discarded.
//! - Anything else is ignored.
//!
//! # Example
//!
//! ```rust
//! use core::fmt;
//! use laureline_cmdline::config::Config;
//! use laureline_cmdline::storage::PersistError;
//! use laureline_cmdline::system::cmdline::{Cmdline, Event};
//! use laureline_cmdline::system::commands::Command;
//! use laureline_cmdline::system::platform::{Platform, Uptime};
//!
//! struct Uart(String);
//!
//! impl fmt::Write for Uart {
//!     fn write_str(&mut self, s: &str) -> fmt::Result {
//!         self.0.push_str(s);
//!         Ok(())
//!     }
//! }
//!
//! impl Platform for Uart {
//!     fn persist_config(&mut self, _: &Config) -> Result<(), PersistError> { Ok(()) }
//!     fn reset(&mut self) {}
//!     fn delay_ms(&mut self, _: u32) {}
//!     fn uptime(&self) -> Uptime { Uptime::from_secs(0) }
//!     fn system_frequency(&self) -> u32 { 72_000_000 }
//!     fn board_revision(&self) -> &'static str { "rev2" }
//! }
//!
//! let mut cli = Cmdline::start(Uart(String::new()), Config::factory());
//! cli.feed(b'\r');
//! cli.feed_bytes(b"set gps_baud_rate=4800");
//! assert_eq!(cli.feed(b'\r'), Event::Dispatched(Command::Set));
//! assert_eq!(cli.config().gps_baud_rate, 4800);
//! ```

use core::fmt::Write;

use heapless::Vec;

use super::commands::{self, COMMANDS, Command};
use super::platform::{MacAddress, Platform};
use super::vars::{self, ParseMode, VARIABLES, VarError};
use crate::config::Config;

/// Maximum number of characters on one line.
pub const LINE_CAPACITY: usize = 64;

/// Software version reported by `version` and the banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Product line printed by the banner.
pub const PRODUCT_NAME: &str = "Laureline GPS NTP Server";

/// Pause between a successful save and the reset, so the reply drains.
pub const REBOOT_DELAY_MS: u32 = 1000;

/// Prompt, printed on a fresh line.
pub const PROMPT: &str = "\r\n# ";

/// Clear screen and home the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Visually erase the character left of the cursor.
pub const ERASE: &str = "\x08 \x08";

// ASCII control characters
const ASCII_EOT: u8 = 0x04;
const ASCII_BACKSPACE: u8 = 0x08;
const ASCII_TAB: u8 = 0x09;
const ASCII_LF: u8 = 0x0A;
const ASCII_FF: u8 = 0x0C;
const ASCII_CR: u8 = 0x0D;
const ASCII_SPACE: u8 = 0x20;
const ASCII_DEL: u8 = 0x7F;

/// What a single byte did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Dropped without any effect.
    Ignored,
    /// Appended to the line and echoed.
    Echoed,
    /// Removed the last character of the line.
    Erased,
    /// Empty line terminated; the prompt was reissued.
    Prompt,
    /// Screen cleared and the line discarded.
    Cleared,
    /// A command ran.
    Dispatched(Command),
    /// The line named no known command.
    UnknownCommand,
}

/// One command line session.
///
/// The session owns the board services and the in-memory configuration it
/// edits. Hand them back with [`into_parts`](Self::into_parts) or reach them
/// through the accessors.
#[derive(Debug)]
pub struct Cmdline<P> {
    platform: P,
    config: Config,
    line: Vec<u8, LINE_CAPACITY>,
    enabled: bool,
    // A CR ended the last line and nothing has been typed since
    after_cr: bool,
    parse_mode: ParseMode,
}

impl<P: Platform> Cmdline<P> {
    /// Create a disabled session with an empty line.
    pub fn new(platform: P, config: Config) -> Self {
        Self {
            platform,
            config,
            line: Vec::new(),
            enabled: false,
            after_cr: false,
            parse_mode: ParseMode::default(),
        }
    }

    /// Create a session and print the startup banner.
    pub fn start(platform: P, config: Config) -> Self {
        let mut cli = Self::new(platform, config);
        cli.banner();
        cli
    }

    /// Whether input is being accepted.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Text typed so far on the current line.
    pub fn line(&self) -> &str {
        core::str::from_utf8(&self.line).unwrap_or("")
    }

    /// How `set` parses values.
    pub fn parse_mode(&self) -> ParseMode {
        self.parse_mode
    }

    /// Choose how `set` parses values.
    pub fn set_parse_mode(&mut self, mode: ParseMode) {
        self.parse_mode = mode;
    }

    /// The configuration being edited.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mutable access to the configuration being edited.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// The board services.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Mutable access to the board services.
    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Tear down the session.
    pub fn into_parts(self) -> (P, Config) {
        (self.platform, self.config)
    }

    /// Feed every byte of `data`.
    pub fn feed_bytes(&mut self, data: &[u8]) {
        for &byte in data {
            self.feed(byte);
        }
    }

    /// Process one input byte.
    pub fn feed(&mut self, byte: u8) -> Event {
        if !self.enabled {
            if byte != ASCII_CR && byte != ASCII_LF {
                return Event::Ignored;
            }
            self.enabled = true;
        }

        match byte {
            ASCII_TAB | b'?' => Event::Ignored,
            ASCII_EOT if self.line.is_empty() => {
                self.execute(Command::Exit, "");
                Event::Dispatched(Command::Exit)
            }
            ASCII_FF => {
                self.print(CLEAR_SCREEN);
                self.prompt();
                Event::Cleared
            }
            ASCII_CR | ASCII_LF => {
                let event = if !self.line.is_empty() {
                    self.print("\r\n");
                    self.dispatch()
                } else if byte == ASCII_LF && self.after_cr {
                    // pending CR stays until a character is stored
                    return Event::Ignored;
                } else {
                    Event::Prompt
                };
                if self.enabled {
                    self.prompt();
                }
                self.after_cr = byte == ASCII_CR;
                event
            }
            ASCII_BACKSPACE | ASCII_DEL => {
                if self.line.pop().is_some() {
                    self.print(ERASE);
                    Event::Erased
                } else {
                    Event::Ignored
                }
            }
            ASCII_SPACE..=b'~' => {
                if self.line.is_empty() && byte == ASCII_SPACE {
                    return Event::Ignored;
                }
                if self.line.push(byte).is_err() {
                    return Event::Ignored;
                }
                self.after_cr = false;
                let _ = self.platform.write_char(char::from(byte));
                Event::Echoed
            }
            _ => Event::Ignored,
        }
    }

    /// Print the startup banner.
    pub fn banner(&mut self) {
        let _ = write!(self.platform, "\r\n\r\n{}\r\n", PRODUCT_NAME);
        self.print_version();
        self.print_hwaddr();
        self.print("\r\nPress Enter to enable command-line\r\n");
    }

    /// Run a command as if typed with `args` after it.
    pub fn execute(&mut self, cmd: Command, args: &str) {
        debug!("cmdline: {}", cmd);
        match cmd {
            Command::Defaults => {
                self.config = Config::factory();
                self.write_config();
            }
            Command::Exit => self.exit(),
            Command::Help => self.help(),
            Command::Info => self.info(),
            Command::Save => self.write_config(),
            Command::Set => self.set(args),
            Command::Uptime => self.print_uptime(),
            Command::Version => self.print_version(),
        }
    }

    fn dispatch(&mut self) -> Event {
        let line = core::mem::take(&mut self.line);
        let text = core::str::from_utf8(&line).unwrap_or("");
        match commands::lookup(text) {
            Some((cmd, args)) => {
                self.execute(cmd, args);
                Event::Dispatched(cmd)
            }
            None => {
                warn!("cmdline: unknown command {=str}", text);
                self.print("ERR: Unknown command, try 'help'\r\n");
                Event::UnknownCommand
            }
        }
    }

    fn prompt(&mut self) {
        self.line.clear();
        self.enabled = true;
        self.print(PROMPT);
    }

    fn print(&mut self, text: &str) {
        let _ = self.platform.write_str(text);
    }

    fn write_config(&mut self) {
        self.print("Writing EEPROM...\r\n");
        match self.platform.persist_config(&self.config) {
            Ok(()) => {
                info!("cmdline: configuration saved, rebooting");
                self.print("OK\r\n");
                self.platform.delay_ms(REBOOT_DELAY_MS);
                self.platform.reset();
            }
            Err(err) => {
                warn!("cmdline: configuration not saved: {}", err);
                let _ = write!(self.platform, "{}\r\n", err);
            }
        }
    }

    fn exit(&mut self) {
        self.line.clear();
        self.enabled = false;
        self.print(
            "Exiting cmdline mode.\r\n\
             Configuration changes have not been saved.\r\n\
             Press Enter to enable cmdline.\r\n",
        );
    }

    fn help(&mut self) {
        self.print("Available commands:\r\n");
        for cmd in COMMANDS {
            let _ = write!(self.platform, "{}\t{}\r\n", cmd.name(), cmd.description());
        }
    }

    fn info(&mut self) {
        self.print_version();
        self.print_hwaddr();
        self.print_uptime();
        let hz = self.platform.system_frequency();
        let _ = write!(self.platform, "System clock:   {} Hz (nominal)\r\n", hz);
    }

    fn set(&mut self, args: &str) {
        if args.is_empty() || args == "*" {
            self.print("Current settings:\r\n");
            for var in VARIABLES.iter() {
                let _ = write!(self.platform, "{} = ", var.name());
                let _ = var.format(&self.config, &mut self.platform, !args.is_empty());
                self.print("\r\n");
            }
            return;
        }

        let Some(var) = vars::find(args) else {
            let _ = write!(self.platform, "{}\r\n", VarError::UnknownVariable);
            return;
        };

        match args.find('=') {
            Some(eq) => {
                let value = args[eq + 1..].trim_start_matches(' ');
                match var.assign(&mut self.config, value, self.parse_mode) {
                    Ok(_) => {
                        let _ = write!(self.platform, "{} set to ", var.name());
                        let _ = var.format(&self.config, &mut self.platform, false);
                    }
                    Err(err) => {
                        let _ = write!(self.platform, "{}\r\n", err);
                    }
                }
            }
            None => {
                let _ = write!(self.platform, "{} = ", var.name());
                let _ = var.format(&self.config, &mut self.platform, false);
                self.print("\r\n");
            }
        }
    }

    fn print_uptime(&mut self) {
        let uptime = self.platform.uptime();
        let _ = write!(self.platform, "Uptime:         {}\r\n", uptime);
    }

    fn print_version(&mut self) {
        let board = self.platform.board_revision();
        let _ = write!(
            self.platform,
            "Hardware:       {}\r\nSoftware:       {}\r\n",
            board, VERSION
        );
    }

    fn print_hwaddr(&mut self) {
        self.print("MAC Address:    ");
        if let Some(mac) = self.platform.hardware_address() {
            let _ = write!(self.platform, "{}", MacAddress(mac));
        }
        self.print("\r\n");
    }
}
