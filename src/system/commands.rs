//! Command table and lookup.
//!
//! Commands form a closed set. The table is kept sorted by name because
//! [`lookup`] binary-searches it.

use core::cmp::Ordering;

/// A command understood by the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Reset the configuration to factory defaults, save and reboot.
    Defaults,
    /// Leave interactive mode.
    Exit,
    /// List commands.
    Help,
    /// Version, hardware address, uptime and clock.
    Info,
    /// Save the configuration and reboot.
    Save,
    /// Show or change configuration variables.
    Set,
    /// Show time since boot.
    Uptime,
    /// Show hardware and software versions.
    Version,
}

/// All commands, sorted by name.
pub const COMMANDS: [Command; 8] = [
    Command::Defaults,
    Command::Exit,
    Command::Help,
    Command::Info,
    Command::Save,
    Command::Set,
    Command::Uptime,
    Command::Version,
];

impl Command {
    /// Name typed at the prompt.
    pub const fn name(self) -> &'static str {
        match self {
            Command::Defaults => "defaults",
            Command::Exit => "exit",
            Command::Help => "help",
            Command::Info => "info",
            Command::Save => "save",
            Command::Set => "set",
            Command::Uptime => "uptime",
            Command::Version => "version",
        }
    }

    /// One-line description shown by `help`.
    pub const fn description(self) -> &'static str {
        match self {
            Command::Defaults => "reset to factory defaults and reboot",
            Command::Exit => "leave command mode",
            Command::Help => "",
            Command::Info => "show runtime information",
            Command::Save => "save changes and reboot",
            Command::Set => "name=value or blank or * for list",
            Command::Uptime => "show the system uptime",
            Command::Version => "show version",
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Command {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.name())
    }
}

/// Compare `input` against `name`, case-insensitively, over `name.len()`
/// bytes only. Input bytes past its end compare as NUL.
///
/// The compare length comes from the table entry, so an input equal to or
/// starting with `name` is `Equal`, while a shorter input never is.
pub(crate) fn compare_name(input: &[u8], name: &str) -> Ordering {
    for (i, &n) in name.as_bytes().iter().enumerate() {
        let c = input.get(i).copied().unwrap_or(0);
        match c.to_ascii_lowercase().cmp(&n.to_ascii_lowercase()) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    Ordering::Equal
}

/// Resolve a completed line to a command and its argument text.
///
/// The command token is the line up to the first space. The argument is
/// whatever follows the matched name and one separator byte, or an empty
/// string when the line ends there.
///
/// ```rust
/// use laureline_cmdline::system::commands::{lookup, Command};
///
/// assert_eq!(lookup("set ip_addr=10.0.0.1"), Some((Command::Set, "ip_addr=10.0.0.1")));
/// assert_eq!(lookup("HELP"), Some((Command::Help, "")));
/// assert_eq!(lookup("hel"), None);
/// ```
pub fn lookup(line: &str) -> Option<(Command, &str)> {
    let token = line.split(' ').next().unwrap_or("");
    let idx = COMMANDS
        .binary_search_by(|cmd| compare_name(token.as_bytes(), cmd.name()).reverse())
        .ok()?;
    let cmd = COMMANDS[idx];
    let args = line.get(cmd.name().len() + 1..).unwrap_or("");
    Some((cmd, args))
}
