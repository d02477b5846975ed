//! Device services consumed by the command line.
//!
//! The command line never touches hardware directly. Everything it needs from
//! the board is reached through [`Platform`], which the firmware implements
//! once and hands to [`Cmdline`](super::cmdline::Cmdline).

use core::fmt;

use crate::config::Config;
use crate::storage::PersistError;

/// Board services used by the command line.
///
/// Output goes through the [`fmt::Write`] supertrait; implementations
/// typically push the bytes into a UART transmit queue. Write errors are
/// ignored by the command line, so an implementation that drops output when
/// the queue is full is acceptable.
pub trait Platform: fmt::Write {
    /// Persist `config` to non-volatile storage.
    fn persist_config(&mut self, config: &Config) -> Result<(), PersistError>;

    /// Reset the device.
    ///
    /// On hardware this does not return. Host implementations may return,
    /// in which case the command line simply carries on.
    fn reset(&mut self);

    /// Block for `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);

    /// Time since boot.
    fn uptime(&self) -> Uptime;

    /// Nominal system clock in Hz.
    fn system_frequency(&self) -> u32;

    /// Ethernet hardware address, if the interface is up.
    fn hardware_address(&self) -> Option<[u8; 6]> {
        None
    }

    /// Hardware revision string.
    fn board_revision(&self) -> &'static str;
}

/// Time since boot, displayed as `D days, HH:MM:SS`.
///
/// ```rust
/// use laureline_cmdline::system::platform::Uptime;
///
/// assert_eq!(format!("{}", Uptime::from_secs(59)), "00:00:59");
/// assert_eq!(format!("{}", Uptime::from_secs(90061)), "1 day, 01:01:01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Uptime {
    secs: u64,
}

impl Uptime {
    /// Uptime of `secs` seconds.
    pub const fn from_secs(secs: u64) -> Self {
        Self { secs }
    }

    /// Uptime from a millisecond tick counter.
    pub const fn from_millis(ms: u64) -> Self {
        Self { secs: ms / 1000 }
    }

    /// Whole seconds since boot.
    pub const fn as_secs(&self) -> u64 {
        self.secs
    }
}

impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = self.secs / 86_400;
        let rem = self.secs % 86_400;
        match days {
            0 => {}
            1 => f.write_str("1 day, ")?,
            n => write!(f, "{} days, ", n)?,
        }
        write!(
            f,
            "{:02}:{:02}:{:02}",
            rem / 3600,
            (rem % 3600) / 60,
            rem % 60
        )
    }
}

/// Formats a hardware address as colon separated hex octets.
pub(crate) struct MacAddress(pub [u8; 6]);

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            a, b, c, d, e, g
        )
    }
}
