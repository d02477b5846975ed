//! Typed configuration variables.
//!
//! Each [`Variable`] names one field of the [`Config`] and knows how to render
//! and parse it. The `set` command is a thin layer over [`find`],
//! [`Variable::format`] and [`Variable::assign`].
//!
//! ```rust
//! use laureline_cmdline::config::Config;
//! use laureline_cmdline::system::vars::{self, ParseMode, Value};
//!
//! let mut cfg = Config::factory();
//! let var = vars::find("ip_addr").unwrap();
//! var.assign(&mut cfg, "192.168.1.1", ParseMode::Permissive).unwrap();
//! assert_eq!(var.value(&cfg), Value::Ip4([192, 168, 1, 1]));
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::net::Ipv4Addr;

use super::commands::compare_name;
use crate::config::Config;

/// How text is turned into values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Never fails. Digits are accumulated until the first non-digit,
    /// arithmetic wraps, and stray characters in addresses are skipped.
    /// Malformed input therefore degrades to zero or a partial value.
    #[default]
    Permissive,
    /// Rejects anything that is not exactly a valid value of the type.
    Strict,
}

/// Value type of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarType {
    /// Unsigned 32-bit integer, shown in decimal.
    UInt32,
    /// Flag, shown as `0` or `1`.
    Bool,
    /// IPv4 address, shown as a dotted quad.
    Ip4,
}

/// A decoded variable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// Unsigned integer.
    UInt32(u32),
    /// Normalized flag.
    Bool(bool),
    /// Address octets in network order.
    Ip4([u8; 4]),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Value::UInt32(v) => write!(f, "{}", v),
            Value::Bool(v) => f.write_str(if v { "1" } else { "0" }),
            Value::Ip4([a, b, c, d]) => write!(f, "{}.{}.{}.{}", a, b, c, d),
        }
    }
}

/// Variable errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarError {
    /// No variable matches the given name.
    UnknownVariable,
    /// The text is not a valid value (strict mode only).
    InvalidValue,
}

impl VarError {
    /// Diagnostic line printed on the console, without line ending.
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnknownVariable => "ERR: Unknown variable name",
            Self::InvalidValue => "ERR: Invalid value",
        }
    }
}

impl fmt::Display for VarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for VarError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            VarError::UnknownVariable => defmt::write!(f, "UnknownVariable"),
            VarError::InvalidValue => defmt::write!(f, "InvalidValue"),
        }
    }
}

/// Typed access to the config field behind a variable.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Slot {
    /// 32-bit integer field.
    UInt32 {
        get: fn(&Config) -> u32,
        set: fn(&mut Config, u32),
    },
    /// Raw byte; any non-zero value reads as true.
    Bool {
        get: fn(&Config) -> u8,
        set: fn(&mut Config, u8),
    },
    /// Four octets in network order.
    Ip4 {
        get: fn(&Config) -> [u8; 4],
        set: fn(&mut Config, [u8; 4]),
    },
}

/// A named, typed configuration variable.
#[derive(Debug, Clone, Copy)]
pub struct Variable {
    name: &'static str,
    slot: Slot,
}

/// Every variable reachable from `set`, in listing order.
pub static VARIABLES: [Variable; 5] = [
    Variable {
        name: "dhcp_enable",
        slot: Slot::Bool {
            get: |c| c.dhcp_enable,
            set: |c, v| c.dhcp_enable = v,
        },
    },
    Variable {
        name: "gps_baud_rate",
        slot: Slot::UInt32 {
            get: |c| c.gps_baud_rate,
            set: |c, v| c.gps_baud_rate = v,
        },
    },
    Variable {
        name: "ip_addr",
        slot: Slot::Ip4 {
            get: |c| c.ip_addr,
            set: |c, v| c.ip_addr = v,
        },
    },
    Variable {
        name: "ip_gateway",
        slot: Slot::Ip4 {
            get: |c| c.ip_gateway,
            set: |c, v| c.ip_gateway = v,
        },
    },
    Variable {
        name: "ip_netmask",
        slot: Slot::Ip4 {
            get: |c| c.ip_netmask,
            set: |c, v| c.ip_netmask = v,
        },
    },
];

/// Find the variable `input` refers to.
///
/// Matching is case-insensitive over the length of each variable's name, so
/// `input` may carry trailing text such as `=value`. A shorter input never
/// matches.
pub fn find(input: &str) -> Option<&'static Variable> {
    VARIABLES
        .iter()
        .find(|var| compare_name(input.as_bytes(), var.name) == Ordering::Equal)
}

impl Variable {
    /// Variable name as listed.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Value type.
    pub fn var_type(&self) -> VarType {
        match self.slot {
            Slot::UInt32 { .. } => VarType::UInt32,
            Slot::Bool { .. } => VarType::Bool,
            Slot::Ip4 { .. } => VarType::Ip4,
        }
    }

    /// Current value in `config`.
    pub fn value(&self, config: &Config) -> Value {
        match self.slot {
            Slot::UInt32 { get, .. } => Value::UInt32(get(config)),
            Slot::Bool { get, .. } => Value::Bool(get(config) != 0),
            Slot::Ip4 { get, .. } => Value::Ip4(get(config)),
        }
    }

    /// Write the current value to `out`.
    ///
    /// `verbose` is reserved for a long form and currently renders the same.
    pub fn format<W: fmt::Write>(
        &self,
        config: &Config,
        out: &mut W,
        _verbose: bool,
    ) -> fmt::Result {
        write!(out, "{}", self.value(config))
    }

    /// Parse `text` as a value of this variable's type.
    pub fn parse(&self, text: &str, mode: ParseMode) -> Result<Value, VarError> {
        match self.var_type() {
            VarType::UInt32 => parse_u32(text, mode).map(Value::UInt32),
            VarType::Bool => parse_u32(text, mode).map(|v| Value::Bool(v != 0)),
            VarType::Ip4 => parse_ip4(text, mode).map(Value::Ip4),
        }
    }

    /// Parse `text` and store it in `config`, returning the stored value.
    ///
    /// On error `config` is left unchanged.
    pub fn assign(
        &self,
        config: &mut Config,
        text: &str,
        mode: ParseMode,
    ) -> Result<Value, VarError> {
        match self.slot {
            Slot::UInt32 { set, .. } => set(config, parse_u32(text, mode)?),
            Slot::Bool { set, .. } => set(config, u8::from(parse_u32(text, mode)? != 0)),
            Slot::Ip4 { set, .. } => set(config, parse_ip4(text, mode)?),
        }
        info!("{=str} updated", self.name);
        Ok(self.value(config))
    }
}

/// Parse a decimal unsigned integer.
pub fn parse_u32(text: &str, mode: ParseMode) -> Result<u32, VarError> {
    match mode {
        ParseMode::Permissive => Ok(text
            .bytes()
            .take_while(u8::is_ascii_digit)
            .fold(0u32, |acc, d| {
                acc.wrapping_mul(10).wrapping_add(u32::from(d - b'0'))
            })),
        ParseMode::Strict => text.trim().parse().map_err(|_| VarError::InvalidValue),
    }
}

/// Parse a dotted-quad IPv4 address into octets in network order.
///
/// In permissive mode every `.` closes an octet and shifts it into a 32-bit
/// accumulator, so extra groups push the oldest out and missing groups leave
/// leading zeros. Octets wrap at 256.
pub fn parse_ip4(text: &str, mode: ParseMode) -> Result<[u8; 4], VarError> {
    match mode {
        ParseMode::Permissive => {
            let mut addr: u32 = 0;
            let mut octet: u8 = 0;
            for b in text.bytes() {
                match b {
                    b'.' => {
                        addr = (addr << 8) | u32::from(octet);
                        octet = 0;
                    }
                    b'0'..=b'9' => octet = octet.wrapping_mul(10).wrapping_add(b - b'0'),
                    _ => {}
                }
            }
            addr = (addr << 8) | u32::from(octet);
            Ok(addr.to_be_bytes())
        }
        ParseMode::Strict => text
            .trim()
            .parse::<Ipv4Addr>()
            .map(|ip| ip.octets())
            .map_err(|_| VarError::InvalidValue),
    }
}
