//! Device configuration image.
//!
//! The configuration lives in RAM as a [`Config`] and is persisted as a fixed
//! [`CONFIG_SIZE`]-byte image. The command line edits the in-memory copy; the
//! image is only written back by the `save` and `defaults` commands.
//!
//! # Image layout
//!
//! ```text
//! offset  size  field
//! 0       1     version
//! 1       1     dhcp_enable (raw, non-zero is true)
//! 2       2     reserved
//! 4       4     gps_baud_rate (little endian)
//! 8       4     ip_addr (network order)
//! 12      4     ip_gateway (network order)
//! 16      4     ip_netmask (network order)
//! 20      12    reserved
//! ```

/// Size in bytes of the raw configuration image.
pub const CONFIG_SIZE: usize = 32;

/// Layout tag stored in the first byte of the image.
pub const CONFIG_VERSION: u8 = 1;

/// In-memory configuration.
///
/// Addresses are kept as four octets in network order, which is also the
/// order they are displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// Image layout version, [`CONFIG_VERSION`] for a valid image.
    pub version: u8,
    /// Obtain addresses over DHCP. Stored raw; any non-zero byte means enabled.
    pub dhcp_enable: u8,
    /// Baud rate of the GPS receiver UART.
    pub gps_baud_rate: u32,
    /// Static IPv4 address.
    pub ip_addr: [u8; 4],
    /// Default gateway.
    pub ip_gateway: [u8; 4],
    /// Subnet mask.
    pub ip_netmask: [u8; 4],
}

impl Config {
    /// Configuration decoded from an all-zero image.
    pub const fn zeroed() -> Self {
        Self {
            version: 0,
            dhcp_enable: 0,
            gps_baud_rate: 0,
            ip_addr: [0; 4],
            ip_gateway: [0; 4],
            ip_netmask: [0; 4],
        }
    }

    /// Factory defaults: a zeroed image carrying the current version tag.
    pub const fn factory() -> Self {
        let mut cfg = Self::zeroed();
        cfg.version = CONFIG_VERSION;
        cfg
    }

    /// Encode into the raw image.
    pub fn to_bytes(&self) -> [u8; CONFIG_SIZE] {
        let mut image = [0u8; CONFIG_SIZE];
        image[0] = self.version;
        image[1] = self.dhcp_enable;
        image[4..8].copy_from_slice(&self.gps_baud_rate.to_le_bytes());
        image[8..12].copy_from_slice(&self.ip_addr);
        image[12..16].copy_from_slice(&self.ip_gateway);
        image[16..20].copy_from_slice(&self.ip_netmask);
        image
    }

    /// Decode a raw image. Reserved bytes are ignored.
    pub fn from_bytes(image: &[u8; CONFIG_SIZE]) -> Self {
        let octets = |at: usize| [image[at], image[at + 1], image[at + 2], image[at + 3]];
        Self {
            version: image[0],
            dhcp_enable: image[1],
            gps_baud_rate: u32::from_le_bytes(octets(4)),
            ip_addr: octets(8),
            ip_gateway: octets(12),
            ip_netmask: octets(16),
        }
    }

    /// Whether the version tag matches this build's layout.
    pub fn is_current(&self) -> bool {
        self.version == CONFIG_VERSION
    }
}
