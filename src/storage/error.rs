//! Error types for storage operations and configuration persistence

use core::fmt;

/// A common error type for storage operations.
///
/// Drivers map their bus-level failures onto these variants so that the
/// command line can report them without knowing the underlying device.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// An operation was attempted on an address that is out of bounds.
    OutOfBounds,
    /// An error occurred during a write operation.
    WriteError,
    /// An error occurred during a read operation.
    ReadError,
    /// An operation was attempted on a device that was not initialized.
    NotInitialized,
    /// The device did not complete the operation in time.
    Timeout,
    /// The device did not acknowledge its address (absent or unpowered).
    Nack,
    /// The underlying storage is bad/unusable at a specific location
    StorageFault,
}

/// Why writing the configuration failed, as reported to the operator.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PersistError {
    /// The write did not finish in time.
    Timeout,
    /// The device did not answer; it is missing or broken.
    NotPresent,
    /// The device answered but reported a fault.
    Fault,
    /// Any other failure.
    Other,
}

impl PersistError {
    /// Diagnostic line printed on the console, without line ending.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Timeout => "ERROR: timeout while writing EEPROM",
            Self::NotPresent => "ERROR: EEPROM is faulty or missing",
            Self::Fault => "ERROR: EEPROM is faulty",
            Self::Other => "FAIL: unable to write EEPROM",
        }
    }
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<Error> for PersistError {
    fn from(err: Error) -> Self {
        match err {
            Error::Timeout => Self::Timeout,
            Error::Nack | Error::NotInitialized => Self::NotPresent,
            Error::StorageFault => Self::Fault,
            Error::OutOfBounds | Error::WriteError | Error::ReadError => Self::Other,
        }
    }
}

/// Failure to load a stored configuration image.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ConfigError {
    /// The device could not be read.
    Storage(Error),
    /// The stored checksum does not match the image.
    Checksum,
    /// The image was written by a different layout version.
    Version(u8),
}

impl From<Error> for ConfigError {
    fn from(err: Error) -> Self {
        Self::Storage(err)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::OutOfBounds => defmt::write!(f, "OutOfBounds"),
            Error::WriteError => defmt::write!(f, "WriteError"),
            Error::ReadError => defmt::write!(f, "ReadError"),
            Error::NotInitialized => defmt::write!(f, "NotInitialized"),
            Error::Timeout => defmt::write!(f, "Timeout"),
            Error::Nack => defmt::write!(f, "Nack"),
            Error::StorageFault => defmt::write!(f, "StorageFault"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PersistError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            PersistError::Timeout => defmt::write!(f, "Timeout"),
            PersistError::NotPresent => defmt::write!(f, "NotPresent"),
            PersistError::Fault => defmt::write!(f, "Fault"),
            PersistError::Other => defmt::write!(f, "Other"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ConfigError::Storage(e) => defmt::write!(f, "Storage({})", e),
            ConfigError::Checksum => defmt::write!(f, "Checksum"),
            ConfigError::Version(v) => defmt::write!(f, "Version({})", v),
        }
    }
}
