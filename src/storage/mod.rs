//! # Storage abstraction for the configuration EEPROM
//!
//! This module provides the traits a storage driver implements and a
//! [`ConfigStore`] that keeps the device [`Config`] image on such a device.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Command line   │───▶│   ConfigStore   │───▶│  EEPROM driver  │
//! │  (save/defaults)│    │  image + CRC-32 │    │ (Storage+Eeprom)│
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! The stored record is the raw [`CONFIG_SIZE`]-byte image followed by the
//! CRC-32 of the image in little endian. Writes are split on page boundaries
//! when the device reports a page size.
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use laureline_cmdline::config::Config;
//! use laureline_cmdline::storage::{ConfigStore, Eeprom, PersistError};
//!
//! fn persist<E: Eeprom<Error = laureline_cmdline::storage::Error>>(
//!     eeprom: &mut E,
//!     cfg: &Config,
//! ) -> Result<(), PersistError> {
//!     ConfigStore::new(eeprom, 0).save(cfg).map_err(PersistError::from)
//! }
//! ```

#![deny(unsafe_code)]

/// Error types for storage operations and configuration persistence
pub mod error;

pub use error::{ConfigError, Error, PersistError};

use crate::config::{CONFIG_SIZE, Config};

/// Size of the stored record: image plus CRC-32 trailer.
pub const RECORD_SIZE: usize = CONFIG_SIZE + 4;

// ========================
// Core Synchronous Traits
// ========================

/// Trait for reading data from storage devices.
///
/// # Examples
///
/// ```rust,no_run
/// use laureline_cmdline::storage::ReadStorage;
///
/// fn read_device_id<S: ReadStorage>(storage: &mut S) -> Result<u32, S::Error> {
///     let mut id_bytes = [0u8; 4];
///     storage.read(0, &mut id_bytes)?;
///     Ok(u32::from_le_bytes(id_bytes))
/// }
/// ```
pub trait ReadStorage {
    /// Associated error type for read operations
    type Error: core::fmt::Debug;

    /// Read data from the storage device.
    ///
    /// Reads data from the specified offset into the provided buffer.
    /// The entire buffer will be filled unless an error occurs.
    ///
    /// # Errors
    ///
    /// - `OutOfBounds` if offset + buffer length exceeds device capacity
    /// - `ReadError` if hardware read operation fails
    /// - `Nack` / `Timeout` for bus-level failures
    fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error>;

    /// Get the total capacity of the storage device in bytes.
    fn capacity(&self) -> usize;
}

/// Trait for storage devices that support both read and write operations.
pub trait Storage: ReadStorage {
    /// Write data to the storage device.
    ///
    /// # Errors
    ///
    /// - `OutOfBounds` if offset + data length exceeds device capacity
    /// - `WriteError` if hardware write operation fails
    /// - `Nack` / `Timeout` for bus-level failures
    fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// EEPROM-specific storage operations.
///
/// Serial EEPROMs program in pages and wrap around inside a page when a
/// write crosses its boundary, so writers must split on page boundaries.
pub trait Eeprom: Storage {
    /// Get the page size for page-mode programming.
    ///
    /// Returns `None` if the device accepts arbitrary write lengths.
    fn page_size(&self) -> Option<usize>;
}

/// Configuration record kept at a fixed offset of an EEPROM.
#[derive(Debug)]
pub struct ConfigStore<'a, E> {
    eeprom: &'a mut E,
    offset: u32,
}

impl<'a, E> ConfigStore<'a, E>
where
    E: Eeprom<Error = Error>,
{
    /// Bind a store to `eeprom`, with the record starting at `offset`.
    pub fn new(eeprom: &'a mut E, offset: u32) -> Self {
        Self { eeprom, offset }
    }

    /// Write `config` and its checksum.
    ///
    /// The in-memory configuration is not touched; on failure the stored
    /// record may be partially written and will fail its checksum on load.
    pub fn save(&mut self, config: &Config) -> Result<(), Error> {
        let record = encode_record(config);
        if self.offset as usize + RECORD_SIZE > self.eeprom.capacity() {
            return Err(Error::OutOfBounds);
        }

        let page = self.eeprom.page_size().filter(|&p| p > 0);
        let mut written = 0;
        while written < RECORD_SIZE {
            let addr = self.offset as usize + written;
            let chunk = match page {
                Some(p) => (p - addr % p).min(RECORD_SIZE - written),
                None => RECORD_SIZE - written,
            };
            self.eeprom
                .write(addr as u32, &record[written..written + chunk])?;
            written += chunk;
        }
        debug!("config record written at {=u32}", self.offset);
        Ok(())
    }

    /// Read and validate the stored configuration.
    pub fn load(&mut self) -> Result<Config, ConfigError> {
        let mut record = [0u8; RECORD_SIZE];
        self.eeprom.read(self.offset, &mut record)?;
        decode_record(&record)
    }
}

fn encode_record(config: &Config) -> [u8; RECORD_SIZE] {
    let image = config.to_bytes();
    let mut record = [0u8; RECORD_SIZE];
    record[..CONFIG_SIZE].copy_from_slice(&image);
    record[CONFIG_SIZE..].copy_from_slice(&crc32fast::hash(&image).to_le_bytes());
    record
}

fn decode_record(record: &[u8; RECORD_SIZE]) -> Result<Config, ConfigError> {
    let mut image = [0u8; CONFIG_SIZE];
    image.copy_from_slice(&record[..CONFIG_SIZE]);

    let mut stored = [0u8; 4];
    stored.copy_from_slice(&record[CONFIG_SIZE..]);
    if crc32fast::hash(&image) != u32::from_le_bytes(stored) {
        warn!("config record checksum mismatch");
        return Err(ConfigError::Checksum);
    }

    let config = Config::from_bytes(&image);
    if !config.is_current() {
        return Err(ConfigError::Version(config.version));
    }
    Ok(config)
}
