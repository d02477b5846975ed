//! Host-side board used by the command line tests.

use core::fmt;

use laureline_cmdline::config::Config;
use laureline_cmdline::storage::PersistError;
use laureline_cmdline::system::{Cmdline, Platform, Uptime};

pub struct MockPlatform {
    pub output: String,
    pub persist_result: Result<(), PersistError>,
    pub persisted: Vec<Config>,
    pub resets: usize,
    pub delays: Vec<u32>,
    pub uptime_secs: u64,
    pub mac: Option<[u8; 6]>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            persist_result: Ok(()),
            persisted: Vec::new(),
            resets: 0,
            delays: Vec::new(),
            uptime_secs: 3723,
            mac: None,
        }
    }
}

impl fmt::Write for MockPlatform {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.output.push_str(s);
        Ok(())
    }
}

impl Platform for MockPlatform {
    fn persist_config(&mut self, config: &Config) -> Result<(), PersistError> {
        self.persisted.push(*config);
        self.persist_result
    }

    fn reset(&mut self) {
        self.resets += 1;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays.push(ms);
    }

    fn uptime(&self) -> Uptime {
        Uptime::from_secs(self.uptime_secs)
    }

    fn system_frequency(&self) -> u32 {
        72_000_000
    }

    fn hardware_address(&self) -> Option<[u8; 6]> {
        self.mac
    }

    fn board_revision(&self) -> &'static str {
        "rev4"
    }
}

/// A session that has already been enabled with Enter, output cleared.
pub fn enabled_session() -> Cmdline<MockPlatform> {
    let mut cli = Cmdline::new(MockPlatform::new(), Config::factory());
    // LF leaves no CR pending for the next test byte
    cli.feed(b'\n');
    take_output(&mut cli);
    cli
}

pub fn take_output(cli: &mut Cmdline<MockPlatform>) -> String {
    std::mem::take(&mut cli.platform_mut().output)
}

/// Feed `input` and return everything printed meanwhile.
pub fn run(cli: &mut Cmdline<MockPlatform>, input: &[u8]) -> String {
    cli.feed_bytes(input);
    take_output(cli)
}
