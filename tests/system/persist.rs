use laureline_cmdline::config::{CONFIG_VERSION, Config};
use laureline_cmdline::storage::PersistError;
use laureline_cmdline::system::cmdline::REBOOT_DELAY_MS;

use crate::mock::{enabled_session, run};

#[test]
fn test_save_success_reboots() {
    let mut cli = enabled_session();
    run(&mut cli, b"set gps_baud_rate=9600\r");

    let out = run(&mut cli, b"save\r");
    assert!(out.contains("Writing EEPROM...\r\nOK\r\n"));

    let board = cli.platform();
    assert_eq!(board.persisted.len(), 1);
    assert_eq!(board.persisted[0].gps_baud_rate, 9600);
    assert_eq!(board.delays, vec![REBOOT_DELAY_MS]);
    assert_eq!(board.resets, 1);
}

#[test]
fn test_save_failures_are_reported() {
    let cases = [
        (PersistError::Timeout, "ERROR: timeout while writing EEPROM\r\n"),
        (PersistError::NotPresent, "ERROR: EEPROM is faulty or missing\r\n"),
        (PersistError::Fault, "ERROR: EEPROM is faulty\r\n"),
        (PersistError::Other, "FAIL: unable to write EEPROM\r\n"),
    ];

    let mut seen = Vec::new();
    for (err, message) in cases {
        let mut cli = enabled_session();
        cli.platform_mut().persist_result = Err(err);

        let out = run(&mut cli, b"save\r");
        assert!(out.contains(message), "{:?}: {:?}", err, out);
        assert!(!out.contains("OK\r\n"));

        let board = cli.platform();
        assert_eq!(board.resets, 0);
        assert!(board.delays.is_empty());
        assert!(cli.is_enabled());
        seen.push(message);
    }
    seen.dedup();
    assert_eq!(seen.len(), 4);
}

#[test]
fn test_defaults_resets_config() {
    let mut cli = enabled_session();
    run(&mut cli, b"set ip_addr=10.1.2.3\r");
    cli.config_mut().version = 0x55;

    let out = run(&mut cli, b"defaults\r");
    assert!(out.contains("OK\r\n"));

    let expected = Config {
        version: CONFIG_VERSION,
        ..Config::zeroed()
    };
    assert_eq!(*cli.config(), expected);
    assert_eq!(cli.platform().persisted, vec![expected]);
    assert_eq!(cli.platform().resets, 1);
}

#[test]
fn test_failed_defaults_keeps_memory_changes() {
    let mut cli = enabled_session();
    cli.config_mut().gps_baud_rate = 4800;
    cli.platform_mut().persist_result = Err(PersistError::Fault);

    run(&mut cli, b"defaults\r");
    // no rollback: the zeroed image stays in memory
    assert_eq!(cli.config().gps_baud_rate, 0);
    assert_eq!(cli.platform().resets, 0);
}
