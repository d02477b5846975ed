use laureline_cmdline::system::vars::VARIABLES;
use laureline_cmdline::system::{Command, Event, ParseMode};

use crate::mock::{enabled_session, run};

#[test]
fn test_set_ip_round_trip() {
    let mut cli = enabled_session();
    let out = run(&mut cli, b"set ip_addr=192.168.1.1\r");
    assert!(out.contains("ip_addr set to 192.168.1.1"));
    assert_eq!(cli.config().ip_addr, [192, 168, 1, 1]);

    let out = run(&mut cli, b"set ip_addr\r");
    assert!(out.contains("ip_addr = 192.168.1.1\r\n"));

    let out = run(&mut cli, b"set *\r");
    assert!(out.contains("ip_addr = 192.168.1.1\r\n"));
}

#[test]
fn test_set_baud_rate_listed() {
    let mut cli = enabled_session();
    run(&mut cli, b"set gps_baud_rate=9600\r");
    assert_eq!(cli.config().gps_baud_rate, 9600);

    let out = run(&mut cli, b"set *\r");
    assert!(out.contains("Current settings:\r\n"));
    assert!(out.lines().any(|l| l == "gps_baud_rate = 9600"));
}

#[test]
fn test_set_without_args_lists_all() {
    let mut cli = enabled_session();
    let out = run(&mut cli, b"set\r");
    assert!(out.contains("Current settings:\r\n"));
    for var in VARIABLES.iter() {
        assert!(out.contains(&format!("{} = ", var.name())));
    }
    assert!(out.contains("dhcp_enable = 0\r\n"));
    assert!(out.contains("ip_netmask = 0.0.0.0\r\n"));
}

#[test]
fn test_set_unknown_variable() {
    let mut cli = enabled_session();
    let before = *cli.config();
    let out = run(&mut cli, b"set bogus=1\r");
    assert!(out.contains("ERR: Unknown variable name\r\n"));
    assert_eq!(*cli.config(), before);

    let out = run(&mut cli, b"set bogus\r");
    assert!(out.contains("ERR: Unknown variable name\r\n"));
}

#[test]
fn test_set_name_case_insensitive() {
    let mut cli = enabled_session();
    let out = run(&mut cli, b"SET IP_GATEWAY=10.0.0.1\r");
    assert!(out.contains("ip_gateway set to 10.0.0.1"));
    assert_eq!(cli.config().ip_gateway, [10, 0, 0, 1]);
}

#[test]
fn test_set_trims_spaces_after_equals() {
    let mut cli = enabled_session();
    run(&mut cli, b"set ip_netmask=   255.255.255.0\r");
    assert_eq!(cli.config().ip_netmask, [255, 255, 255, 0]);
}

#[test]
fn test_set_empty_value_assigns_zero() {
    let mut cli = enabled_session();
    cli.config_mut().gps_baud_rate = 4800;
    let out = run(&mut cli, b"set gps_baud_rate=\r");
    assert!(out.contains("gps_baud_rate set to 0"));
    assert_eq!(cli.config().gps_baud_rate, 0);
}

#[test]
fn test_set_bool() {
    let mut cli = enabled_session();
    let out = run(&mut cli, b"set dhcp_enable=7\r");
    assert!(out.contains("dhcp_enable set to 1"));
    assert_eq!(cli.config().dhcp_enable, 1);
}

#[test]
fn test_permissive_tolerates_garbage() {
    let mut cli = enabled_session();
    assert_eq!(cli.parse_mode(), ParseMode::Permissive);

    run(&mut cli, b"set gps_baud_rate=fast\r");
    assert_eq!(cli.config().gps_baud_rate, 0);

    run(&mut cli, b"set ip_addr=10.a.1.2\r");
    assert_eq!(cli.config().ip_addr, [10, 0, 1, 2]);
}

#[test]
fn test_strict_rejects_garbage() {
    let mut cli = enabled_session();
    cli.set_parse_mode(ParseMode::Strict);
    cli.config_mut().gps_baud_rate = 4800;

    let out = run(&mut cli, b"set gps_baud_rate=fast\r");
    assert!(out.contains("ERR: Invalid value\r\n"));
    assert_eq!(cli.config().gps_baud_rate, 4800);

    let out = run(&mut cli, b"set ip_addr=10.0.0\r");
    assert!(out.contains("ERR: Invalid value\r\n"));
    assert_eq!(cli.config().ip_addr, [0, 0, 0, 0]);

    let out = run(&mut cli, b"set gps_baud_rate=115200\r");
    assert!(out.contains("gps_baud_rate set to 115200"));
}

#[test]
fn test_set_is_dispatched_once() {
    let mut cli = enabled_session();
    cli.feed_bytes(b"set ip_addr=1.2.3.4");
    assert_eq!(cli.feed(b'\r'), Event::Dispatched(Command::Set));
}

#[test]
fn test_changes_are_not_persisted_by_set() {
    let mut cli = enabled_session();
    run(&mut cli, b"set gps_baud_rate=9600\r");
    assert!(cli.platform().persisted.is_empty());
}
