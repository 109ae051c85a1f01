use super::*;

fn flags(gdb: bool, remote: bool) -> LaunchFlags {
    LaunchFlags {
        gdb,
        remote,
        target_args: Vec::new(),
    }
}

fn with_script() -> StartOptions {
    StartOptions {
        gdbscript: Some("break main\ncontinue\n".to_string()),
    }
}

#[test]
fn debug_wins_when_flag_and_script_are_both_present() {
    assert_eq!(Mode::resolve(&flags(true, false), &with_script()), Mode::Debug);
    // Debug takes precedence over remote
    assert_eq!(Mode::resolve(&flags(true, true), &with_script()), Mode::Debug);
}

#[test]
fn gdb_flag_without_a_script_does_not_select_debug() {
    assert_eq!(
        Mode::resolve(&flags(true, false), &StartOptions::default()),
        Mode::Local
    );
    assert_eq!(
        Mode::resolve(&flags(true, true), &StartOptions::default()),
        Mode::Remote
    );
}

#[test]
fn remote_flag_selects_remote() {
    assert_eq!(
        Mode::resolve(&flags(false, true), &StartOptions::default()),
        Mode::Remote
    );
    assert_eq!(Mode::resolve(&flags(false, true), &with_script()), Mode::Remote);
}

#[test]
fn no_flags_selects_local() {
    assert_eq!(
        Mode::resolve(&flags(false, false), &StartOptions::default()),
        Mode::Local
    );
    // A script alone is not enough for debug mode
    assert_eq!(Mode::resolve(&flags(false, false), &with_script()), Mode::Local);
}

#[test]
fn remote_endpoint_reads_fixed_argument_positions() {
    let flags = LaunchFlags {
        gdb: false,
        remote: true,
        target_args: vec!["pwn.example.org".into(), "31337".into(), "extra".into()],
    };
    let (host, port) = remote_endpoint(&flags).unwrap();
    assert_eq!(host, "pwn.example.org");
    assert_eq!(port, 31337);
}

#[test]
fn remote_endpoint_requires_host_and_port() {
    let err = remote_endpoint(&flags(false, true)).unwrap_err();
    assert!(err.to_string().contains("HOST"));

    let flags = LaunchFlags {
        gdb: false,
        remote: true,
        target_args: vec!["pwn.example.org".into()],
    };
    let err = remote_endpoint(&flags).unwrap_err();
    assert!(err.to_string().contains("PORT"));
}

#[test]
fn remote_endpoint_rejects_a_bad_port() {
    let flags = LaunchFlags {
        gdb: false,
        remote: true,
        target_args: vec!["localhost".into(), "not-a-port".into()],
    };
    let err = remote_endpoint(&flags).unwrap_err();
    assert!(err.to_string().contains("Invalid port"));
}
