use std::process::Command;

fn bridge() -> Command {
    Command::new(env!("CARGO_BIN_EXE_kanata-sketchybar"))
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    let out = bridge().output().expect("run binary");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage:"), "stderr was {:?}", stderr);
    assert!(stderr.contains("<host> <port>"));
    assert!(out.stdout.is_empty());
}

#[test]
fn host_without_port_fails() {
    let out = bridge().arg("localhost").output().expect("run binary");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage:"));
}

#[test]
fn invalid_port_fails() {
    let out = bridge()
        .args(["localhost", "notaport"])
        .output()
        .expect("run binary");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage:"));
}
