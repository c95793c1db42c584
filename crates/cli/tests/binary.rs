//! End-to-end checks of the `coord2-cli` binary: exit status and exact stdout.

use std::process::{Command, Output};

fn coord2_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_coord2-cli"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn coord2-cli")
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).unwrap()
}

#[test]
fn no_arguments_is_a_silent_success() {
    let out = coord2_cli(&[]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert!(out.stderr.is_empty());
}

#[test]
fn vertical_slope_prints_diagnostic_then_zero() {
    let out = coord2_cli(&["slope", "0,0", "0,5"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "Undefined slope for vertical line.\n0\n");
}

#[test]
fn collinear_radius_prints_diagnostic_then_zero() {
    let out = coord2_cli(&["radius", "0,0", "1,1", "2,2"]);
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        "Area of the triangle is 0. Unable to find the radius.\n0\n"
    );
}

#[test]
fn silent_diagnostics_print_only_the_sentinel() {
    let out = coord2_cli(&["--diagnostics", "silent", "slope", "0,0", "0,5"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "0\n");
}

#[test]
fn strict_mode_fails_without_stdout() {
    let out = coord2_cli(&["--strict", "slope", "0,0", "0,5"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let err = String::from_utf8(out.stderr).unwrap();
    assert!(err.contains("Undefined slope for vertical line."), "{err}");
}

#[test]
fn distance_prints_bare_value() {
    let out = coord2_cli(&["distance", "(0, 0)", "(3, 4)"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "5\n");
}

#[test]
fn negative_sqrt_input_reaches_nan_path() {
    let out = coord2_cli(&["sqrt", "-4"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.starts_with("exact: NaN\nfast: NaN\n"), "{text}");
}
