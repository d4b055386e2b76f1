//! Integration tests for `ecw build`
//!
//! The translated command is observed through the echo line, so the
//! assertions hold whether or not CMake can actually build anything in
//! the test directory.

mod common;

use common::TestProject;
use std::process::Command;

/// Helper to run ecw build inside a test project
fn run_build(project: &TestProject, args: &[&str]) -> std::process::Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ecw"));
    cmd.current_dir(project.path());
    cmd.arg("build");
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute ecw build")
}

/// Extract the `> cmake ...` echo line from captured stdout
fn echo_line(output: &std::process::Output) -> Option<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .find(|line| line.starts_with("> "))
        .map(ToString::to_string)
}

#[test]
fn test_named_target_is_selected() {
    let project = TestProject::new();
    project.create_dir("build");

    let output = run_build(&project, &["mytarget", "-B", "build"]);

    let echo = echo_line(&output).expect("no command was echoed");
    assert!(echo.starts_with("> cmake --build "), "got: {echo}");
    assert!(echo.ends_with("-t mytarget"), "got: {echo}");
}

#[test]
fn test_default_target_omits_selection() {
    let project = TestProject::new();
    project.create_dir("build");

    let output = run_build(&project, &["-B", "build"]);

    let echo = echo_line(&output).expect("no command was echoed");
    assert!(echo.starts_with("> cmake --build "), "got: {echo}");
    assert!(!echo.contains(" -t "), "got: {echo}");
}

#[test]
fn test_explicit_all_target_omits_selection() {
    let project = TestProject::new();
    project.create_dir("build");

    let output = run_build(&project, &["all", "-B", "build"]);

    let echo = echo_line(&output).expect("no command was echoed");
    assert!(!echo.contains(" -t "), "got: {echo}");
}

#[test]
fn test_unconfigured_build_root_fails() {
    let project = TestProject::new();
    project.create_dir("build");

    // An empty build root has no generated build system; whether CMake
    // rejects it or is absent entirely, the invocation must fail.
    let output = run_build(&project, &["-B", "build"]);

    assert!(!output.status.success());
}
