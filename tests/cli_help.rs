mod common;

use common::env::TestEnv;

#[test]
fn help_lists_all_commands() {
    let env = TestEnv::new();

    let result = env.run(&["--help"]);
    assert!(result.success);

    let output = result.combined_output();
    assert!(output.contains("render"));
    assert!(output.contains("check"));
    assert!(output.contains("demo"));
}

#[test]
fn render_help_documents_the_location_flag() {
    let env = TestEnv::new();

    let result = env.run(&["render", "--help"]);
    assert!(result.success);
    assert!(result.combined_output().contains("--location"));
}

#[test]
fn unknown_command_fails() {
    let env = TestEnv::new();

    let result = env.run(&["frobnicate"]);
    assert!(!result.success);
}
