use assert_cmd::Command;

/// Helper to get a Command for the passguard binary.
#[allow(deprecated)]
fn passguard_cmd() -> Command {
    Command::cargo_bin("passguard").unwrap()
}

#[test]
fn help_works() {
    passguard_cmd().arg("--help").assert().success();
}

#[test]
fn subcommand_help_works() {
    for sub in ["validate", "check", "md", "annotations", "explain", "tally"] {
        passguard_cmd().args([sub, "--help"]).assert().success();
    }
}
