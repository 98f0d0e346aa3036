use assert_cmd::Command;

#[test]
fn cli_help_runs() {
    let mut cmd = Command::cargo_bin("medkb-assistant").expect("binary exists");
    cmd.arg("--help").assert().success();
}

#[test]
fn ner_subcommand_runs_offline() {
    let mut cmd = Command::cargo_bin("medkb-assistant").expect("binary exists");
    cmd.args(["ner", "Behcet presents with uveitis and genital ulcers."])
        .assert()
        .success();
}
