use assert_cmd::Command;
use predicates::prelude::*;

fn story() -> Command {
    let mut cmd = Command::cargo_bin("story").unwrap();
    cmd.current_dir(env!("CARGO_MANIFEST_DIR"));
    cmd
}

#[test]
fn plays_to_the_end() {
    story()
        .args(["scripts/mount_hua.toml", "--config", "scripts/session.toml"])
        .write_stdin("\n\n1\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tend its wounds"))
        .stdout(predicate::str::contains("Health:95 | Qi:20"))
        .stdout(predicate::str::contains("The End."));
}

#[test]
fn quits_on_q() {
    story()
        .arg("scripts/mount_hua.toml")
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The End.").not());
}

#[test]
fn waits_for_a_choice_on_the_last_page() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("loop.toml");
    std::fs::write(
        &script,
        r#"
        [[nodes]]
        text = "Start"

        [[nodes]]
        text = "Fork"
        [[nodes.options]]
        text = "Go back"
        next_page = 1
        "#,
    )
    .unwrap();

    story()
        .arg(&script)
        .write_stdin("\n\n1\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 Start").count(2))
        .stdout(predicate::str::contains("The End.").not());
}

#[test]
fn rejects_missing_script() {
    story()
        .arg("scripts/does_not_exist.toml")
        .assert()
        .failure();
}
