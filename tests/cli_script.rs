//! Script-mode sessions driven through the real binary. Each session gets
//! its own data root so tests never share saved state.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn session(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("grocery_core_cli").expect("binary");
    cmd.env("GROCERY_CORE_HOME", home.path())
        .env("GROCERY_CORE_CLI_SCRIPT", "1")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn add_edit_and_total_in_one_session() {
    let home = TempDir::new().unwrap();
    session(&home)
        .write_stdin("add apples\nqty Produce apples 3\nprice Produce apples 2.50\ntotal\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Apples"))
        .stdout(predicate::str::contains("Estimated total: $7.50"));
}

#[test]
fn saved_state_survives_across_sessions() {
    let home = TempDir::new().unwrap();
    session(&home)
        .write_stdin("add apples\nadd milk\nexit\n")
        .assert()
        .success();

    session(&home)
        .write_stdin("list\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Apples"))
        .stdout(predicate::str::contains("Milk"))
        .stdout(predicate::str::contains("Dairy & Eggs"));
}

#[test]
fn import_replaces_the_saved_list() {
    let home = TempDir::new().unwrap();
    session(&home)
        .write_stdin("add chips\nexit\n")
        .assert()
        .success();

    session(&home)
        .write_stdin("import pr-a%7C%20%7C2%7C3.50%7C1\ntotal\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 item(s)"))
        .stdout(predicate::str::contains("Estimated total: $7.00"));

    session(&home)
        .write_stdin("list\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Apples"))
        .stdout(predicate::str::contains("Chips").not());
}

#[test]
fn failed_import_keeps_the_saved_list() {
    let home = TempDir::new().unwrap();
    session(&home)
        .write_stdin("add chips\nexit\n")
        .assert()
        .success();

    session(&home)
        .write_stdin("import %FF%FE\nlist\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The current list is unchanged."))
        .stdout(predicate::str::contains("Chips"));
}

#[test]
fn share_link_argument_hydrates_the_session() {
    let home = TempDir::new().unwrap();
    session(&home)
        .arg("https://example.org/grocery?list=pr-b%7C%20%7C6%7C0%7C0")
        .write_stdin("list\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bananas"));
}

#[test]
fn empty_list_share_prints_a_nudge() {
    let home = TempDir::new().unwrap();
    session(&home)
        .write_stdin("share\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Your list is empty. Add some items to share!",
        ));
}

#[test]
fn share_emits_a_link_with_the_configured_base() {
    let home = TempDir::new().unwrap();
    session(&home)
        .write_stdin("config set share_base_url https://lists.example.org\nadd apples\nshare\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://lists.example.org?list="));
}

#[test]
fn export_prints_a_dated_snapshot() {
    let home = TempDir::new().unwrap();
    session(&home)
        .write_stdin("add apples\nprice Produce apples 2.50\nexport\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Grocery List - "))
        .stdout(predicate::str::contains("Done"))
        .stdout(predicate::str::contains("Total: $2.50"));
}

#[test]
fn unknown_command_suggests_the_closest_match() {
    let home = TempDir::new().unwrap();
    session(&home)
        .write_stdin("lst\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command `lst`"))
        .stdout(predicate::str::contains("Suggestion: `list`?"));
}

#[test]
fn duplicate_add_warns_without_growing_the_list() {
    let home = TempDir::new().unwrap();
    session(&home)
        .write_stdin("add apples\nadd APPLES\nlist\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("already on the list"));
}
