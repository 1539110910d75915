use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn kindred() -> Command {
    Command::cargo_bin("kindred").unwrap()
}

fn tree_path(tmp: &TempDir) -> String {
    tmp.path().join("family.bin").to_string_lossy().into_owned()
}

#[test]
fn add_creates_the_file_and_reports_the_id() {
    let tmp = TempDir::new().unwrap();
    let path = tree_path(&tmp);

    kindred()
        .args(["--file", &path, "add", "Arthur", "--gender", "male"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Arthur\" added, with ID 1."));

    kindred()
        .args(["--file", &path, "add", "Beth", "--gender", "female"])
        .assert()
        .success()
        .stdout(predicate::str::contains("with ID 2."));
}

#[test]
fn list_shows_members_ascending_by_id() {
    let tmp = TempDir::new().unwrap();
    let path = tree_path(&tmp);
    for (name, gender) in [("Arthur", "male"), ("Beth", "female")] {
        kindred()
            .args(["--file", &path, "add", name, "--gender", gender])
            .assert()
            .success();
    }

    kindred()
        .args(["--file", &path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 ... Arthur").and(predicate::str::contains("2 ... Beth")));
}

#[test]
fn show_prints_the_member_card_with_parents() {
    let tmp = TempDir::new().unwrap();
    let path = tree_path(&tmp);
    kindred()
        .args(["--file", &path, "add", "Arthur", "--gender", "male"])
        .assert()
        .success();
    kindred()
        .args(["--file", &path, "add", "Beth", "--gender", "female"])
        .assert()
        .success();
    kindred()
        .args([
            "--file", &path, "add", "Cole", "--gender", "male", "--father", "1", "--mother", "2",
        ])
        .assert()
        .success();

    kindred()
        .args(["--file", &path, "show", "3"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Name: Cole")
                .and(predicate::str::contains("Father: Arthur (1)"))
                .and(predicate::str::contains("Mother: Beth (2)")),
        );

    kindred()
        .args(["--file", &path, "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Children:").and(predicate::str::contains("Cole (3)")));
}

#[test]
fn relation_names_siblings() {
    let tmp = TempDir::new().unwrap();
    let path = tree_path(&tmp);
    kindred()
        .args(["--file", &path, "add", "Arthur", "--gender", "male"])
        .assert()
        .success();
    kindred()
        .args(["--file", &path, "add", "Cole", "--gender", "male", "--father", "1"])
        .assert()
        .success();
    kindred()
        .args(["--file", &path, "add", "Dana", "--gender", "female", "--father", "1"])
        .assert()
        .success();

    kindred()
        .args(["--file", &path, "relation", "2", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dana is the half-sister of Cole."));
}

#[test]
fn find_reports_hits_and_misses() {
    let tmp = TempDir::new().unwrap();
    let path = tree_path(&tmp);
    kindred()
        .args(["--file", &path, "add", "Arthur", "--gender", "male"])
        .assert()
        .success();

    kindred()
        .args(["--file", &path, "find", "Arthur"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The ID of Arthur is 1."));
    kindred()
        .args(["--file", &path, "find", "Nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No member of the name \"Nobody\" was found."));
}

#[test]
fn removed_identity_is_reused_across_invocations() {
    let tmp = TempDir::new().unwrap();
    let path = tree_path(&tmp);
    for name in ["A", "B", "C"] {
        kindred()
            .args(["--file", &path, "add", name, "--gender", "male"])
            .assert()
            .success();
    }
    kindred()
        .args(["--file", &path, "remove", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("B has been removed."));

    // The file stores two members; reloading reassigns 1 and 2, so the
    // next add gets 3.
    kindred()
        .args(["--file", &path, "add", "D", "--gender", "female"])
        .assert()
        .success()
        .stdout(predicate::str::contains("with ID 3."));
}

#[test]
fn invalid_parent_gender_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tree_path(&tmp);
    kindred()
        .args(["--file", &path, "add", "Beth", "--gender", "female"])
        .assert()
        .success();

    kindred()
        .args(["--file", &path, "add", "Kid", "--gender", "male", "--father", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid parent"));
}

#[test]
fn missing_file_flag_is_an_error() {
    kindred()
        .args(["list"])
        .env_remove("KINDRED_FILE")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No tree file given"));
}

#[test]
fn json_list_output_is_parseable() {
    let tmp = TempDir::new().unwrap();
    let path = tree_path(&tmp);
    kindred()
        .args(["--file", &path, "add", "Arthur", "--gender", "male"])
        .assert()
        .success();

    let output = kindred()
        .args(["--file", &path, "--format", "json", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed[0]["name"], "Arthur");
    assert_eq!(parsed[0]["gender"], "male");
}

#[test]
fn unlink_confirms_only_after_the_save_landed() {
    let tmp = TempDir::new().unwrap();
    let path = tree_path(&tmp);
    kindred()
        .args(["--file", &path, "add", "Arthur", "--gender", "male"])
        .assert()
        .success();
    kindred()
        .args(["--file", &path, "add", "Cole", "--gender", "male", "--father", "1"])
        .assert()
        .success();

    kindred()
        .args(["--file", &path, "unlink", "2", "--father"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The father of Cole is no longer listed."));

    // The confirmation must reflect persisted state.
    kindred()
        .args(["--file", &path, "show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Father:").not());
}

#[test]
fn verbose_flag_logs_file_activity() {
    let tmp = TempDir::new().unwrap();
    let path = tree_path(&tmp);
    kindred()
        .args(["--file", &path, "-vv", "add", "Arthur", "--gender", "male"])
        .assert()
        .success()
        .stderr(predicate::str::contains("saved tree file"));

    kindred()
        .args(["--file", &path, "-vv", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded tree file"));
}

#[test]
fn shell_session_add_and_query() {
    let tmp = TempDir::new().unwrap();
    let path = tree_path(&tmp);

    kindred()
        .args(["shell"])
        .write_stdin(
            "add_member M 0 0 Arthur\n\
             add_member F 0 0 Beth\n\
             add_member M 1 2 Cole\n\
             get_relationship 3 1\n\
             store_to_file ".to_string() + &path + "\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Arthur is the father of Cole."));

    kindred()
        .args(["--file", &path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cole"));
}

#[test]
fn shell_confirms_before_discarding_changes() {
    kindred()
        .args(["shell"])
        .write_stdin("add_member M 0 0 Arthur\nexit\nn\nexit\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Are you sure you want to discard them?"));
}
