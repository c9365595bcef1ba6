use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn notifygen() -> Command {
    let mut cmd = Command::cargo_bin("notifygen").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("mix.exs"),
        "defmodule MyApp.MixProject do\n  def project do\n    [app: :my_app]\n  end\nend\n",
    )
    .unwrap();
    dir
}

#[test]
fn help_lists_options() {
    notifygen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--context-app"));
}

#[test]
fn generates_notifier_and_test() {
    let dir = project();
    notifygen()
        .current_dir(dir.path())
        .args(["Accounts", "User", "welcome_user", "reset_password"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "* creating lib/my_app/accounts/user_notifier.ex",
        ))
        .stdout(predicate::str::contains("use Swoosh.Mailer, otp_app: :my_app"));

    let notifier = fs::read_to_string(dir.path().join("lib/my_app/accounts/user_notifier.ex")).unwrap();
    assert!(notifier.contains("def deliver_reset_password(%{name: name, email: email}) do"));
    assert!(
        dir.path()
            .join("test/my_app/accounts/user_notifier_test.exs")
            .is_file()
    );
}

#[test]
fn prefix_and_no_context_are_accepted() {
    let dir = project();
    notifygen()
        .current_dir(dir.path())
        .args(["--no-context", "Accounts", "User", "--prefix", "admin"])
        .assert()
        .success();

    assert!(
        dir.path()
            .join("admin/lib/my_app/accounts/user_notifier.ex")
            .is_file()
    );
}

#[test]
fn invalid_notifier_prints_usage() {
    let dir = project();
    notifygen()
        .current_dir(dir.path())
        .args(["Accounts", "user"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\"user\""))
        .stderr(predicate::str::contains("Options:"));

    assert!(!dir.path().join("lib").exists());
}

#[test]
fn umbrella_root_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("mix.exs"),
        "def project do\n  [apps_path: \"apps\"]\nend\n",
    )
    .unwrap();

    notifygen()
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Umbrella"));
}
