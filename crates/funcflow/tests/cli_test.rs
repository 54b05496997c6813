#![allow(deprecated)] // TODO: cargo_bin → cargo_bin_cmd! へ移行

use assert_cmd::Command;
use predicates::prelude::*;

/// CLIヘルプが正しく表示されることを確認
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("func").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("デプロイの形はfuncflowが整える"))
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("validate"));
}

/// バージョン表示が正しく動作することを確認
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("func").unwrap();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("funcflow"));
}

/// newコマンドのヘルプが正しく表示されることを確認
#[test]
fn test_new_help() {
    let mut cmd = Command::cargo_bin("func").unwrap();
    cmd.arg("new")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("<NAME>"))
        .stdout(predicate::str::contains("--memory"))
        .stdout(predicate::str::contains("--secrets"))
        .stdout(predicate::str::contains("--env-vars"))
        .stdout(predicate::str::contains("--trigger-bucket"))
        .stdout(predicate::str::contains("--snowflake"));
}

/// validateコマンドのヘルプが正しく表示されることを確認
#[test]
fn test_validate_help() {
    let mut cmd = Command::cargo_bin("func").unwrap();
    cmd.arg("validate")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("[DIR]"));
}

/// 不正なコマンドでエラーになることを確認
#[test]
fn test_invalid_command() {
    let mut cmd = Command::cargo_bin("func").unwrap();
    cmd.arg("invalid-command").assert().failure();
}

/// deploy.yamlのないディレクトリでvalidateを実行するとエラーになることを確認
#[test]
fn test_validate_without_project() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("func").unwrap();
    cmd.arg("validate")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("検証エラー"));
}
