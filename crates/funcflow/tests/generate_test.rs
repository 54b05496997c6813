#![allow(deprecated)] // TODO: cargo_bin → cargo_bin_cmd! へ移行

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn func_cmd(work_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("func").unwrap();
    // 生成デフォルトファイルをカレントディレクトリから拾わないよう隔離する
    cmd.current_dir(work_dir);
    cmd.env_remove("FUNCFLOW_CONFIG_PATH");
    cmd
}

/// オプション未指定の生成でデフォルトが埋まることを確認
#[test]
fn test_new_with_defaults() {
    let work_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();

    func_cmd(work_dir.path())
        .arg("new")
        .arg("demo-func")
        .arg("--output")
        .arg(output_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("プロジェクトを生成しました"));

    let project_dir = output_dir.path().join("demo-func");
    assert!(project_dir.join("main.py").exists());
    assert!(project_dir.join("deploy.yaml").exists());
    assert!(project_dir.join("requirements.txt").exists());
    assert!(project_dir.join(".env").exists());

    // Snowflake無効時はヘルパーが残らない
    assert!(!project_dir.join("snowflake_utils.py").exists());

    let deploy = fs::read_to_string(project_dir.join("deploy.yaml")).unwrap();
    assert!(deploy.contains("DEV: &config"));
    assert!(deploy.contains("description: demo-func"));
    assert!(deploy.contains("memory: 256"));
    assert!(deploy.contains("timeout: 60"));
}

/// 環境変数とトリガーバケットが記述子と.envに反映されることを確認
#[test]
fn test_new_with_env_vars_and_trigger() {
    let work_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();

    func_cmd(work_dir.path())
        .arg("new")
        .arg("ingest-func")
        .arg("--description")
        .arg("Ingests daily exports")
        .arg("--memory")
        .arg("512")
        .arg("--env-vars")
        .arg("BUCKET=my-bucket-dev,OUTPUT_PATH=out")
        .arg("--trigger-bucket")
        .arg("ingest-bucket-dev")
        .arg("--output")
        .arg(output_dir.path())
        .assert()
        .success();

    let project_dir = output_dir.path().join("ingest-func");

    let deploy = fs::read_to_string(project_dir.join("deploy.yaml")).unwrap();
    assert!(deploy.contains("description: Ingests daily exports"));
    assert!(deploy.contains("memory: 512"));
    assert!(deploy.contains("BUCKET: my-bucket-dev"));
    assert!(deploy.contains("trigger-bucket: ingest-bucket-dev"));

    let env = fs::read_to_string(project_dir.join(".env")).unwrap();
    assert!(env.contains("BUCKET=my-bucket-dev\n"));
    assert!(env.contains("OUTPUT_PATH=out\n"));
}

/// 数値でないメモリ指定は生成全体を中断することを確認
#[test]
fn test_new_with_invalid_memory_fails() {
    let work_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();

    func_cmd(work_dir.path())
        .arg("new")
        .arg("demo-func")
        .arg("--memory")
        .arg("lots")
        .arg("--output")
        .arg(output_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("数値ではありません"));
}

/// 既存ディレクトリへの生成は拒否されることを確認
#[test]
fn test_new_refuses_existing_target() {
    let work_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(output_dir.path().join("demo-func")).unwrap();

    func_cmd(work_dir.path())
        .arg("new")
        .arg("demo-func")
        .arg("--output")
        .arg(output_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("既に存在します"));
}

/// カレントディレクトリの生成デフォルトファイルが使われることを確認
#[test]
fn test_new_reads_defaults_file() {
    let work_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();

    fs::write(
        work_dir.path().join("funcflow.yaml"),
        "memory: \"512\"\ntimeout: \"120\"\n",
    )
    .unwrap();

    func_cmd(work_dir.path())
        .arg("new")
        .arg("demo-func")
        .arg("--output")
        .arg(output_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("生成デフォルト"));

    let deploy =
        fs::read_to_string(output_dir.path().join("demo-func").join("deploy.yaml")).unwrap();
    assert!(deploy.contains("memory: 512"));
    assert!(deploy.contains("timeout: 120"));
}

/// CLIフラグが生成デフォルトより優先されることを確認
#[test]
fn test_cli_flags_override_defaults_file() {
    let work_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();

    fs::write(work_dir.path().join("funcflow.yaml"), "memory: \"512\"\n").unwrap();

    func_cmd(work_dir.path())
        .arg("new")
        .arg("demo-func")
        .arg("--memory")
        .arg("1024")
        .arg("--output")
        .arg(output_dir.path())
        .assert()
        .success();

    let deploy =
        fs::read_to_string(output_dir.path().join("demo-func").join("deploy.yaml")).unwrap();
    assert!(deploy.contains("memory: 1024"));
}

/// 生成直後のプロジェクトはvalidateを通ることを確認
#[test]
fn test_generated_project_validates() {
    let work_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();

    func_cmd(work_dir.path())
        .arg("new")
        .arg("demo-func")
        .arg("--output")
        .arg(output_dir.path())
        .assert()
        .success();

    func_cmd(work_dir.path())
        .arg("validate")
        .arg(output_dir.path().join("demo-func"))
        .assert()
        .success()
        .stdout(predicate::str::contains("deploy.yamlは正常です"));
}
