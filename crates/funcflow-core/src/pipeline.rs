//! フィールド更新パイプライン
//!
//! 生成直後のデプロイ記述子に7段階の解決を固定順で適用します。
//! 各ステップは決定的な1パスで、リトライもロールバックも行いません。
//! 最初のエラーで生成全体が中断します。

use crate::descriptor::{self, Descriptor};
use crate::envfile::EnvFile;
use crate::error::{FuncError, Result};
use crate::options::{DEFAULT_MEMORY_MB, DEFAULT_TIMEOUT_SECS, GenerateOptions};
use crate::secrets::{SecretAccessor, SecretRef};
use crate::snowflake;
use serde_yaml::Mapping;
use std::path::Path;
use tracing::{debug, info};

/// 記述子を読み込み、全ステップを適用して書き戻す
pub fn run(
    project_dir: &Path,
    options: &GenerateOptions,
    accessor: &dyn SecretAccessor,
) -> Result<()> {
    let mut data = descriptor::load(project_dir)?;

    update_description(&mut data, options);
    update_memory(&mut data, options)?;
    update_timeout(&mut data, options)?;
    update_secrets(&mut data, options, project_dir, accessor)?;
    update_env_vars(&mut data, options, project_dir)?;
    update_trigger_bucket(&mut data, options);
    snowflake::update_snowflake(&mut data, options, project_dir, accessor)?;

    descriptor::save(project_dir, &data)
}

/// 説明。未指定なら関数名を使う
fn update_description(data: &mut Descriptor, options: &GenerateOptions) {
    data.dev.description = Some(
        options
            .description
            .clone()
            .unwrap_or_else(|| options.name.clone()),
    );
}

/// メモリ (MB)。未指定は256、数値以外は致命的エラー
fn update_memory(data: &mut Descriptor, options: &GenerateOptions) -> Result<()> {
    data.dev.memory = Some(match &options.memory {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| FuncError::InvalidMemory(value.clone()))?,
        None => DEFAULT_MEMORY_MB,
    });

    Ok(())
}

/// タイムアウト (秒)。未指定は60、数値以外は致命的エラー
fn update_timeout(data: &mut Descriptor, options: &GenerateOptions) -> Result<()> {
    data.dev.timeout = Some(match &options.timeout {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| FuncError::InvalidTimeout(value.clone()))?,
        None => DEFAULT_TIMEOUT_SECS,
    });

    Ok(())
}

/// シークレット。参照を記述子に、解決した平文を.envに書き込む
fn update_secrets(
    data: &mut Descriptor,
    options: &GenerateOptions,
    project_dir: &Path,
    accessor: &dyn SecretAccessor,
) -> Result<()> {
    let Some(entries) = &options.secrets else {
        return Ok(());
    };

    info!("Resolving secrets");
    let env_file = EnvFile::new(project_dir);
    let mut resolved = Mapping::new();

    for entry in entries.split(',') {
        // 値側に'='が含まれても、分割は最初の1箇所のみ
        let (name, reference) = entry
            .split_once('=')
            .ok_or_else(|| FuncError::MalformedSecretRef(entry.to_string()))?;

        let secret_ref = SecretRef::parse(reference)?;
        let value = accessor.resolve(&secret_ref.id, &secret_ref.version)?;

        env_file.append(name, &value)?;
        resolved.insert(name.into(), reference.into());
        debug!(name = %name, "Secret resolved");
    }

    data.dev.secret_environment_variables = Some(resolved);

    Ok(())
}

/// 環境変数。NAME=VALUEを.envと記述子の両方に書き込む
fn update_env_vars(
    data: &mut Descriptor,
    options: &GenerateOptions,
    project_dir: &Path,
) -> Result<()> {
    let Some(entries) = &options.env_vars else {
        return Ok(());
    };

    info!("Updating environment variables");
    let env_file = EnvFile::new(project_dir);
    let mut vars = Mapping::new();

    for entry in entries.split(',') {
        let (name, value) = entry
            .split_once('=')
            .ok_or_else(|| FuncError::MalformedEnvVar(entry.to_string()))?;
        let name = name.trim();
        let value = value.trim();

        env_file.append(name, value)?;
        vars.insert(name.into(), value.into());
    }

    data.dev.environment_variables = Some(vars);

    Ok(())
}

/// トリガーバケット。指定時はストレージイベントトリガーに切り替える
fn update_trigger_bucket(data: &mut Descriptor, options: &GenerateOptions) {
    if let Some(bucket) = &options.trigger_bucket {
        info!(bucket = %bucket, "Updating trigger bucket");
        data.dev.trigger_bucket = Some(bucket.clone());
    }
}
