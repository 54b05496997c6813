//! デプロイ記述子 (deploy.yaml)
//!
//! 生成された関数フォルダのdeploy.yamlを読み書きします。
//! 書き出し時にDEVブロックへ `&config` アンカーを付与し、
//! 環境別の記述子（deploy.prd.yamlなど）がエイリアスで参照できるようにします。

use crate::error::{FuncError, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;
use std::fs;
use std::path::Path;

/// デプロイ記述子のファイル名
pub const DEPLOY_FILE: &str = "deploy.yaml";

/// DEVブロックに付与するアンカー名
const CONFIG_ANCHOR: &str = "&config";

/// デプロイ記述子全体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Descriptor {
    #[serde(rename = "DEV")]
    pub dev: DeployTarget,
}

/// 1ターゲット分のデプロイ設定
///
/// フィールドは宣言順のまま書き出されます。未設定のフィールドは省略されます。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeployTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,

    #[serde(rename = "entry-point", skip_serializing_if = "Option::is_none")]
    pub entry_point: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// メモリ (MB)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<u32>,

    /// タイムアウト (秒)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,

    /// 環境変数名 → シークレット参照（平文は記述子には書かない）
    #[serde(
        rename = "secret-environment-variables",
        skip_serializing_if = "Option::is_none"
    )]
    pub secret_environment_variables: Option<Mapping>,

    #[serde(
        rename = "environment-variables",
        skip_serializing_if = "Option::is_none"
    )]
    pub environment_variables: Option<Mapping>,

    /// 指定するとストレージイベントトリガーになる
    #[serde(rename = "trigger-bucket", skip_serializing_if = "Option::is_none")]
    pub trigger_bucket: Option<String>,

    #[serde(rename = "vpc-connector", skip_serializing_if = "Option::is_none")]
    pub vpc_connector: Option<String>,

    #[serde(rename = "egress-settings", skip_serializing_if = "Option::is_none")]
    pub egress_settings: Option<String>,
}

/// プロジェクトディレクトリからdeploy.yamlを読み込む
pub fn load(project_dir: &Path) -> Result<Descriptor> {
    let path = project_dir.join(DEPLOY_FILE);
    let text = fs::read_to_string(&path).map_err(|e| FuncError::IoError {
        path: path.clone(),
        message: e.to_string(),
    })?;

    Ok(serde_yaml::from_str(&text)?)
}

/// deploy.yamlを書き戻す
///
/// シリアライズ後、最初の `DEV:` ラベルをアンカー付きに書き換えます。
/// 構造を解釈しないテキスト置換であることに注意（最初の1箇所に限定）。
pub fn save(project_dir: &Path, descriptor: &Descriptor) -> Result<()> {
    let path = project_dir.join(DEPLOY_FILE);
    let text = serde_yaml::to_string(descriptor)?;
    let text = text.replacen("DEV:", &format!("DEV: {CONFIG_ANCHOR}"), 1);

    fs::write(&path, text).map_err(|e| FuncError::IoError {
        path,
        message: e.to_string(),
    })
}
