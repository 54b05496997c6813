pub mod error;

pub use error::*;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 生成デフォルト（funcflow.yaml）
///
/// CLIフラグで指定しなかった項目にこのファイルの値が使われます。
/// 全項目が省略可能です。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct GenerateDefaults {
    pub description: Option<String>,
    pub memory: Option<String>,
    pub timeout: Option<String>,
    pub secrets: Option<String>,
    pub env_vars: Option<String>,
    pub trigger_bucket: Option<String>,
    /// Y/YESで有効（大文字小文字は区別しない）
    pub snowflake: Option<String>,
}

/// funcflowの設定ディレクトリを取得
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or(ConfigError::ConfigDirNotFound)?
        .join("funcflow");

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
    }

    Ok(config_dir)
}

/// 生成デフォルトファイルを探す
///
/// 以下の優先順位で検索:
/// 1. 環境変数 FUNCFLOW_CONFIG_PATH (直接パス指定)
/// 2. カレントディレクトリ: funcflow.yaml, .funcflow.yaml
/// 3. ./.funcflow/ ディレクトリ内: 同様の順序
/// 4. ~/.config/funcflow/funcflow.yaml (グローバル設定)
pub fn find_defaults_file() -> Result<PathBuf> {
    // 1. 環境変数で直接指定
    if let Ok(config_path) = std::env::var("FUNCFLOW_CONFIG_PATH") {
        let path = PathBuf::from(config_path);
        if path.exists() {
            return Ok(path);
        }
    }

    let current_dir = std::env::current_dir()?;
    let candidates = ["funcflow.yaml", ".funcflow.yaml"];

    // 2. カレントディレクトリで検索
    for filename in &candidates {
        let path = current_dir.join(filename);
        if path.exists() {
            return Ok(path);
        }
    }

    // 3. ./.funcflow/ ディレクトリで検索
    let funcflow_dir = current_dir.join(".funcflow");
    if funcflow_dir.is_dir() {
        for filename in &candidates {
            let path = funcflow_dir.join(filename);
            if path.exists() {
                return Ok(path);
            }
        }
    }

    // 4. グローバル設定ファイル (~/.config/funcflow/funcflow.yaml)
    if let Some(config_dir) = dirs::config_dir() {
        let global_config = config_dir.join("funcflow").join("funcflow.yaml");
        if global_config.exists() {
            return Ok(global_config);
        }
    }

    Err(ConfigError::DefaultsFileNotFound)
}

/// 生成デフォルトファイルを読み込む
pub fn load_defaults(path: &Path) -> Result<GenerateDefaults> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&text)?)
}
