//! .envファイルへの追記
//!
//! 生成された関数フォルダの.envへNAME=VALUE行を追記します。
//! 呼び出しごとに追記モードで開き直します。生成処理は単一プロセスの
//! 逐次実行なので、ステップ間で書き込みが交錯することはありません。

use crate::error::{FuncError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// 環境変数ファイルのファイル名
pub const ENV_FILE: &str = ".env";

/// 生成フォルダの.envへのハンドル
pub struct EnvFile {
    path: PathBuf,
}

impl EnvFile {
    pub fn new(project_dir: &Path) -> Self {
        Self {
            path: project_dir.join(ENV_FILE),
        }
    }

    /// NAME=VALUE行を1行追記する（ファイルがなければ作成）
    pub fn append(&self, name: &str, value: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| FuncError::IoError {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        writeln!(file, "{name}={value}").map_err(|e| FuncError::IoError {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        Ok(())
    }

    /// 指定した名前が現時点のファイル内容に現れるか
    ///
    /// 部分一致で判定します（Snowflakeステップの重複追記ガード）。
    pub fn contains(&self, name: &str) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }

        let text = std::fs::read_to_string(&self.path).map_err(|e| FuncError::IoError {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        Ok(text.contains(name))
    }
}
