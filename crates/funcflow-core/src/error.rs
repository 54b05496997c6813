use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FuncError {
    #[error("YAMLパースエラー: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("ファイル読み込みエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("IO エラー: {path}\n理由: {message}")]
    IoError { path: PathBuf, message: String },

    #[error("メモリ指定が数値ではありません: {0}")]
    InvalidMemory(String),

    #[error("タイムアウト指定が数値ではありません: {0}")]
    InvalidTimeout(String),

    #[error(
        "シークレット指定の形式が不正です: {0}\nヒント: NAME=id:version または NAME=projects/<project>/secrets/<name>/versions/<version> をカンマ区切りで指定してください"
    )]
    MalformedSecretRef(String),

    #[error("環境変数指定の形式が不正です: {0}\nヒント: NAME=VALUE をカンマ区切りで指定してください")]
    MalformedEnvVar(String),

    #[error("シークレットの解決に失敗: {secret}\n理由: {message}")]
    SecretResolution { secret: String, message: String },

    #[error("テンプレート展開エラー: {file}\n理由: {message}")]
    TemplateError { file: String, message: String },

    #[error("出力先が既に存在します: {0}")]
    TargetExists(PathBuf),
}

pub type Result<T> = std::result::Result<T, FuncError>;
