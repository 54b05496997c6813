use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("設定ディレクトリが見つかりません")]
    ConfigDirNotFound,

    #[error(
        "生成デフォルトファイルが見つかりません。以下の場所を確認してください:\n\
        - カレントディレクトリ: funcflow.yaml, .funcflow.yaml\n\
        - ./.funcflow/ ディレクトリ\n\
        - ~/.config/funcflow/funcflow.yaml\n\
        または FUNCFLOW_CONFIG_PATH 環境変数で直接指定できます"
    )]
    DefaultsFileNotFound,

    #[error("生成デフォルトの形式が不正です: {0}")]
    InvalidDefaults(#[from] serde_yaml::Error),

    #[error("IO エラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
