//! 生成オプション
//!
//! テンプレート変数に相当する値を明示的な構造体として各ステップに受け渡します。
//! 未指定は`None`で表現し、プレースホルダ文字列との等値比較は行いません。

use serde::{Deserialize, Serialize};

/// メモリ未指定時のデフォルト (MB)
pub const DEFAULT_MEMORY_MB: u32 = 256;

/// タイムアウト未指定時のデフォルト (秒)
pub const DEFAULT_TIMEOUT_SECS: u32 = 60;

/// 1関数分の生成オプション
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// 関数名。生成フォルダ名とデプロイ時の識別子
    pub name: String,
    /// 関数の説明。未指定の場合は関数名を使用
    pub description: Option<String>,
    /// メモリ (MB)。数値文字列。未指定は256
    pub memory: Option<String>,
    /// タイムアウト (秒)。数値文字列。未指定は60
    pub timeout: Option<String>,
    /// シークレット指定（例: "MY_CREDENTIALS=myCredentials:latest" をカンマ区切り）
    pub secrets: Option<String>,
    /// 環境変数指定（例: "BUCKET=my-bucket-dev,OUTPUT_PATH=out"）
    pub env_vars: Option<String>,
    /// トリガーバケット。指定するとHTTPトリガーからストレージイベントトリガーに切り替わる
    pub trigger_bucket: Option<String>,
    /// Snowflake統合を有効にする
    pub snowflake: bool,
}

impl GenerateOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// 肯定値の判定（Y / YES、大文字小文字を区別しない）
pub fn is_affirmative(value: &str) -> bool {
    matches!(value.trim().to_ascii_uppercase().as_str(), "Y" | "YES")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("y"));
        assert!(is_affirmative("YES"));
        assert!(is_affirmative("Yes"));
        assert!(is_affirmative("yes"));
        assert!(!is_affirmative("N"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("true"));
        assert!(!is_affirmative(""));
    }

    #[test]
    fn test_new_defaults() {
        let options = GenerateOptions::new("my-func");
        assert_eq!(options.name, "my-func");
        assert!(options.description.is_none());
        assert!(options.memory.is_none());
        assert!(!options.snowflake);
    }
}
