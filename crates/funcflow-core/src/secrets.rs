//! シークレット参照
//!
//! `id:version` 形式、または
//! `projects/<project>/secrets/<name>/versions/<version>` 形式の参照を
//! 受け付けます。解決した平文は.envにのみ書き込み、記述子には参照を残します。

use crate::error::{FuncError, Result};

/// 解決前のシークレット参照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretRef {
    /// Secret Manager上のシークレットID
    pub id: String,
    /// バージョン指定
    pub version: String,
}

impl SecretRef {
    /// 参照文字列をパースする
    ///
    /// 受け付ける形式は2種類:
    /// - `myCredentials:latest` （コロン区切り）
    /// - `projects/<project>/secrets/<name>/versions/<version>`
    ///   （6セグメントのパス。先頭4セグメントがID、6番目がバージョン）
    pub fn parse(reference: &str) -> Result<Self> {
        if let Some((id, version)) = reference.split_once(':') {
            return Ok(Self {
                id: id.to_string(),
                version: version.to_string(),
            });
        }

        let segments: Vec<&str> = reference.split('/').collect();
        if segments.len() < 6 {
            return Err(FuncError::MalformedSecretRef(reference.to_string()));
        }

        Ok(Self {
            id: segments[..4].join("/"),
            version: segments[5].to_string(),
        })
    }
}

/// シークレット解決の抽象
///
/// 本番実装はfuncflow-gcpのgcloudラッパー。テストではインメモリ実装を使います。
/// 解決の失敗はリトライせずそのまま伝播します。
pub trait SecretAccessor {
    /// シークレットIDとバージョンから平文を取得する
    fn resolve(&self, secret_id: &str, version: &str) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_colon_form() {
        let secret_ref = SecretRef::parse("myCredentials:latest").unwrap();
        assert_eq!(secret_ref.id, "myCredentials");
        assert_eq!(secret_ref.version, "latest");
    }

    #[test]
    fn test_parse_path_form() {
        let secret_ref =
            SecretRef::parse("projects/demo-project/secrets/myCredentials/versions/3").unwrap();
        assert_eq!(secret_ref.id, "projects/demo-project/secrets/myCredentials");
        assert_eq!(secret_ref.version, "3");
    }

    #[test]
    fn test_parse_short_path_is_rejected() {
        let result = SecretRef::parse("projects/demo-project/secrets/myCredentials");
        assert!(matches!(result, Err(FuncError::MalformedSecretRef(_))));
    }

    #[test]
    fn test_parse_colon_takes_precedence() {
        // コロンを含む場合はパス形式とは解釈しない
        let secret_ref = SecretRef::parse("a/b/c:2").unwrap();
        assert_eq!(secret_ref.id, "a/b/c");
        assert_eq!(secret_ref.version, "2");
    }
}
