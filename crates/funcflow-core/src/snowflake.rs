//! Snowflake統合
//!
//! 有効時はVPCコネクタ・ウェアハウス環境変数・認証シークレットを
//! 記述子と.envに反映し、requirements.txtに依存を追加します。
//! 無効時は生成フォルダからクエリヘルパーを取り除きます。

use crate::descriptor::Descriptor;
use crate::envfile::EnvFile;
use crate::error::{FuncError, Result};
use crate::options::GenerateOptions;
use crate::secrets::SecretAccessor;
use serde_yaml::Mapping;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// クエリヘルパーのファイル名
pub const HELPER_FILE: &str = "snowflake_utils.py";

/// 依存マニフェストのファイル名
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// requirements.txtに固定するコネクタのバージョン
const CONNECTOR_REQUIREMENT: &str = "snowflake-connector-python==3.1.0";

/// Snowflake接続用のVPCコネクタ名とegress設定
const VPC_CONNECTOR: &str = "vpc-static-ip";
const EGRESS_SETTINGS: &str = "all";

/// DEVターゲットのウェアハウスとデータベース
const WAREHOUSE: &str = "DEV_WH";
const DATABASE: &str = "DEV_DB";

/// 認証情報シークレット（組織共通、バージョン固定）
pub(crate) const CREDENTIALS_SECRET_ID: &str =
    "projects/funcflow-shared/secrets/snowflakeCredentials";
pub(crate) const CREDENTIALS_SECRET_VERSION: &str = "1";

/// .envと記述子で使うキー名
const CREDENTIALS_VAR: &str = "SNOWFLAKE_CREDENTIALS";
const WAREHOUSE_VAR: &str = "SNOWFLAKE_WAREHOUSE";
const DATABASE_VAR: &str = "SNOWFLAKE_DATABASE";

/// Snowflake統合ステップ
///
/// 無効時はヘルパーファイルの削除のみを行います（記述子には触れない）。
pub fn update_snowflake(
    data: &mut Descriptor,
    options: &GenerateOptions,
    project_dir: &Path,
    accessor: &dyn SecretAccessor,
) -> Result<()> {
    if !options.snowflake {
        let helper = project_dir.join(HELPER_FILE);
        if helper.exists() {
            std::fs::remove_file(&helper).map_err(|e| FuncError::IoError {
                path: helper,
                message: e.to_string(),
            })?;
        }
        return Ok(());
    }

    info!("Enabling Snowflake integration");

    append_requirement(project_dir)?;

    data.dev.vpc_connector = Some(VPC_CONNECTOR.to_string());
    data.dev.egress_settings = Some(EGRESS_SETTINGS.to_string());

    // 環境変数をマージ（既存キーは上書き）
    let vars = data
        .dev
        .environment_variables
        .get_or_insert_with(Mapping::new);
    vars.insert(WAREHOUSE_VAR.into(), WAREHOUSE.into());
    vars.insert(DATABASE_VAR.into(), DATABASE.into());

    // 認証情報シークレットを解決して記述子にマージ
    let reference = format!("{CREDENTIALS_SECRET_ID}/versions/{CREDENTIALS_SECRET_VERSION}");
    let value = accessor.resolve(CREDENTIALS_SECRET_ID, CREDENTIALS_SECRET_VERSION)?;
    let secrets = data
        .dev
        .secret_environment_variables
        .get_or_insert_with(Mapping::new);
    secrets.insert(CREDENTIALS_VAR.into(), reference.as_str().into());

    // .envには同名のキーがまだない場合のみ追記する
    let env_file = EnvFile::new(project_dir);
    for (name, value) in [
        (CREDENTIALS_VAR, value.as_str()),
        (WAREHOUSE_VAR, WAREHOUSE),
        (DATABASE_VAR, DATABASE),
    ] {
        if !env_file.contains(name)? {
            env_file.append(name, value)?;
        }
    }

    Ok(())
}

/// requirements.txtにコネクタの固定バージョンを追記
fn append_requirement(project_dir: &Path) -> Result<()> {
    let path = project_dir.join(REQUIREMENTS_FILE);
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| FuncError::IoError {
            path: path.clone(),
            message: e.to_string(),
        })?;

    writeln!(file, "{CONNECTOR_REQUIREMENT}").map_err(|e| FuncError::IoError {
        path,
        message: e.to_string(),
    })?;

    Ok(())
}
