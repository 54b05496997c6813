//! プロジェクト雛形の生成
//!
//! 埋め込みテンプレートをTeraで展開して関数フォルダを作り、
//! 続けて生成後パイプラインを適用します。

use crate::descriptor::DEPLOY_FILE;
use crate::envfile::ENV_FILE;
use crate::error::{FuncError, Result};
use crate::options::GenerateOptions;
use crate::pipeline;
use crate::secrets::SecretAccessor;
use crate::snowflake::{HELPER_FILE, REQUIREMENTS_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};
use tracing::{info, instrument};

/// 関数名と説明をコンテキストに入れて展開するテンプレート
const MAIN_TEMPLATE: &str = include_str!("../resources/templates/main.py");
const README_TEMPLATE: &str = include_str!("../resources/templates/README.md");

/// そのまま書き出すシードファイル
const DEPLOY_SEED: &str = include_str!("../resources/templates/deploy.yaml");
const REQUIREMENTS_SEED: &str = include_str!("../resources/templates/requirements.txt");
const HELPER_SEED: &str = include_str!("../resources/templates/snowflake_utils.py");
const GITIGNORE_SEED: &str = include_str!("../resources/templates/gitignore");

/// 関数フォルダを生成してパイプラインを適用する
///
/// 戻り値は生成されたフォルダのパス。出力先が既に存在する場合はエラー。
#[instrument(skip(output_dir, options, accessor), fields(name = %options.name))]
pub fn generate(
    output_dir: &Path,
    options: &GenerateOptions,
    accessor: &dyn SecretAccessor,
) -> Result<PathBuf> {
    let project_dir = output_dir.join(&options.name);
    if project_dir.exists() {
        return Err(FuncError::TargetExists(project_dir));
    }

    info!("Creating cloud function source folder");
    fs::create_dir_all(&project_dir).map_err(|e| FuncError::IoError {
        path: project_dir.clone(),
        message: e.to_string(),
    })?;

    let mut context = Context::new();
    context.insert("name", &options.name);
    context.insert(
        "description",
        options.description.as_deref().unwrap_or(&options.name),
    );

    write_rendered(&project_dir.join("main.py"), MAIN_TEMPLATE, &context)?;
    write_rendered(&project_dir.join("README.md"), README_TEMPLATE, &context)?;
    write_file(&project_dir.join(DEPLOY_FILE), DEPLOY_SEED)?;
    write_file(&project_dir.join(REQUIREMENTS_FILE), REQUIREMENTS_SEED)?;
    write_file(&project_dir.join(HELPER_FILE), HELPER_SEED)?;
    write_file(&project_dir.join(".gitignore"), GITIGNORE_SEED)?;
    write_file(&project_dir.join(ENV_FILE), "")?;

    pipeline::run(&project_dir, options, accessor)?;

    info!("Cloud function source folder created");
    Ok(project_dir)
}

fn write_rendered(path: &Path, template: &str, context: &Context) -> Result<()> {
    let rendered =
        Tera::one_off(template, context, false).map_err(|e| FuncError::TemplateError {
            file: path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            message: e.to_string(),
        })?;

    write_file(path, &rendered)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| FuncError::IoError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
