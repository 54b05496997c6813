//! newコマンド
//!
//! 生成デフォルトファイルとCLIフラグをマージして雛形を生成する。
//! CLIフラグが常に優先される。

use colored::Colorize;
use funcflow_config::{ConfigError, GenerateDefaults};
use funcflow_core::{GenerateOptions, is_affirmative, scaffold};
use funcflow_gcp::SecretManager;
use std::path::PathBuf;

#[allow(clippy::too_many_arguments)]
pub fn handle(
    name: String,
    description: Option<String>,
    memory: Option<String>,
    timeout: Option<String>,
    secrets: Option<String>,
    env_vars: Option<String>,
    trigger_bucket: Option<String>,
    snowflake: bool,
    output: Option<PathBuf>,
    project: Option<String>,
) -> anyhow::Result<()> {
    let defaults = load_defaults()?;

    let options = GenerateOptions {
        name,
        description: description.or(defaults.description),
        memory: memory.or(defaults.memory),
        timeout: timeout.or(defaults.timeout),
        secrets: secrets.or(defaults.secrets),
        env_vars: env_vars.or(defaults.env_vars),
        trigger_bucket: trigger_bucket.or(defaults.trigger_bucket),
        snowflake: snowflake
            || defaults
                .snowflake
                .as_deref()
                .is_some_and(is_affirmative),
    };

    let output_dir = match output {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    println!("{}", "Cloud Functionプロジェクトを生成中...".blue());

    let accessor = SecretManager::new(project);
    let project_dir = scaffold::generate(&output_dir, &options, &accessor)?;

    println!();
    println!("{}", "✓ プロジェクトを生成しました！".green().bold());
    println!("  {}", project_dir.display().to_string().cyan());
    println!();
    println!("{}", "次のステップ:".bold());
    println!("  1. {} にハンドラを実装", "main.py".cyan());
    println!(
        "  2. {} を確認してデプロイ",
        "deploy.yaml".cyan()
    );

    Ok(())
}

/// 生成デフォルトを読み込む（ファイルがなければ空のデフォルト）
fn load_defaults() -> anyhow::Result<GenerateDefaults> {
    match funcflow_config::find_defaults_file() {
        Ok(path) => {
            println!(
                "生成デフォルト: {}",
                path.display().to_string().cyan()
            );
            Ok(funcflow_config::load_defaults(&path)?)
        }
        Err(ConfigError::DefaultsFileNotFound) => Ok(GenerateDefaults::default()),
        Err(e) => Err(e.into()),
    }
}
