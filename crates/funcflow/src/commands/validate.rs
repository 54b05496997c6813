//! validateコマンド

use colored::Colorize;
use funcflow_core::descriptor;
use std::path::PathBuf;

pub fn handle(dir: Option<PathBuf>) -> anyhow::Result<()> {
    let project_dir = match dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    println!("{}", "deploy.yamlを検証中...".blue());
    println!(
        "プロジェクト: {}",
        project_dir.display().to_string().cyan()
    );

    match descriptor::load(&project_dir) {
        Ok(descriptor) => {
            let dev = &descriptor.dev;

            println!("{}", "✓ deploy.yamlは正常です！".green().bold());
            println!();
            println!("サマリー:");
            println!(
                "  説明: {}",
                dev.description.as_deref().unwrap_or("(未設定)")
            );
            println!(
                "  メモリ: {}",
                dev.memory
                    .map(|m| format!("{m}MB"))
                    .unwrap_or_else(|| "(未設定)".to_string())
            );
            println!(
                "  タイムアウト: {}",
                dev.timeout
                    .map(|t| format!("{t}秒"))
                    .unwrap_or_else(|| "(未設定)".to_string())
            );
            println!(
                "  トリガー: {}",
                match &dev.trigger_bucket {
                    Some(bucket) => format!("ストレージイベント ({bucket})"),
                    None => "HTTP".to_string(),
                }
            );

            let secret_count = dev
                .secret_environment_variables
                .as_ref()
                .map(|m| m.len())
                .unwrap_or(0);
            let var_count = dev
                .environment_variables
                .as_ref()
                .map(|m| m.len())
                .unwrap_or(0);
            println!("  シークレット: {}個", secret_count);
            println!("  環境変数: {}個", var_count);

            if dev.vpc_connector.is_some() {
                println!("  Snowflake統合: {}", "有効".cyan());
            }
        }
        Err(e) => {
            eprintln!();
            eprintln!("{}", "✗ 検証エラー".red().bold());
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
