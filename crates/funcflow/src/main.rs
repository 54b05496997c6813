mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "func")]
#[command(about = "関数を書くだけ。デプロイの形はfuncflowが整える。", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cloud Functionプロジェクトを生成
    New {
        /// 関数名（生成フォルダ名）
        name: String,
        /// 関数の説明（省略時は関数名を使用）
        #[arg(short, long)]
        description: Option<String>,
        /// メモリ (MB)。省略時は256
        #[arg(short, long)]
        memory: Option<String>,
        /// タイムアウト (秒)。省略時は60
        #[arg(short, long)]
        timeout: Option<String>,
        /// シークレット指定（例: MY_CREDENTIALS=myCredentials:latest をカンマ区切り）
        #[arg(long)]
        secrets: Option<String>,
        /// 環境変数指定（例: BUCKET=my-bucket-dev,OUTPUT_PATH=out）
        #[arg(long = "env-vars")]
        env_vars: Option<String>,
        /// トリガーバケット（指定するとストレージイベントトリガーになる）
        #[arg(long)]
        trigger_bucket: Option<String>,
        /// Snowflake統合を有効にする
        #[arg(long)]
        snowflake: bool,
        /// 出力先ディレクトリ（省略時はカレントディレクトリ）
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// GCPプロジェクトID（gcloudのデフォルト設定を上書き）
        #[arg(long, env = "FUNCFLOW_GCP_PROJECT")]
        project: Option<String>,
    },
    /// 生成済みプロジェクトのdeploy.yamlを検証
    Validate {
        /// プロジェクトディレクトリ（省略時はカレントディレクトリ）
        dir: Option<PathBuf>,
    },
    /// バージョン情報を表示
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt::init();

    // Versionコマンドは他の準備を必要としない
    if matches!(cli.command, Commands::Version) {
        println!("funcflow {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    match cli.command {
        Commands::New {
            name,
            description,
            memory,
            timeout,
            secrets,
            env_vars,
            trigger_bucket,
            snowflake,
            output,
            project,
        } => {
            commands::new::handle(
                name,
                description,
                memory,
                timeout,
                secrets,
                env_vars,
                trigger_bucket,
                snowflake,
                output,
                project,
            )?;
        }
        Commands::Validate { dir } => {
            commands::validate::handle(dir)?;
        }
        Commands::Version => {
            unreachable!("Version is handled before dispatch");
        }
    }

    Ok(())
}
