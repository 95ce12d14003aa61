//! 内容服务 CLI
//!
//! 加载配置，合并命令行参数，初始化可观测性后执行子命令。

use anyhow::Context;
use clap::Parser;
use content_shared::config::AppConfig;
use content_shared::observability;
use mock_content::cli::{Cli, CommandRunner, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load("mock-content").context("加载配置失败")?;
    cli.apply_overrides(&mut config);

    let _guard = observability::init(&config.service_name, &config.observability).await?;

    let runner = CommandRunner::new(config);

    match cli.command {
        Commands::Server { .. } => {
            runner.run_server().await?;
        }
        Commands::Populate { output } => {
            runner.run_populate(output.as_deref()).await?;
        }
    }

    Ok(())
}
