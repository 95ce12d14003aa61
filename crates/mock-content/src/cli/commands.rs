//! CLI 命令定义
//!
//! 使用 clap derive 宏定义命令行接口结构。
//! 命令行参数优先于配置文件和环境变量。

use clap::{Parser, Subcommand};
use content_shared::config::AppConfig;
use std::path::PathBuf;

/// 模拟内容服务命令行工具
///
/// 使用 `--help` 查看各子命令的详细说明。
#[derive(Parser, Debug)]
#[command(name = "content-server")]
#[command(version, about = "模拟内容服务工具")]
#[command(propagate_version = true)]
pub struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// 随机数种子，相同种子生成相同内容
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// 子命令枚举
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 启动内容服务（HTTP REST API）
    Server {
        /// 服务端口
        #[arg(short, long)]
        port: Option<u16>,

        /// 启动时预先生成所有内容池
        #[arg(long)]
        warm: bool,
    },

    /// 生成所有内容池并打印统计
    ///
    /// 生成过程不模拟延迟，可选输出 JSON 快照。
    Populate {
        /// 输出文件路径
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// 将命令行参数写入配置
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(ref level) = self.log_level {
            config.observability.log_level = level.clone();
        }
        if let Some(seed) = self.seed {
            config.store.seed = Some(seed);
        }

        match self.command {
            Commands::Server { port, warm } => {
                if let Some(port) = port {
                    config.server.port = port;
                }
                if warm {
                    config.store.warm_on_start = true;
                }
            }
            Commands::Populate { .. } => {
                config.store.latency_scale = 0.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_server() {
        let cli = Cli::parse_from([
            "content-server",
            "--seed",
            "42",
            "server",
            "--port",
            "9000",
            "--warm",
        ]);

        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.store.seed, Some(42));
        assert!(config.store.warm_on_start);
        assert_eq!(config.store.latency_scale, 1.0);
    }

    #[test]
    fn test_parse_populate_disables_latency() {
        let cli = Cli::parse_from(["content-server", "populate", "-o", "out.json", "-l", "debug"]);

        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.store.latency_scale, 0.0);
        assert_eq!(config.observability.log_level, "debug");
        assert!(matches!(
            cli.command,
            Commands::Populate { output: Some(ref path) } if path == &PathBuf::from("out.json")
        ));
    }

    #[test]
    fn test_defaults_keep_config() {
        let cli = Cli::parse_from(["content-server", "server"]);
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.server.port, 8090);
        assert!(config.store.seed.is_none());
        assert!(!config.store.warm_on_start);
    }
}
