//! 配置管理模块
//!
//! 支持多格式配置文件加载，环境变量覆盖，以及类型安全的配置访问。

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::error::{ContentError, Result};

/// 模拟延迟倍率上限
pub const MAX_LATENCY_SCALE: f64 = 100.0;

/// 服务配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8090,
        }
    }
}

/// 内容存储配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// 随机数种子，为空时使用系统熵
    pub seed: Option<u64>,
    /// 模拟延迟倍率，0 表示关闭延迟
    pub latency_scale: f64,
    /// 启动时是否预先生成所有内容池
    pub warm_on_start: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed: None,
            latency_scale: 1.0,
            warm_on_start: false,
        }
    }
}

/// 可观测性配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub log_level: String,
    /// 是否输出 JSON 格式日志
    pub json_logs: bool,
    pub metrics_enabled: bool,
    pub metrics_port: u16,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            metrics_enabled: false,
            metrics_port: 9090,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service_name: String,
    pub environment: String,
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub observability: ObservabilityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_name: "mock-content".to_string(),
            environment: "development".to_string(),
            server: ServerConfig::default(),
            store: StoreConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. config/default.toml（默认配置）
    /// 2. config/{environment}.toml（环境特定配置）
    /// 3. 环境变量（CONTENT_ 前缀，嵌套字段用双下划线，如 CONTENT_STORE__LATENCY_SCALE -> store.latency_scale）
    pub fn load(service_name: &str) -> Result<Self> {
        let env = std::env::var("CONTENT_ENV").unwrap_or_else(|_| "development".to_string());
        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

        Self::load_from_dir(service_name, Path::new(&config_dir), &env)
    }

    /// 从指定目录加载配置
    pub fn load_from_dir(service_name: &str, config_dir: &Path, env: &str) -> Result<Self> {
        let builder = Config::builder()
            .set_default("service_name", service_name)?
            .set_default("environment", env)?
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            .add_source(File::from(config_dir.join(format!("{}.toml", env))).required(false))
            .add_source(
                Environment::with_prefix("CONTENT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置取值
    pub fn validate(&self) -> Result<()> {
        let scale = self.store.latency_scale;
        if !scale.is_finite() || !(0.0..=MAX_LATENCY_SCALE).contains(&scale) {
            return Err(ContentError::InvalidArgument {
                field: "store.latency_scale".to_string(),
                message: format!("必须在 0 到 {} 之间，实际为 {}", MAX_LATENCY_SCALE, scale),
            });
        }
        Ok(())
    }

    /// 获取服务地址
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8090);
        assert_eq!(config.store.latency_scale, 1.0);
        assert!(config.store.seed.is_none());
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_server_addr() {
        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            ..Default::default()
        };
        assert_eq!(config.server_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_validate_rejects_negative_latency_scale() {
        let mut config = AppConfig::default();
        config.store.latency_scale = -0.5;

        let err = config.validate().unwrap_err();
        assert_eq!(err.code(), "INVALID_ARGUMENT");

        config.store.latency_scale = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_latency_scale() {
        let mut config = AppConfig::default();
        config.store.latency_scale = 1e20;
        assert_eq!(config.validate().unwrap_err().code(), "INVALID_ARGUMENT");

        config.store.latency_scale = MAX_LATENCY_SCALE;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_without_config_files() {
        let config =
            AppConfig::load_from_dir("mock-content", Path::new("/nonexistent/config"), "test")
                .unwrap();

        assert_eq!(config.service_name, "mock-content");
        assert_eq!(config.environment, "test");
        assert!(!config.is_production());
    }
}
