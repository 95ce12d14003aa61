//! 命令执行器
//!
//! 负责执行各 CLI 子命令的具体逻辑。

use std::path::Path;

use anyhow::{Context, Result};
use axum::{Json, Router, middleware, routing::get};
use content_shared::config::AppConfig;
use content_shared::observability::middleware::http_tracing;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::services::ContentServices;
use crate::store::StoreContext;

/// 命令执行器
///
/// 持有合并了命令行参数的配置
pub struct CommandRunner {
    config: AppConfig,
}

impl CommandRunner {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// 按配置创建内容服务
    pub fn services(&self) -> ContentServices {
        ContentServices::new(StoreContext::from_config(&self.config.store))
    }

    /// 执行 server 命令
    ///
    /// 启动 HTTP REST API 服务器，合并博客、品牌站点、演示站点路由。
    pub async fn run_server(&self) -> Result<()> {
        let store = &self.config.store;
        info!(
            port = self.config.server.port,
            seed = ?store.seed,
            latency_scale = store.latency_scale,
            warm = store.warm_on_start,
            "启动内容服务"
        );

        let services = self.services();
        if store.warm_on_start {
            services.warm();
        }

        let app = build_app(&services);

        let addr = self.config.server_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("绑定地址失败: {}", addr))?;

        info!("内容服务已启动: http://{}", addr);
        info!("可用端点:");
        info!("  GET /health, /ready - 健康检查");
        info!("  GET /blog/... - 博客内容");
        info!("  GET/POST /brand/... - 品牌站点内容与表单");
        info!("  GET /demo/... - 演示站点内容");
        info!("按 Ctrl+C 停止服务");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("服务器运行失败")?;

        info!("内容服务已停止");
        Ok(())
    }

    /// 执行 populate 命令
    ///
    /// 生成所有内容池并打印各类记录数，可选输出 JSON 快照
    pub async fn run_populate(&self, output: Option<&Path>) -> Result<()> {
        info!(seed = ?self.config.store.seed, "生成全部内容");

        let snapshot = self.services().snapshot();

        if let Some(path) = output {
            snapshot
                .write_json(path)
                .with_context(|| format!("写入文件失败: {}", path.display()))?;
            info!(path = %path.display(), "内容已输出到文件");
        }

        println!("\n内容生成完成:");
        println!("{}", "-".repeat(30));
        for (kind, count) in snapshot.counts() {
            println!("{:<20} {:>6}", kind, count);
        }
        println!("{}", "-".repeat(30));

        Ok(())
    }
}

/// 构建完整应用：健康检查 + 内容路由 + 请求追踪
pub fn build_app(services: &ContentServices) -> Router {
    let ready_services = services.clone();

    Router::new()
        .route("/health", get(health_check))
        .route(
            "/ready",
            get(move || readiness_check(ready_services.clone())),
        )
        .merge(services.routes())
        .layer(middleware::from_fn(http_tracing))
        .layer(CorsLayer::permissive())
}

// ============================================================================
// 辅助函数
// ============================================================================

/// 等待关闭信号
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "安装 CTRL+C 信号处理器失败");
        return;
    }
    info!("收到关闭信号，正在停止服务...");
}

// ============================================================================
// 健康检查端点
// ============================================================================

/// 健康检查响应
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// 就绪检查响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub services: Vec<String>,
    /// 博客文章池是否已生成
    pub warm: bool,
}

/// 健康检查端点
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// 就绪检查端点
///
/// 内容池按需生成，未预热时同样就绪
async fn readiness_check(services: ContentServices) -> Json<ReadinessResponse> {
    Json(ReadinessResponse {
        status: "ready".to_string(),
        services: vec!["blog".to_string(), "brand".to_string(), "demo".to_string()],
        warm: services.blog.is_warm(),
    })
}
