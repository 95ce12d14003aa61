//! Mock Content
//!
//! 为博客、品牌站点和演示站点提供模拟内容的 crate。
//! 内容按类型惰性生成为固定大小的池，之后在进程内保持不变，
//! 查询按过滤 → 排序 → 分页的顺序执行，并在返回前模拟接口延迟。
//!
//! # 主要模块
//!
//! - `models`: 内容数据模型与字段覆盖
//! - `generators`: 基于注入随机源的内容生成器
//! - `store`: 惰性内容池、共享上下文、表单提交存储
//! - `query`: 过滤、排序、分页、推荐与搜索
//! - `latency`: 按操作的延迟模拟
//! - `services`: 各站点的服务状态与 REST 路由
//!
//! # 使用示例
//!
//! ```rust
//! use mock_content::services::BlogServiceState;
//! use mock_content::store::StoreContext;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! // 固定种子、无延迟
//! let blog = BlogServiceState::new(StoreContext::seeded(42));
//!
//! let latest = blog.fetch_posts(5, 0).await;
//! assert_eq!(latest.len(), 5);
//!
//! let post = blog.fetch_post_by_slug("hello-world").await;
//! assert_eq!(post.slug, "hello-world");
//! # }
//! ```

pub mod cli;
pub mod error;
pub mod generators;
pub mod latency;
pub mod models;
pub mod query;
pub mod services;
pub mod store;

pub use error::SubmissionError;
