//! CLI 模块
//!
//! 提供命令行接口，支持以下功能：
//!
//! - `server` - 启动内容 HTTP 服务
//! - `populate` - 生成全部内容并输出统计或快照
//!
//! # 使用示例
//!
//! ```bash
//! # 启动服务器并预热内容池
//! content-server --seed 42 server --port 8090 --warm
//!
//! # 生成内容快照
//! content-server populate -o content.json
//! ```

pub mod commands;
pub mod runner;

pub use commands::{Cli, Commands};
pub use runner::{CommandRunner, build_app};
