//! 存储模块
//!
//! 惰性内容池、共享生成器上下文以及表单提交存储。

pub mod context;
pub mod pool;
pub mod submissions;

pub use context::StoreContext;
pub use pool::CachePool;
pub use submissions::SubmissionStore;
