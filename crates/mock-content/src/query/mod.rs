//! 查询模块
//!
//! 内容池上的过滤、排序、分页、推荐与搜索。

pub mod engine;
pub mod params;

pub use engine::{
    execute, featured_then, newest_first, recommend, relevance_score, search,
};
pub use params::{MAX_LIMIT, QueryParams};
