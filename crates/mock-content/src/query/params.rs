//! 查询参数

/// 单次查询最多返回的条数
///
/// 临时生成的文章数同样受此限制
pub const MAX_LIMIT: usize = 100;

/// 列表查询参数
///
/// 分类与搜索词都是可选的，`featured_only` 与其余过滤条件取交集
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pub limit: usize,
    pub offset: usize,
    pub category: Option<String>,
    pub featured_only: bool,
    pub search: Option<String>,
}

impl QueryParams {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            offset: 0,
            category: None,
            featured_only: false,
            search: None,
        }
    }

    /// 不限制条数
    pub fn unbounded() -> Self {
        Self::new(usize::MAX)
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// 按分类（或部门）过滤，忽略大小写
    ///
    /// 空字符串视为不过滤
    pub fn category(mut self, category: Option<impl Into<String>>) -> Self {
        self.category = category
            .map(Into::into)
            .filter(|category: &String| !category.is_empty());
        self
    }

    /// 按分类精确过滤，空字符串也作为分类条件
    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn featured_only(mut self, featured_only: bool) -> Self {
        self.featured_only = featured_only;
        self
    }

    /// 全文搜索，忽略大小写的子串匹配
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }
}

impl Default for QueryParams {
    fn default() -> Self {
        Self::new(10)
    }
}
