//! 博客内容服务
//!
//! 博客站点的文章列表、分类、详情、相关推荐与搜索，以及对应的 REST 端点。

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};

use super::ListResponse;
use crate::generators::vocabulary::BLOG_CATEGORIES;
use crate::latency::Operation;
use crate::models::{BlogPost, BlogPostOverrides, ContentRecord};
use crate::query::{self, MAX_LIMIT, QueryParams, newest_first};
use crate::store::{CachePool, StoreContext};

/// 博客文章池大小
pub const BLOG_POOL_SIZE: usize = 50;

pub const DEFAULT_POSTS_LIMIT: usize = 10;
pub const DEFAULT_RECOMMENDATIONS_LIMIT: usize = 5;
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// 博客服务状态
pub struct BlogServiceState {
    context: StoreContext,
    posts: CachePool<BlogPost>,
}

impl BlogServiceState {
    pub fn new(context: StoreContext) -> Self {
        Self {
            context,
            posts: CachePool::new(BlogPost::KIND, BLOG_POOL_SIZE),
        }
    }

    /// 文章池，首次访问时生成
    pub fn posts(&self) -> Arc<[BlogPost]> {
        self.context
            .fill_pool(&self.posts, |g, _| g.blog_post(BlogPostOverrides::default()))
    }

    pub fn is_warm(&self) -> bool {
        self.posts.is_initialized()
    }

    /// 按发布时间倒序分页
    pub async fn fetch_posts(&self, limit: usize, offset: usize) -> Vec<BlogPost> {
        self.context.enter(Operation::FetchPosts).await;

        let posts = self.posts();
        query::execute(&posts, &QueryParams::new(limit).offset(offset), newest_first)
    }

    /// 按分类查询
    ///
    /// 分类匹配忽略大小写。池中没有该分类的文章时，临时生成 `limit` 篇该分类的文章
    /// （最多 [`MAX_LIMIT`] 篇），生成的文章不会加入池中。
    pub async fn fetch_posts_by_category(&self, category: &str, limit: usize) -> Vec<BlogPost> {
        self.context.enter(Operation::FetchPostsByCategory).await;

        let posts = self.posts();
        let params = QueryParams::new(limit).in_category(category);
        if query::engine::filter(&posts, &params).is_empty() {
            let limit = limit.min(MAX_LIMIT);
            info!(category, limit, "分类下没有文章，临时生成");
            let mut generated: Vec<BlogPost> = self.context.with_generator(|g| {
                (0..limit)
                    .map(|_| g.blog_post(BlogPostOverrides::with_category(category)))
                    .collect()
            });
            generated.sort_by(newest_first);
            return generated;
        }

        query::execute(&posts, &params, newest_first)
    }

    /// 按 slug 获取文章，不存在时生成一篇带该 slug 的文章
    pub async fn fetch_post_by_slug(&self, slug: &str) -> BlogPost {
        self.context.enter(Operation::FetchPostBySlug).await;

        let posts = self.posts();
        match posts.iter().find(|post| post.slug == slug) {
            Some(post) => post.clone(),
            None => {
                debug!(slug, "文章不存在，按 slug 生成");
                self.context
                    .with_generator(|g| g.blog_post(BlogPostOverrides::with_slug(slug)))
            }
        }
    }

    /// 相关推荐
    ///
    /// 参考文章不存在时返回随机打乱的文章
    pub async fn fetch_recommended_posts_by_slug(&self, slug: &str, limit: usize) -> Vec<BlogPost> {
        self.context.enter(Operation::FetchRecommendedPosts).await;

        let posts = self.posts();
        let reference = posts.iter().find(|post| post.slug == slug);
        self.context.with_generator(|g| match reference {
            Some(reference) => query::recommend(&posts, reference, limit, g.rng()),
            None => query::engine::random_sample(&posts, limit, g.rng()),
        })
    }

    pub async fn fetch_categories(&self) -> Vec<String> {
        self.context.enter(Operation::FetchCategories).await;
        BLOG_CATEGORIES.iter().map(|c| c.to_string()).collect()
    }

    /// 全文搜索：标题、摘要、正文、标签、分类
    pub async fn search_posts(&self, query: &str, limit: usize) -> Vec<BlogPost> {
        self.context.enter(Operation::SearchPosts).await;

        let posts = self.posts();
        query::search(&posts, query, limit)
    }
}

// ============================================================================
// 请求参数
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

// ============================================================================
// 路由配置
// ============================================================================

/// 构建博客服务路由
pub fn blog_routes() -> Router<Arc<BlogServiceState>> {
    Router::new()
        .route("/blog/posts", get(list_posts))
        .route("/blog/posts/{slug}", get(get_post))
        .route("/blog/posts/{slug}/recommended", get(list_recommended))
        .route("/blog/categories", get(list_categories))
        .route("/blog/categories/{category}/posts", get(list_category_posts))
        .route("/blog/search", get(search))
}

// ============================================================================
// 端点处理函数
// ============================================================================

#[tracing::instrument(skip(state))]
async fn list_posts(
    State(state): State<Arc<BlogServiceState>>,
    Query(params): Query<ListPostsQuery>,
) -> Json<ListResponse<BlogPost>> {
    let posts = state
        .fetch_posts(
            params.limit.unwrap_or(DEFAULT_POSTS_LIMIT).min(MAX_LIMIT),
            params.offset.unwrap_or(0),
        )
        .await;
    Json(ListResponse::new(posts))
}

#[tracing::instrument(skip(state))]
async fn get_post(
    State(state): State<Arc<BlogServiceState>>,
    Path(slug): Path<String>,
) -> Json<BlogPost> {
    Json(state.fetch_post_by_slug(&slug).await)
}

#[tracing::instrument(skip(state))]
async fn list_recommended(
    State(state): State<Arc<BlogServiceState>>,
    Path(slug): Path<String>,
    Query(params): Query<LimitQuery>,
) -> Json<ListResponse<BlogPost>> {
    let posts = state
        .fetch_recommended_posts_by_slug(
            &slug,
            params.limit.unwrap_or(DEFAULT_RECOMMENDATIONS_LIMIT).min(MAX_LIMIT),
        )
        .await;
    Json(ListResponse::new(posts))
}

#[tracing::instrument(skip(state))]
async fn list_categories(State(state): State<Arc<BlogServiceState>>) -> Json<Vec<String>> {
    Json(state.fetch_categories().await)
}

#[tracing::instrument(skip(state))]
async fn list_category_posts(
    State(state): State<Arc<BlogServiceState>>,
    Path(category): Path<String>,
    Query(params): Query<LimitQuery>,
) -> Json<ListResponse<BlogPost>> {
    let posts = state
        .fetch_posts_by_category(
            &category,
            params.limit.unwrap_or(DEFAULT_POSTS_LIMIT).min(MAX_LIMIT),
        )
        .await;
    Json(ListResponse::new(posts))
}

#[tracing::instrument(skip(state))]
async fn search(
    State(state): State<Arc<BlogServiceState>>,
    Query(params): Query<SearchQuery>,
) -> Json<ListResponse<BlogPost>> {
    let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT).min(MAX_LIMIT);
    let posts = state.search_posts(&params.q, limit).await;
    Json(ListResponse::new(posts))
}
