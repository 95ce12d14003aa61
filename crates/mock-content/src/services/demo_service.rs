//! 演示站点内容服务

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;

use super::ListResponse;
use crate::generators::vocabulary::DEMO_GALLERY;
use crate::latency::Operation;
use crate::models::{
    ContentRecord, DemoPost, DemoPostOverrides, GalleryItem, GalleryItemOverrides,
};
use crate::query::{self, QueryParams, newest_first};
use crate::store::{CachePool, StoreContext};

pub const DEMO_POST_POOL_SIZE: usize = 20;
pub const DEMO_GALLERY_POOL_SIZE: usize = 30;

pub const DEFAULT_DEMO_POSTS_LIMIT: usize = 10;
pub const DEFAULT_DEMO_GALLERY_LIMIT: usize = 20;

/// 演示站点服务状态
pub struct DemoServiceState {
    context: StoreContext,
    posts: CachePool<DemoPost>,
    gallery: CachePool<GalleryItem>,
}

impl DemoServiceState {
    pub fn new(context: StoreContext) -> Self {
        Self {
            context,
            posts: CachePool::new(DemoPost::KIND, DEMO_POST_POOL_SIZE),
            gallery: CachePool::new("demo_gallery_items", DEMO_GALLERY_POOL_SIZE),
        }
    }

    pub fn posts(&self) -> Arc<[DemoPost]> {
        self.context
            .fill_pool(&self.posts, |g, _| g.demo_post(DemoPostOverrides::default()))
    }

    /// 演示图库使用独立的分类和标签
    pub fn gallery(&self) -> Arc<[GalleryItem]> {
        self.context.fill_pool(&self.gallery, |g, _| {
            g.gallery_item(&DEMO_GALLERY, GalleryItemOverrides::default())
        })
    }

    pub fn warm(&self) {
        self.posts();
        self.gallery();
    }

    /// 最新文章
    pub async fn get_posts(&self, limit: usize) -> Vec<DemoPost> {
        self.context.enter(Operation::DemoPosts).await;

        let posts = self.posts();
        query::execute(&posts, &QueryParams::new(limit), newest_first)
    }

    /// 最新图片
    pub async fn get_gallery_items(&self, limit: usize) -> Vec<GalleryItem> {
        self.context.enter(Operation::DemoGalleryItems).await;

        let gallery = self.gallery();
        query::execute(&gallery, &QueryParams::new(limit), newest_first)
    }
}

#[derive(Debug, Deserialize)]
pub struct DemoQuery {
    pub limit: Option<usize>,
}

/// 构建演示站点路由
pub fn demo_routes() -> Router<Arc<DemoServiceState>> {
    Router::new()
        .route("/demo/posts", get(list_posts))
        .route("/demo/gallery", get(list_gallery))
}

#[tracing::instrument(skip(state))]
async fn list_posts(
    State(state): State<Arc<DemoServiceState>>,
    Query(params): Query<DemoQuery>,
) -> Json<ListResponse<DemoPost>> {
    let posts = state
        .get_posts(params.limit.unwrap_or(DEFAULT_DEMO_POSTS_LIMIT))
        .await;
    Json(ListResponse::new(posts))
}

#[tracing::instrument(skip(state))]
async fn list_gallery(
    State(state): State<Arc<DemoServiceState>>,
    Query(params): Query<DemoQuery>,
) -> Json<ListResponse<GalleryItem>> {
    let items = state
        .get_gallery_items(params.limit.unwrap_or(DEFAULT_DEMO_GALLERY_LIMIT))
        .await;
    Json(ListResponse::new(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_posts_newest_first() {
        let state = DemoServiceState::new(StoreContext::seeded(3));
        let posts = state.get_posts(50).await;

        assert_eq!(posts.len(), DEMO_POST_POOL_SIZE);
        assert!(posts.windows(2).all(|w| w[0].published_at >= w[1].published_at));
        assert_eq!(state.get_posts(10).await, posts[..10].to_vec());
    }

    #[tokio::test]
    async fn test_gallery_uses_demo_vocabulary() {
        let state = DemoServiceState::new(StoreContext::seeded(3));
        let items = state.get_gallery_items(100).await;

        assert_eq!(items.len(), DEMO_GALLERY_POOL_SIZE);
        assert!(
            items
                .iter()
                .all(|i| DEMO_GALLERY.categories.contains(&i.category.as_str()))
        );
        assert!(items.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }
}
