//! 内容服务模块
//!
//! 博客、品牌站点、演示站点三组服务状态及其 REST 路由。

pub mod blog_service;
pub mod brand_service;
pub mod demo_service;

pub use blog_service::{BlogServiceState, blog_routes};
pub use brand_service::{BrandServiceState, brand_routes};
pub use demo_service::{DemoServiceState, demo_routes};

use axum::{Json, Router, http::StatusCode};
use content_shared::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::error::SubmissionError;
use crate::models::{
    BlogPost, Client, CompanyStats, ContactInfo, DemoPost, Faq, GalleryItem, Service, TeamMember,
    Testimonial,
};
use crate::store::StoreContext;

// ============================================================================
// 公共响应 DTO
// ============================================================================

/// 列表响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> ListResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}

/// 错误响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    /// 表单校验失败统一返回 400
    pub fn rejection(err: SubmissionError) -> (StatusCode, Json<ErrorResponse>) {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: err.to_string(),
                code: err.code().to_string(),
            }),
        )
    }
}

// ============================================================================
// 服务集合
// ============================================================================

/// 全部内容服务
///
/// 三组服务共享同一个存储上下文（生成器与延迟设置）
#[derive(Clone)]
pub struct ContentServices {
    pub blog: Arc<BlogServiceState>,
    pub brand: Arc<BrandServiceState>,
    pub demo: Arc<DemoServiceState>,
}

impl ContentServices {
    pub fn new(context: StoreContext) -> Self {
        Self {
            blog: Arc::new(BlogServiceState::new(context.clone())),
            brand: Arc::new(BrandServiceState::new(context.clone())),
            demo: Arc::new(DemoServiceState::new(context)),
        }
    }

    /// 预先生成所有内容池
    pub fn warm(&self) {
        self.blog.posts();
        self.brand.warm();
        self.demo.warm();
        info!("所有内容池已预热");
    }

    /// 合并所有服务路由
    pub fn routes(&self) -> Router {
        Router::new()
            .merge(blog_routes().with_state(Arc::clone(&self.blog)))
            .merge(brand_routes().with_state(Arc::clone(&self.brand)))
            .merge(demo_routes().with_state(Arc::clone(&self.demo)))
    }

    /// 全部内容池的快照，首次调用会生成所有内容
    pub fn snapshot(&self) -> ContentSnapshot {
        self.warm();
        ContentSnapshot {
            blog_posts: self.blog.posts().to_vec(),
            team_members: self.brand.team().to_vec(),
            gallery_items: self.brand.gallery().to_vec(),
            testimonials: self.brand.testimonials().to_vec(),
            services: self.brand.services().to_vec(),
            faqs: self.brand.faqs().to_vec(),
            clients: self.brand.clients().to_vec(),
            contact_info: self.brand.contact_info().clone(),
            company_stats: self.brand.company_stats().clone(),
            demo_posts: self.demo.posts().to_vec(),
            demo_gallery_items: self.demo.gallery().to_vec(),
        }
    }
}

/// 内容快照
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSnapshot {
    pub blog_posts: Vec<BlogPost>,
    pub team_members: Vec<TeamMember>,
    pub gallery_items: Vec<GalleryItem>,
    pub testimonials: Vec<Testimonial>,
    pub services: Vec<Service>,
    pub faqs: Vec<Faq>,
    pub clients: Vec<Client>,
    pub contact_info: ContactInfo,
    pub company_stats: CompanyStats,
    pub demo_posts: Vec<DemoPost>,
    pub demo_gallery_items: Vec<GalleryItem>,
}

impl ContentSnapshot {
    /// 各类内容的记录数
    pub fn counts(&self) -> BTreeMap<&'static str, usize> {
        BTreeMap::from([
            ("blog_posts", self.blog_posts.len()),
            ("team_members", self.team_members.len()),
            ("gallery_items", self.gallery_items.len()),
            ("testimonials", self.testimonials.len()),
            ("services", self.services.len()),
            ("faqs", self.faqs.len()),
            ("clients", self.clients.len()),
            ("demo_posts", self.demo_posts.len()),
            ("demo_gallery_items", self.demo_gallery_items.len()),
        ])
    }

    /// 以格式化 JSON 写入文件
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
