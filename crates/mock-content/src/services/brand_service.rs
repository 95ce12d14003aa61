//! 品牌站点内容服务
//!
//! 团队、图库、客户评价、服务项目、公司信息、FAQ、客户列表，
//! 以及联系表单和邮件订阅两个提交接口。

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};
use content_shared::observability::metrics;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};
use tracing::{info, warn};

use super::{ErrorResponse, ListResponse};
use crate::error::SubmissionError;
use crate::generators::vocabulary::{BRAND_GALLERY, DEPARTMENTS, SERVICE_NAMES};
use crate::latency::Operation;
use crate::models::submission::validate_email;
use crate::models::{
    Client, ClientOverrides, CompanyStats, ContactForm, ContactInfo, ContactReceipt,
    ContentRecord, Faq, FaqOverrides, GalleryItem, GalleryItemOverrides, NewsletterReceipt,
    Service, ServiceOverrides, TeamMember, TeamMemberOverrides, Testimonial,
    TestimonialOverrides,
};
use crate::query::{self, QueryParams, featured_then, newest_first};
use crate::store::{CachePool, StoreContext, SubmissionStore};

// 内容池大小
pub const TEAM_POOL_SIZE: usize = 50;
pub const GALLERY_POOL_SIZE: usize = 100;
pub const TESTIMONIAL_POOL_SIZE: usize = 30;
pub const FAQ_POOL_SIZE: usize = 20;
pub const CLIENT_POOL_SIZE: usize = 50;

// 默认条数
pub const DEFAULT_TEAM_LIMIT: usize = 12;
pub const DEFAULT_GALLERY_LIMIT: usize = 20;
pub const DEFAULT_TESTIMONIALS_LIMIT: usize = 10;
pub const DEFAULT_CLIENTS_LIMIT: usize = 20;

pub const CONTACT_SUCCESS_MESSAGE: &str =
    "Thank you for your message. We will get back to you soon!";
pub const NEWSLETTER_SUCCESS_MESSAGE: &str = "Successfully subscribed to newsletter!";

/// 品牌站点服务状态
pub struct BrandServiceState {
    context: StoreContext,
    team: CachePool<TeamMember>,
    gallery: CachePool<GalleryItem>,
    testimonials: CachePool<Testimonial>,
    services: CachePool<Service>,
    faqs: CachePool<Faq>,
    clients: CachePool<Client>,
    contact_info: OnceLock<ContactInfo>,
    company_stats: OnceLock<CompanyStats>,
    pub submissions: SubmissionStore,
}

impl BrandServiceState {
    pub fn new(context: StoreContext) -> Self {
        Self {
            context,
            team: CachePool::new(TeamMember::KIND, TEAM_POOL_SIZE),
            gallery: CachePool::new(GalleryItem::KIND, GALLERY_POOL_SIZE),
            testimonials: CachePool::new(Testimonial::KIND, TESTIMONIAL_POOL_SIZE),
            services: CachePool::new(Service::KIND, SERVICE_NAMES.len()),
            faqs: CachePool::new(Faq::KIND, FAQ_POOL_SIZE),
            clients: CachePool::new(Client::KIND, CLIENT_POOL_SIZE),
            contact_info: OnceLock::new(),
            company_stats: OnceLock::new(),
            submissions: SubmissionStore::new(),
        }
    }

    // ========================================================================
    // 内容池
    // ========================================================================

    pub fn team(&self) -> Arc<[TeamMember]> {
        self.context.fill_pool(&self.team, |g, _| {
            g.team_member(TeamMemberOverrides::default())
        })
    }

    pub fn gallery(&self) -> Arc<[GalleryItem]> {
        self.context.fill_pool(&self.gallery, |g, _| {
            g.gallery_item(&BRAND_GALLERY, GalleryItemOverrides::default())
        })
    }

    pub fn testimonials(&self) -> Arc<[Testimonial]> {
        self.context.fill_pool(&self.testimonials, |g, _| {
            g.testimonial(TestimonialOverrides::default())
        })
    }

    /// 每个服务名称对应一个服务
    pub fn services(&self) -> Arc<[Service]> {
        self.context.fill_pool(&self.services, |g, i| {
            g.service(ServiceOverrides::with_name(SERVICE_NAMES[i]))
        })
    }

    /// FAQ 的展示顺序即生成序号
    pub fn faqs(&self) -> Arc<[Faq]> {
        self.context
            .fill_pool(&self.faqs, |g, i| g.faq(i as u32, FaqOverrides::default()))
    }

    pub fn clients(&self) -> Arc<[Client]> {
        self.context
            .fill_pool(&self.clients, |g, _| g.client(ClientOverrides::default()))
    }

    pub fn contact_info(&self) -> &ContactInfo {
        self.contact_info
            .get_or_init(|| self.context.with_generator(|g| g.contact_info()))
    }

    pub fn company_stats(&self) -> &CompanyStats {
        self.company_stats
            .get_or_init(|| self.context.with_generator(|g| g.company_stats()))
    }

    /// 生成全部内容池和单例
    pub fn warm(&self) {
        self.team();
        self.gallery();
        self.testimonials();
        self.services();
        self.faqs();
        self.clients();
        self.contact_info();
        self.company_stats();
    }

    // ========================================================================
    // 查询
    // ========================================================================

    /// 按工作年限倒序，部门匹配忽略大小写
    pub async fn fetch_team_members(
        &self,
        limit: usize,
        department: Option<&str>,
    ) -> Vec<TeamMember> {
        self.context.enter(Operation::FetchTeamMembers).await;

        let team = self.team();
        query::execute(&team, &QueryParams::new(limit).category(department), |a, b| {
            b.years_of_experience.cmp(&a.years_of_experience)
        })
    }

    pub async fn fetch_departments(&self) -> Vec<String> {
        self.context.enter(Operation::FetchDepartments).await;
        DEPARTMENTS.iter().map(|d| d.to_string()).collect()
    }

    /// 按创建时间倒序
    pub async fn fetch_gallery_items(
        &self,
        limit: usize,
        category: Option<&str>,
        featured_only: bool,
    ) -> Vec<GalleryItem> {
        self.context.enter(Operation::FetchGalleryItems).await;

        let gallery = self.gallery();
        let params = QueryParams::new(limit)
            .category(category)
            .featured_only(featured_only);
        query::execute(&gallery, &params, newest_first)
    }

    pub async fn fetch_gallery_categories(&self) -> Vec<String> {
        self.context.enter(Operation::FetchGalleryCategories).await;
        BRAND_GALLERY
            .categories
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    /// 按评分倒序
    pub async fn fetch_testimonials(&self, limit: usize, featured_only: bool) -> Vec<Testimonial> {
        self.context.enter(Operation::FetchTestimonials).await;

        let testimonials = self.testimonials();
        let params = QueryParams::new(limit).featured_only(featured_only);
        query::execute(&testimonials, &params, |a, b| b.rating.total_cmp(&a.rating))
    }

    /// 热门服务在前，其余保持生成顺序
    ///
    /// `limit` 为空或 0 时返回全部
    pub async fn fetch_services(&self, limit: Option<usize>) -> Vec<Service> {
        self.context.enter(Operation::FetchServices).await;

        let services = self.services();
        query::execute(&services, &unbounded_or(limit), |a, b| {
            b.popular.cmp(&a.popular)
        })
    }

    pub async fn fetch_contact_info(&self) -> ContactInfo {
        self.context.enter(Operation::FetchContactInfo).await;
        self.contact_info().clone()
    }

    pub async fn fetch_company_stats(&self) -> CompanyStats {
        self.context.enter(Operation::FetchCompanyStats).await;
        self.company_stats().clone()
    }

    /// 按展示顺序升序
    ///
    /// `limit` 为空或 0 时返回全部
    pub async fn fetch_faqs(&self, limit: Option<usize>, category: Option<&str>) -> Vec<Faq> {
        self.context.enter(Operation::FetchFaqs).await;

        let faqs = self.faqs();
        query::execute(&faqs, &unbounded_or(limit).category(category), |a, b| {
            a.order.cmp(&b.order)
        })
    }

    /// 精选客户在前，之后按名称升序
    pub async fn fetch_clients(&self, limit: usize, featured_only: bool) -> Vec<Client> {
        self.context.enter(Operation::FetchClients).await;

        let clients = self.clients();
        let params = QueryParams::new(limit).featured_only(featured_only);
        query::execute(&clients, &params, |a, b| {
            featured_then(a, b, |a, b| a.name.cmp(&b.name))
        })
    }

    // ========================================================================
    // 提交
    // ========================================================================

    /// 提交联系表单
    ///
    /// 先校验邮箱再校验留言长度，通过后保存并返回新的回执 ID
    pub async fn submit_contact_form(
        &self,
        form: ContactForm,
    ) -> Result<ContactReceipt, SubmissionError> {
        self.context.enter(Operation::SubmitContactForm).await;

        if let Err(e) = form.validate() {
            warn!(code = e.code(), "联系表单校验失败");
            metrics::record_submission("contact", "rejected");
            return Err(e);
        }

        let id = self.context.with_generator(|g| g.uuid());
        self.submissions.record_contact(&id, form);

        info!(submission_id = %id, "联系表单已受理");
        metrics::record_submission("contact", "accepted");

        Ok(ContactReceipt {
            success: true,
            message: CONTACT_SUCCESS_MESSAGE.to_string(),
            id,
        })
    }

    /// 订阅邮件，重复订阅同样返回成功
    pub async fn subscribe_newsletter(
        &self,
        email: &str,
    ) -> Result<NewsletterReceipt, SubmissionError> {
        self.context.enter(Operation::SubscribeNewsletter).await;

        if let Err(e) = validate_email(email) {
            warn!(code = e.code(), "订阅邮箱校验失败");
            metrics::record_submission("newsletter", "rejected");
            return Err(e);
        }

        let newly_subscribed = self.submissions.subscribe(email);
        info!(newly_subscribed, "邮件订阅已受理");
        metrics::record_submission("newsletter", "accepted");

        Ok(NewsletterReceipt {
            success: true,
            message: NEWSLETTER_SUCCESS_MESSAGE.to_string(),
        })
    }
}

fn unbounded_or(limit: Option<usize>) -> QueryParams {
    match limit {
        Some(limit) if limit > 0 => QueryParams::new(limit),
        _ => QueryParams::unbounded(),
    }
}

// ============================================================================
// 请求参数
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TeamQuery {
    pub limit: Option<usize>,
    pub department: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GalleryQuery {
    pub limit: Option<usize>,
    pub category: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Deserialize)]
pub struct FeaturedQuery {
    pub limit: Option<usize>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Deserialize)]
pub struct FaqQuery {
    pub limit: Option<usize>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ServicesQuery {
    pub limit: Option<usize>,
}

/// 订阅请求
#[derive(Debug, Serialize, Deserialize)]
pub struct NewsletterRequest {
    pub email: String,
}

// ============================================================================
// 路由配置
// ============================================================================

/// 构建品牌站点路由
pub fn brand_routes() -> Router<Arc<BrandServiceState>> {
    Router::new()
        .route("/brand/team", get(list_team))
        .route("/brand/departments", get(list_departments))
        .route("/brand/gallery", get(list_gallery))
        .route("/brand/gallery/categories", get(list_gallery_categories))
        .route("/brand/testimonials", get(list_testimonials))
        .route("/brand/services", get(list_services))
        .route("/brand/contact-info", get(get_contact_info))
        .route("/brand/stats", get(get_company_stats))
        .route("/brand/faqs", get(list_faqs))
        .route("/brand/clients", get(list_clients))
        .route("/brand/contact", post(submit_contact))
        .route("/brand/newsletter", post(subscribe))
}

// ============================================================================
// 端点处理函数
// ============================================================================

#[tracing::instrument(skip(state))]
async fn list_team(
    State(state): State<Arc<BrandServiceState>>,
    Query(params): Query<TeamQuery>,
) -> Json<ListResponse<TeamMember>> {
    let members = state
        .fetch_team_members(
            params.limit.unwrap_or(DEFAULT_TEAM_LIMIT),
            params.department.as_deref(),
        )
        .await;
    Json(ListResponse::new(members))
}

#[tracing::instrument(skip(state))]
async fn list_departments(State(state): State<Arc<BrandServiceState>>) -> Json<Vec<String>> {
    Json(state.fetch_departments().await)
}

#[tracing::instrument(skip(state))]
async fn list_gallery(
    State(state): State<Arc<BrandServiceState>>,
    Query(params): Query<GalleryQuery>,
) -> Json<ListResponse<GalleryItem>> {
    let items = state
        .fetch_gallery_items(
            params.limit.unwrap_or(DEFAULT_GALLERY_LIMIT),
            params.category.as_deref(),
            params.featured,
        )
        .await;
    Json(ListResponse::new(items))
}

#[tracing::instrument(skip(state))]
async fn list_gallery_categories(
    State(state): State<Arc<BrandServiceState>>,
) -> Json<Vec<String>> {
    Json(state.fetch_gallery_categories().await)
}

#[tracing::instrument(skip(state))]
async fn list_testimonials(
    State(state): State<Arc<BrandServiceState>>,
    Query(params): Query<FeaturedQuery>,
) -> Json<ListResponse<Testimonial>> {
    let testimonials = state
        .fetch_testimonials(
            params.limit.unwrap_or(DEFAULT_TESTIMONIALS_LIMIT),
            params.featured,
        )
        .await;
    Json(ListResponse::new(testimonials))
}

#[tracing::instrument(skip(state))]
async fn list_services(
    State(state): State<Arc<BrandServiceState>>,
    Query(params): Query<ServicesQuery>,
) -> Json<ListResponse<Service>> {
    Json(ListResponse::new(state.fetch_services(params.limit).await))
}

#[tracing::instrument(skip(state))]
async fn get_contact_info(State(state): State<Arc<BrandServiceState>>) -> Json<ContactInfo> {
    Json(state.fetch_contact_info().await)
}

#[tracing::instrument(skip(state))]
async fn get_company_stats(State(state): State<Arc<BrandServiceState>>) -> Json<CompanyStats> {
    Json(state.fetch_company_stats().await)
}

#[tracing::instrument(skip(state))]
async fn list_faqs(
    State(state): State<Arc<BrandServiceState>>,
    Query(params): Query<FaqQuery>,
) -> Json<ListResponse<Faq>> {
    let faqs = state
        .fetch_faqs(params.limit, params.category.as_deref())
        .await;
    Json(ListResponse::new(faqs))
}

#[tracing::instrument(skip(state))]
async fn list_clients(
    State(state): State<Arc<BrandServiceState>>,
    Query(params): Query<FeaturedQuery>,
) -> Json<ListResponse<Client>> {
    let clients = state
        .fetch_clients(
            params.limit.unwrap_or(DEFAULT_CLIENTS_LIMIT),
            params.featured,
        )
        .await;
    Json(ListResponse::new(clients))
}

/// 提交联系表单
#[tracing::instrument(skip(state, form))]
async fn submit_contact(
    State(state): State<Arc<BrandServiceState>>,
    Json(form): Json<ContactForm>,
) -> Result<(StatusCode, Json<ContactReceipt>), (StatusCode, Json<ErrorResponse>)> {
    state
        .submit_contact_form(form)
        .await
        .map(|receipt| (StatusCode::CREATED, Json(receipt)))
        .map_err(ErrorResponse::rejection)
}

/// 订阅邮件
#[tracing::instrument(skip(state, req))]
async fn subscribe(
    State(state): State<Arc<BrandServiceState>>,
    Json(req): Json<NewsletterRequest>,
) -> Result<Json<NewsletterReceipt>, (StatusCode, Json<ErrorResponse>)> {
    state
        .subscribe_newsletter(&req.email)
        .await
        .map(Json)
        .map_err(ErrorResponse::rejection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use tower::ServiceExt;

    fn state() -> BrandServiceState {
        BrandServiceState::new(StoreContext::seeded(7))
    }

    fn form(email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: "Jane Doe".to_string(),
            email: email.to_string(),
            subject: "Project inquiry".to_string(),
            message: message.to_string(),
            phone: None,
        }
    }

    #[tokio::test]
    async fn test_empty_filters_return_unfiltered_results() {
        let state = state();

        assert_eq!(
            state.fetch_team_members(12, Some("")).await,
            state.fetch_team_members(12, None).await
        );
        assert_eq!(
            state.fetch_gallery_items(20, Some(""), false).await,
            state.fetch_gallery_items(20, None, false).await
        );
        let faqs = state.fetch_faqs(None, Some("")).await;
        assert_eq!(faqs.len(), FAQ_POOL_SIZE);
        assert_eq!(faqs, state.fetch_faqs(None, None).await);
    }

    #[tokio::test]
    async fn test_team_members_by_department() {
        let state = state();
        let members = state.fetch_team_members(5, Some("Engineering")).await;

        assert!(members.len() <= 5);
        assert!(members.iter().all(|m| m.department == "Engineering"));
        assert!(
            members
                .windows(2)
                .all(|w| w[0].years_of_experience >= w[1].years_of_experience)
        );

        let lower = state.fetch_team_members(5, Some("engineering")).await;
        assert_eq!(lower, members);
    }

    #[tokio::test]
    async fn test_team_members_default_order() {
        let state = state();
        let members = state.fetch_team_members(50, None).await;
        assert_eq!(members.len(), TEAM_POOL_SIZE);
        assert!(
            members
                .windows(2)
                .all(|w| w[0].years_of_experience >= w[1].years_of_experience)
        );
    }

    #[tokio::test]
    async fn test_gallery_items_filters() {
        let state = state();
        let items = state.fetch_gallery_items(100, None, true).await;
        assert!(items.iter().all(|i| i.featured));
        assert!(items.windows(2).all(|w| w[0].created_at >= w[1].created_at));

        let category = state.gallery()[0].category.clone();
        let items = state
            .fetch_gallery_items(100, Some(&category.to_lowercase()), false)
            .await;
        assert!(!items.is_empty());
        assert!(items.iter().all(|i| i.category == category));
    }

    #[tokio::test]
    async fn test_testimonials_sorted_by_rating() {
        let state = state();
        let testimonials = state.fetch_testimonials(30, false).await;
        assert_eq!(testimonials.len(), TESTIMONIAL_POOL_SIZE);
        assert!(testimonials.windows(2).all(|w| w[0].rating >= w[1].rating));

        let featured = state.fetch_testimonials(30, true).await;
        assert!(featured.iter().all(|t| t.featured));
    }

    #[tokio::test]
    async fn test_services_popular_first_and_stable() {
        let state = state();
        let services = state.fetch_services(None).await;
        assert_eq!(services.len(), SERVICE_NAMES.len());

        let names: Vec<&str> = services.iter().map(|s| s.name.as_str()).collect();
        let pool = state.services();
        let mut expected: Vec<&str> = pool
            .iter()
            .filter(|s| s.popular)
            .map(|s| s.name.as_str())
            .collect();
        expected.extend(pool.iter().filter(|s| !s.popular).map(|s| s.name.as_str()));
        assert_eq!(names, expected);

        assert_eq!(state.fetch_services(Some(3)).await.len(), 3);
        assert_eq!(state.fetch_services(Some(0)).await.len(), SERVICE_NAMES.len());
    }

    #[tokio::test]
    async fn test_faqs_in_display_order() {
        let state = state();
        let faqs = state.fetch_faqs(None, None).await;
        assert_eq!(faqs.len(), FAQ_POOL_SIZE);
        assert!(faqs.iter().enumerate().all(|(i, f)| f.order == i as u32));

        let category = faqs[0].category.clone();
        let filtered = state.fetch_faqs(Some(2), Some(&category)).await;
        assert!(filtered.len() <= 2);
        assert!(filtered.iter().all(|f| f.category == category));
    }

    #[tokio::test]
    async fn test_featured_clients_by_name() {
        let state = state();
        let clients = state.fetch_clients(20, true).await;

        assert!(clients.iter().all(|c| c.featured));
        assert!(clients.windows(2).all(|w| w[0].name <= w[1].name));

        let all = state.fetch_clients(50, false).await;
        let first_regular = all.iter().position(|c| !c.featured).unwrap_or(all.len());
        assert!(all[first_regular..].iter().all(|c| !c.featured));
    }

    #[tokio::test]
    async fn test_singletons_generated_once() {
        let state = state();
        let first = state.fetch_contact_info().await;
        let second = state.fetch_contact_info().await;
        assert_eq!(first, second);

        let stats = state.fetch_company_stats().await;
        assert_eq!(stats, state.fetch_company_stats().await);
    }

    #[tokio::test]
    async fn test_static_lists() {
        let state = state();
        assert_eq!(state.fetch_departments().await.len(), 10);
        assert_eq!(state.fetch_gallery_categories().await.len(), 8);
    }

    #[tokio::test]
    async fn test_submit_contact_form() {
        let state = state();

        let err = state
            .submit_contact_form(form("not-an-email", "this is long enough"))
            .await
            .unwrap_err();
        assert_eq!(err, SubmissionError::InvalidEmail);

        let err = state
            .submit_contact_form(form("a@b.com", "short"))
            .await
            .unwrap_err();
        assert_eq!(err, SubmissionError::MessageTooShort);

        let first = state
            .submit_contact_form(form("a@b.com", "this message is definitely long enough"))
            .await
            .unwrap();
        let second = state
            .submit_contact_form(form("a@b.com", "this message is definitely long enough"))
            .await
            .unwrap();

        assert!(first.success);
        assert_eq!(first.message, CONTACT_SUCCESS_MESSAGE);
        assert_ne!(first.id, second.id);
        assert_eq!(state.submissions.contact_count(), 2);
        assert!(state.submissions.contact(&first.id).is_some());
    }

    #[tokio::test]
    async fn test_subscribe_newsletter() {
        let state = state();

        assert_eq!(
            state.subscribe_newsletter("invalid").await.unwrap_err(),
            SubmissionError::InvalidEmail
        );

        let receipt = state.subscribe_newsletter("reader@example.com").await.unwrap();
        assert!(receipt.success);
        assert_eq!(receipt.message, NEWSLETTER_SUCCESS_MESSAGE);

        assert!(state.subscribe_newsletter("Reader@Example.com").await.is_ok());
        assert_eq!(state.submissions.subscriber_count(), 1);
    }

    #[tokio::test]
    async fn test_contact_route_statuses() {
        let app = brand_routes().with_state(Arc::new(state()));

        let request = |body: serde_json::Value| {
            Request::builder()
                .method("POST")
                .uri("/brand/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap()
        };

        let response = app
            .clone()
            .oneshot(request(serde_json::json!({
                "name": "Jane",
                "email": "jane@example.com",
                "subject": "Hi",
                "message": "I would like to hear more about your services"
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let receipt: ContactReceipt = serde_json::from_slice(&body).unwrap();
        assert!(receipt.success);

        let response = app
            .oneshot(request(serde_json::json!({
                "name": "Jane",
                "email": "jane@example.com",
                "subject": "Hi",
                "message": "short"
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "Message is too short");
        assert_eq!(error.code, "MESSAGE_TOO_SHORT");
    }

    #[tokio::test]
    async fn test_newsletter_route_statuses() {
        let state = Arc::new(state());
        let app = brand_routes().with_state(Arc::clone(&state));

        let request = |email: &str| {
            Request::builder()
                .method("POST")
                .uri("/brand/newsletter")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::json!({ "email": email }).to_string()))
                .unwrap()
        };

        let response = app
            .clone()
            .oneshot(request("reader@example.com"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let receipt: NewsletterReceipt = serde_json::from_slice(&body).unwrap();
        assert!(receipt.success);
        assert!(state.submissions.is_subscribed("reader@example.com"));

        let response = app.oneshot(request("not-an-email")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_EMAIL");
    }

    #[tokio::test]
    async fn test_list_routes() {
        let app = brand_routes().with_state(Arc::new(state()));

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/brand/clients?limit=5&featured=true")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let list: ListResponse<Client> = serde_json::from_slice(&body).unwrap();
        assert!(list.items.len() <= 5);
        assert!(list.items.iter().all(|c| c.featured));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/brand/contact-info")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_team_route_with_empty_department() {
        let app = brand_routes().with_state(Arc::new(state()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/brand/team?department=")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let list: ListResponse<TeamMember> = serde_json::from_slice(&body).unwrap();
        assert_eq!(list.total, DEFAULT_TEAM_LIMIT);
    }
}
