//! 延迟模拟
//!
//! 每个内容操作在返回前等待固定的时长，模拟真实接口的网络往返。

use std::time::Duration;

/// 内容操作
///
/// 每个操作对应一个固定的基础延迟
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FetchPosts,
    FetchPostsByCategory,
    FetchPostBySlug,
    FetchRecommendedPosts,
    FetchCategories,
    SearchPosts,
    FetchTeamMembers,
    FetchDepartments,
    FetchGalleryItems,
    FetchGalleryCategories,
    FetchTestimonials,
    FetchServices,
    FetchContactInfo,
    FetchCompanyStats,
    FetchFaqs,
    FetchClients,
    SubmitContactForm,
    SubscribeNewsletter,
    DemoPosts,
    DemoGalleryItems,
}

impl Operation {
    /// 基础延迟（毫秒）
    pub fn base_delay_ms(&self) -> u64 {
        match self {
            Self::FetchCategories
            | Self::FetchCompanyStats
            | Self::FetchGalleryCategories
            | Self::FetchDepartments => 100,
            Self::FetchContactInfo => 150,
            Self::FetchPostBySlug | Self::FetchServices | Self::FetchFaqs => 200,
            Self::FetchTestimonials | Self::FetchClients => 250,
            Self::FetchPosts
            | Self::FetchPostsByCategory
            | Self::FetchRecommendedPosts
            | Self::FetchTeamMembers
            | Self::DemoPosts => 300,
            Self::FetchGalleryItems | Self::DemoGalleryItems => 350,
            Self::SearchPosts => 400,
            Self::SubscribeNewsletter => 500,
            Self::SubmitContactForm => 1000,
        }
    }

    /// 操作名，用于日志和指标标签
    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchPosts => "fetch_posts",
            Self::FetchPostsByCategory => "fetch_posts_by_category",
            Self::FetchPostBySlug => "fetch_post_by_slug",
            Self::FetchRecommendedPosts => "fetch_recommended_posts_by_slug",
            Self::FetchCategories => "fetch_categories",
            Self::SearchPosts => "search_posts",
            Self::FetchTeamMembers => "fetch_team_members",
            Self::FetchDepartments => "fetch_departments",
            Self::FetchGalleryItems => "fetch_gallery_items",
            Self::FetchGalleryCategories => "fetch_gallery_categories",
            Self::FetchTestimonials => "fetch_testimonials",
            Self::FetchServices => "fetch_services",
            Self::FetchContactInfo => "fetch_contact_info",
            Self::FetchCompanyStats => "fetch_company_stats",
            Self::FetchFaqs => "fetch_faqs",
            Self::FetchClients => "fetch_clients",
            Self::SubmitContactForm => "submit_contact_form",
            Self::SubscribeNewsletter => "subscribe_newsletter",
            Self::DemoPosts => "demo_get_posts",
            Self::DemoGalleryItems => "demo_get_gallery_items",
        }
    }
}

/// 延迟模拟器
///
/// `scale` 作用于所有基础延迟，0 表示关闭延迟
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencySimulator {
    scale: f64,
}

impl Default for LatencySimulator {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl LatencySimulator {
    /// 负数和非有限值按 0 处理
    pub fn new(scale: f64) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            0.0
        };
        Self { scale }
    }

    /// 不等待的模拟器，测试和批量填充时使用
    pub fn disabled() -> Self {
        Self { scale: 0.0 }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn is_disabled(&self) -> bool {
        self.scale == 0.0
    }

    /// 计算操作的实际延迟，溢出时取 `Duration::MAX`
    pub fn delay_for(&self, operation: Operation) -> Duration {
        if self.is_disabled() {
            return Duration::ZERO;
        }
        let secs = Duration::from_millis(operation.base_delay_ms()).as_secs_f64() * self.scale;
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }

    /// 等待操作对应的延迟
    pub async fn simulate(&self, operation: Operation) {
        let delay = self.delay_for(operation);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_delays() {
        assert_eq!(Operation::FetchPosts.base_delay_ms(), 300);
        assert_eq!(Operation::FetchPostBySlug.base_delay_ms(), 200);
        assert_eq!(Operation::FetchCategories.base_delay_ms(), 100);
        assert_eq!(Operation::SearchPosts.base_delay_ms(), 400);
        assert_eq!(Operation::FetchGalleryItems.base_delay_ms(), 350);
        assert_eq!(Operation::FetchClients.base_delay_ms(), 250);
        assert_eq!(Operation::FetchContactInfo.base_delay_ms(), 150);
        assert_eq!(Operation::SubscribeNewsletter.base_delay_ms(), 500);
        assert_eq!(Operation::SubmitContactForm.base_delay_ms(), 1000);
        assert_eq!(Operation::DemoGalleryItems.base_delay_ms(), 350);
    }

    #[test]
    fn test_scale() {
        let half = LatencySimulator::new(0.5);
        assert_eq!(
            half.delay_for(Operation::SubmitContactForm),
            Duration::from_millis(500)
        );

        let default = LatencySimulator::default();
        assert_eq!(
            default.delay_for(Operation::FetchPosts),
            Duration::from_millis(300)
        );
    }

    #[test]
    fn test_disabled_and_invalid_scale() {
        assert!(LatencySimulator::disabled().is_disabled());
        assert!(LatencySimulator::new(-1.0).is_disabled());
        assert!(LatencySimulator::new(f64::NAN).is_disabled());
        assert_eq!(
            LatencySimulator::new(0.0).delay_for(Operation::SubmitContactForm),
            Duration::ZERO
        );
    }

    #[test]
    fn test_huge_scale_saturates() {
        let simulator = LatencySimulator::new(1e20);
        assert_eq!(
            simulator.delay_for(Operation::SubmitContactForm),
            Duration::MAX
        );
        assert_eq!(
            LatencySimulator::new(f64::MAX).delay_for(Operation::FetchPosts),
            Duration::MAX
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulate_sleeps_for_delay() {
        let start = tokio::time::Instant::now();
        LatencySimulator::default()
            .simulate(Operation::FetchContactInfo)
            .await;
        assert!(start.elapsed() >= Duration::from_millis(150));
    }
}
