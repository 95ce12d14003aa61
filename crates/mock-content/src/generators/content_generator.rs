//! 内容生成器
//!
//! 基于 fake 生成各类模拟内容。随机源通过构造函数注入，
//! 相同种子在相同调用序列下生成完全相同的记录（时间戳相对于锚点时间）。

use chrono::{DateTime, Duration, Utc};
use fake::faker::address::en::{BuildingNumber, CityName, StateName, StreetName, ZipCode};
use fake::faker::company::en::{Bs, BuzzwordMiddle, BuzzwordTail, CatchPhrase, CompanyName};
use fake::faker::internet::en::{DomainSuffix, SafeEmail, Username};
use fake::faker::job::en::Title as JobTitle;
use fake::faker::lorem::en::{Paragraph, Paragraphs, Sentence};
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::uuid::UUIDv4;
use fake::{Dummy, Fake};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use uuid::Uuid;

use super::text::{as_question, slugify};
use super::vocabulary::{
    BLOG_CATEGORIES, BLOG_TAGS, DEMO_POST_TAGS, DEPARTMENTS, FAQ_CATEGORIES, GalleryVocabulary,
    SERVICE_ICONS, SERVICE_NAMES, SKILLS,
};
use crate::models::blog::estimate_reading_time;
use crate::models::{
    Address, BillingPeriod, BlogPost, BlogPostOverrides, BusinessHours, Client, ClientOverrides,
    CompanyStats, ContactInfo, DemoAuthor, DemoPost, DemoPostOverrides, Faq, FaqOverrides,
    GalleryItem, GalleryItemOverrides, PostAuthor, Service, ServiceOverrides, ServicePrice,
    SocialMedia, TeamMember, TeamMemberOverrides, Testimonial, TestimonialAuthor,
    TestimonialOverrides,
};

// 可选字段的生成概率
pub const LINKEDIN_PROBABILITY: f64 = 0.8;
pub const TWITTER_PROBABILITY: f64 = 0.6;
pub const GITHUB_PROBABILITY: f64 = 0.7;
pub const SERVICE_PRICE_PROBABILITY: f64 = 0.7;

// 布尔标记为 true 的概率
pub const GALLERY_FEATURED_PROBABILITY: f64 = 0.2;
pub const TESTIMONIAL_FEATURED_PROBABILITY: f64 = 0.3;
pub const SERVICE_POPULAR_PROBABILITY: f64 = 0.25;
pub const CLIENT_FEATURED_PROBABILITY: f64 = 0.3;

/// 内容生成器
///
/// 持有注入的随机源和时间锚点，生成是全函数，不会失败
pub struct ContentGenerator {
    rng: StdRng,
    anchor: DateTime<Utc>,
}

impl Default for ContentGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentGenerator {
    /// 使用系统熵创建生成器
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// 使用固定种子创建生成器，用于可复现的测试
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            anchor: Utc::now(),
        }
    }

    /// 指定时间锚点，所有“最近 N 天”的时间都相对该时间生成
    pub fn with_anchor(mut self, anchor: DateTime<Utc>) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn anchor(&self) -> DateTime<Utc> {
        self.anchor
    }

    /// 访问底层随机源
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    // ========================================================================
    // 基础随机原语
    // ========================================================================

    fn fake<U, F>(&mut self, faker: F) -> U
    where
        U: Dummy<F>,
    {
        faker.fake_with_rng(&mut self.rng)
    }

    /// 按概率生成可选值
    pub fn maybe<T>(&mut self, probability: f64, f: impl FnOnce(&mut Self) -> T) -> Option<T> {
        if self.rng.random_bool(probability) {
            Some(f(self))
        } else {
            None
        }
    }

    /// 生成 UUID v4 字符串
    pub fn uuid(&mut self) -> String {
        let id: Uuid = self.fake(UUIDv4);
        id.to_string()
    }

    /// 从候选值中随机取一个
    pub fn pick(&mut self, items: &[&str]) -> String {
        items
            .choose(&mut self.rng)
            .map(|item| item.to_string())
            .unwrap_or_default()
    }

    /// 从候选值中随机取若干个不重复的值
    ///
    /// 数量在 `count` 范围内随机，超过候选数量时取全部
    pub fn pick_many(&mut self, items: &[&str], count: RangeInclusive<usize>) -> Vec<String> {
        let amount = self.rng.random_range(count).min(items.len());
        items
            .choose_multiple(&mut self.rng, amount)
            .map(|item| item.to_string())
            .collect()
    }

    /// 锚点时间之前 `days` 天内的随机时间
    pub fn recent(&mut self, days: i64) -> DateTime<Utc> {
        let window_ms = days.max(1) * 24 * 60 * 60 * 1000;
        let offset_ms = self.rng.random_range(0..window_ms);
        self.anchor - Duration::milliseconds(offset_ms)
    }

    fn avatar(&mut self) -> String {
        format!(
            "https://avatars.githubusercontent.com/u/{}",
            self.rng.random_range(1..100_000_000u32)
        )
    }

    fn picsum(&mut self, width: u32, height: u32) -> String {
        format!(
            "https://picsum.photos/seed/{:08x}/{}/{}",
            self.rng.random::<u32>(),
            width,
            height
        )
    }

    fn username(&mut self) -> String {
        self.fake(Username())
    }

    fn lorem_paragraphs(&mut self, count: std::ops::Range<usize>) -> String {
        let paragraphs: Vec<String> = self.fake(Paragraphs(count));
        paragraphs.join("\n\n")
    }

    // ========================================================================
    // 博客
    // ========================================================================

    /// 生成博客文章
    ///
    /// 先生成标题再推导 slug，阅读时长由正文字数推导
    pub fn blog_post(&mut self, overrides: BlogPostOverrides) -> BlogPost {
        let title: String = self.fake(Sentence(3..9));
        let slug = slugify(&title);
        let content = self.lorem_paragraphs(8..16);
        let reading_time = estimate_reading_time(&content);

        let mut post = BlogPost {
            id: self.uuid(),
            slug,
            title,
            excerpt: self.fake(Paragraph(2..5)),
            content,
            category: self.pick(&BLOG_CATEGORIES),
            tags: self.pick_many(&BLOG_TAGS, 2..=5),
            author: PostAuthor {
                name: self.fake(Name()),
                avatar: self.avatar(),
                bio: self.fake(Sentence(5..11)),
            },
            cover_image: self.picsum(1200, 630),
            published_at: self.recent(90),
            reading_time,
            views: self.rng.random_range(100..=50_000),
            likes: self.rng.random_range(10..=5_000),
        };

        overrides.apply(&mut post);
        post
    }

    /// 生成演示站点文章
    pub fn demo_post(&mut self, overrides: DemoPostOverrides) -> DemoPost {
        let title: String = self.fake(Sentence(3..9));
        let slug = slugify(&title);

        let mut post = DemoPost {
            id: self.uuid(),
            slug,
            title,
            excerpt: self.fake(Paragraph(2..4)),
            content: self.lorem_paragraphs(5..11),
            author: DemoAuthor {
                name: self.fake(Name()),
                avatar: self.avatar(),
            },
            cover_image: self.picsum(1200, 630),
            published_at: self.recent(90),
            tags: self.pick_many(&DEMO_POST_TAGS, 2..=4),
        };

        overrides.apply(&mut post);
        post
    }

    // ========================================================================
    // 品牌站点
    // ========================================================================

    /// 生成团队成员，社交链接按各自概率独立生成
    pub fn team_member(&mut self, overrides: TeamMemberOverrides) -> TeamMember {
        let mut member = TeamMember {
            id: self.uuid(),
            name: self.fake(Name()),
            role: self.fake(JobTitle()),
            department: self.pick(&DEPARTMENTS),
            avatar: self.avatar(),
            bio: self.fake(Paragraph(2..5)),
            email: self.fake(SafeEmail()),
            linkedin: self.maybe(LINKEDIN_PROBABILITY, |g| {
                format!("https://linkedin.com/in/{}", g.username())
            }),
            twitter: self.maybe(TWITTER_PROBABILITY, |g| {
                format!("https://twitter.com/{}", g.username())
            }),
            github: self.maybe(GITHUB_PROBABILITY, |g| {
                format!("https://github.com/{}", g.username())
            }),
            years_of_experience: self.rng.random_range(1..=20),
            skills: self.pick_many(&SKILLS, 3..=8),
        };

        overrides.apply(&mut member);
        member
    }

    /// 按给定词表生成图库条目
    pub fn gallery_item(
        &mut self,
        vocabulary: &GalleryVocabulary,
        overrides: GalleryItemOverrides,
    ) -> GalleryItem {
        let mut item = GalleryItem {
            id: self.uuid(),
            title: self.fake(CatchPhrase()),
            description: self.fake(Paragraph(3..4)),
            image_url: self.picsum(1200, 800),
            thumbnail_url: self.picsum(400, 300),
            category: self.pick(vocabulary.categories),
            tags: self.pick_many(vocabulary.tags, 2..=4),
            created_at: self.recent(365),
            featured: self.rng.random_bool(GALLERY_FEATURED_PROBABILITY),
        };

        overrides.apply(&mut item);
        item
    }

    pub fn testimonial(&mut self, overrides: TestimonialOverrides) -> Testimonial {
        let mut testimonial = Testimonial {
            id: self.uuid(),
            author: TestimonialAuthor {
                name: self.fake(Name()),
                role: self.fake(JobTitle()),
                company: self.fake(CompanyName()),
                avatar: self.avatar(),
            },
            content: self.fake(Paragraph(3..7)),
            rating: f64::from(self.rng.random_range(40..=50u8)) / 10.0,
            date: self.recent(180),
            featured: self.rng.random_bool(TESTIMONIAL_FEATURED_PROBABILITY),
        };

        overrides.apply(&mut testimonial);
        testimonial
    }

    /// 生成服务项目
    ///
    /// 约 70% 带报价，25% 标记为热门
    pub fn service(&mut self, overrides: ServiceOverrides) -> Service {
        let has_price = self.rng.random_bool(SERVICE_PRICE_PROBABILITY);
        let feature_count = self.rng.random_range(3..=6);

        let mut service = Service {
            id: self.uuid(),
            name: self.pick(&SERVICE_NAMES),
            description: format!(
                "{}. {}",
                self.fake::<String, _>(Bs()),
                self.fake::<String, _>(Paragraph(3..4))
            ),
            icon: self.pick(&SERVICE_ICONS),
            features: (0..feature_count)
                .map(|_| {
                    format!(
                        "{} {}",
                        self.fake::<String, _>(BuzzwordMiddle()),
                        self.fake::<String, _>(BuzzwordTail())
                    )
                })
                .collect(),
            price: has_price.then(|| ServicePrice {
                amount: self.rng.random_range(99..=9_999),
                currency: "USD".to_string(),
                period: BillingPeriod::ALL.choose(&mut self.rng).copied(),
            }),
            popular: self.rng.random_bool(SERVICE_POPULAR_PROBABILITY),
        };

        overrides.apply(&mut service);
        service
    }

    /// 生成 FAQ，`order` 为展示顺序
    pub fn faq(&mut self, order: u32, overrides: FaqOverrides) -> Faq {
        let sentence: String = self.fake(Sentence(4..10));

        let mut faq = Faq {
            id: self.uuid(),
            question: as_question(&sentence),
            answer: self.fake(Paragraph(2..5)),
            category: self.pick(&FAQ_CATEGORIES),
            order,
        };

        overrides.apply(&mut faq);
        faq
    }

    pub fn client(&mut self, overrides: ClientOverrides) -> Client {
        let name: String = self.fake(CompanyName());
        let domain_suffix: String = self.fake(DomainSuffix());
        let website = format!("https://www.{}.{}", slugify(&name), domain_suffix);

        let mut client = Client {
            id: self.uuid(),
            name,
            logo: self.picsum(200, 100),
            website,
            description: self.fake(CatchPhrase()),
            featured: self.rng.random_bool(CLIENT_FEATURED_PROBABILITY),
        };

        overrides.apply(&mut client);
        client
    }

    /// 生成公司联系方式
    pub fn contact_info(&mut self) -> ContactInfo {
        let mailbox = self.username().to_lowercase();
        let building: String = self.fake(BuildingNumber());
        let street: String = self.fake(StreetName());

        ContactInfo {
            email: format!("{}@company.com", mailbox),
            phone: self.fake(PhoneNumber()),
            address: Address {
                street: format!("{} {}", building, street),
                city: self.fake(CityName()),
                state: self.fake(StateName()),
                country: "United States".to_string(),
                zip_code: self.fake(ZipCode()),
            },
            social_media: SocialMedia {
                twitter: Some("https://twitter.com/company".to_string()),
                linkedin: Some("https://linkedin.com/company/company".to_string()),
                facebook: Some("https://facebook.com/company".to_string()),
                instagram: Some("https://instagram.com/company".to_string()),
                youtube: Some("https://youtube.com/company".to_string()),
                github: Some("https://github.com/company".to_string()),
            },
            business_hours: BusinessHours::standard(),
        }
    }

    pub fn company_stats(&mut self) -> CompanyStats {
        CompanyStats {
            employee_count: self.rng.random_range(50..=500),
            projects_completed: self.rng.random_range(100..=1_000),
            years_in_business: self.rng.random_range(5..=25),
            client_count: self.rng.random_range(50..=300),
            countries_served: self.rng.random_range(10..=50),
            satisfaction_rate: f64::from(self.rng.random_range(950..=999u16)) / 10.0,
        }
    }
}
