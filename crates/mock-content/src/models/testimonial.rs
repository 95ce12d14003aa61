//! 客户评价模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ContentRecord;

/// 客户评价
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub author: TestimonialAuthor,
    pub content: String,
    /// 评分 4.0 - 5.0，保留一位小数
    pub rating: f64,
    pub date: DateTime<Utc>,
    pub featured: bool,
}

/// 评价作者
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialAuthor {
    pub name: String,
    pub role: String,
    pub company: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Default)]
pub struct TestimonialOverrides {
    pub id: Option<String>,
    pub author: Option<TestimonialAuthor>,
    pub content: Option<String>,
    pub rating: Option<f64>,
    pub date: Option<DateTime<Utc>>,
    pub featured: Option<bool>,
}

impl TestimonialOverrides {
    pub fn apply(self, testimonial: &mut Testimonial) {
        apply_overrides!(self, testimonial; id, author, content, rating, date, featured);
    }
}

impl ContentRecord for Testimonial {
    const KIND: &'static str = "testimonials";

    fn id(&self) -> &str {
        &self.id
    }

    fn is_featured(&self) -> bool {
        self.featured
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.date)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.content.as_str(),
            self.author.name.as_str(),
            self.author.company.as_str(),
        ]
    }
}
