//! 演示站点文章模型
//!
//! 通用演示应用使用的简化文章结构，没有分类和阅读统计。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ContentRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: DemoAuthor,
    pub cover_image: String,
    pub published_at: DateTime<Utc>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoAuthor {
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Default)]
pub struct DemoPostOverrides {
    pub id: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author: Option<DemoAuthor>,
    pub cover_image: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub tags: Option<Vec<String>>,
}

impl DemoPostOverrides {
    pub fn apply(self, post: &mut DemoPost) {
        apply_overrides!(self, post;
            id, slug, title, excerpt, content, author, cover_image, published_at, tags,
        );
    }
}

impl ContentRecord for DemoPost {
    const KIND: &'static str = "demo_posts";

    fn id(&self) -> &str {
        &self.id
    }

    fn key(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.published_at)
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.excerpt.as_str(),
            self.content.as_str(),
        ];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}
