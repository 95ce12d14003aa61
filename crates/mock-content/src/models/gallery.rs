//! 图库条目模型
//!
//! 品牌站点与演示站点共用同一结构，两者只是分类和标签词表不同。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ContentRecord;

/// 图库条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub thumbnail_url: String,
    pub category: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub featured: bool,
}

/// 图库条目字段覆盖
#[derive(Debug, Clone, Default)]
pub struct GalleryItemOverrides {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub created_at: Option<DateTime<Utc>>,
    pub featured: Option<bool>,
}

impl GalleryItemOverrides {
    pub fn apply(self, item: &mut GalleryItem) {
        apply_overrides!(self, item;
            id, title, description, image_url, thumbnail_url,
            category, tags, created_at, featured,
        );
    }
}

impl ContentRecord for GalleryItem {
    const KIND: &'static str = "gallery_items";

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn is_featured(&self) -> bool {
        self.featured
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.description.as_str(),
            self.category.as_str(),
        ];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}
