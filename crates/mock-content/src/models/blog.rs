//! 博客文章模型
//!
//! 博客站点使用的文章结构，阅读时长由正文字数推导。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ContentRecord;

/// 阅读速度（每分钟字数）
pub const WORDS_PER_MINUTE: usize = 200;

/// 博客文章
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author: PostAuthor,
    pub cover_image: String,
    pub published_at: DateTime<Utc>,
    /// 预计阅读分钟数，至少为 1
    pub reading_time: u32,
    pub views: u32,
    pub likes: u32,
}

/// 文章作者
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostAuthor {
    pub name: String,
    pub avatar: String,
    pub bio: String,
}

/// 文章字段覆盖
///
/// 仅 `Some` 的字段会替换生成值。覆盖了正文但未覆盖阅读时长时，
/// 阅读时长按新正文重新计算。
#[derive(Debug, Clone, Default)]
pub struct BlogPostOverrides {
    pub id: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub author: Option<PostAuthor>,
    pub cover_image: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub reading_time: Option<u32>,
    pub views: Option<u32>,
    pub likes: Option<u32>,
}

impl BlogPostOverrides {
    /// 只覆盖 slug
    pub fn with_slug(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Default::default()
        }
    }

    /// 只覆盖分类
    pub fn with_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Default::default()
        }
    }

    /// 将覆盖值写入文章
    pub fn apply(self, post: &mut BlogPost) {
        let recompute_reading_time = self.content.is_some() && self.reading_time.is_none();

        apply_overrides!(self, post;
            id, slug, title, excerpt, content, category, tags, author,
            cover_image, published_at, reading_time, views, likes,
        );

        if recompute_reading_time {
            post.reading_time = estimate_reading_time(&post.content);
        }
    }
}

/// 按每分钟 200 字估算阅读时长
///
/// 字数按单个空格切分统计，结果向上取整且不小于 1 分钟。
pub fn estimate_reading_time(content: &str) -> u32 {
    let word_count = word_count(content);
    word_count.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}

/// 按单个空格切分的字数
pub fn word_count(content: &str) -> usize {
    content.split(' ').count()
}

impl ContentRecord for BlogPost {
    const KIND: &'static str = "blog_posts";

    fn id(&self) -> &str {
        &self.id
    }

    fn key(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
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
            self.category.as_str(),
        ];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> BlogPost {
        BlogPost {
            id: "post-1".to_string(),
            slug: "hello-world".to_string(),
            title: "Hello world".to_string(),
            excerpt: "Short".to_string(),
            content: "one two three".to_string(),
            category: "Technology".to_string(),
            tags: vec!["rust".to_string()],
            author: PostAuthor {
                name: "Ada".to_string(),
                avatar: "https://example.com/a.png".to_string(),
                bio: "Writer".to_string(),
            },
            cover_image: "https://example.com/cover.png".to_string(),
            published_at: Utc::now(),
            reading_time: 1,
            views: 100,
            likes: 10,
        }
    }

    #[test]
    fn test_estimate_reading_time() {
        assert_eq!(estimate_reading_time(""), 1);
        assert_eq!(estimate_reading_time("word"), 1);

        let exactly_200 = vec!["w"; 200].join(" ");
        assert_eq!(estimate_reading_time(&exactly_200), 1);

        let just_over = vec!["w"; 201].join(" ");
        assert_eq!(estimate_reading_time(&just_over), 2);
    }

    #[test]
    fn test_word_count_splits_on_single_spaces() {
        // 段落分隔符不是空格，两侧的词计为一个
        assert_eq!(word_count("end.\n\nStart here"), 2);
        assert_eq!(word_count("a  b"), 3);
    }

    #[test]
    fn test_overrides_replace_only_present_fields() {
        let mut post = sample_post();
        BlogPostOverrides {
            slug: Some("custom-slug".to_string()),
            views: Some(7),
            ..Default::default()
        }
        .apply(&mut post);

        assert_eq!(post.slug, "custom-slug");
        assert_eq!(post.views, 7);
        assert_eq!(post.title, "Hello world");
        assert_eq!(post.likes, 10);
    }

    #[test]
    fn test_content_override_recomputes_reading_time() {
        let mut post = sample_post();
        let long_content = vec!["word"; 450].join(" ");
        BlogPostOverrides {
            content: Some(long_content),
            ..Default::default()
        }
        .apply(&mut post);
        assert_eq!(post.reading_time, 3);

        // 显式覆盖的阅读时长优先
        let mut post = sample_post();
        BlogPostOverrides {
            content: Some(vec!["word"; 450].join(" ")),
            reading_time: Some(9),
            ..Default::default()
        }
        .apply(&mut post);
        assert_eq!(post.reading_time, 9);
    }

    #[test]
    fn test_content_record_impl() {
        let post = sample_post();
        assert_eq!(post.key(), "hello-world");
        assert_eq!(post.category(), Some("Technology"));
        assert!(post.search_fields().contains(&"rust"));
    }
}
