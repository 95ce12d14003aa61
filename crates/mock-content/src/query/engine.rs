//! 查询引擎
//!
//! 按固定顺序处理内容池：过滤 → 排序 → 分页。
//! 排序都是稳定排序，比较结果相同的记录保持池中的生成顺序。
//! 查询不会修改池本身。

use rand::Rng;
use rand::seq::SliceRandom;
use std::cmp::Ordering;
use std::collections::HashSet;

use super::params::QueryParams;
use crate::models::ContentRecord;

/// 标题命中搜索词时的加分
pub const TITLE_MATCH_BONUS: usize = 10;

/// 与参考记录同分类时的相关度加分
pub const SAME_CATEGORY_SCORE: usize = 10;

/// 判断记录是否满足过滤条件
pub fn matches<T: ContentRecord>(record: &T, params: &QueryParams) -> bool {
    if let Some(ref category) = params.category {
        let same = record
            .category()
            .is_some_and(|c| c.to_lowercase() == category.to_lowercase());
        if !same {
            return false;
        }
    }

    if params.featured_only && !record.is_featured() {
        return false;
    }

    if let Some(ref query) = params.search {
        let query = query.to_lowercase();
        if !record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
        {
            return false;
        }
    }

    true
}

/// 过滤
pub fn filter<'a, T: ContentRecord>(pool: &'a [T], params: &QueryParams) -> Vec<&'a T> {
    pool.iter().filter(|record| matches(*record, params)).collect()
}

/// 先跳过 `offset` 条再取 `limit` 条
pub fn paginate<T: Clone>(records: &[&T], offset: usize, limit: usize) -> Vec<T> {
    records
        .iter()
        .skip(offset)
        .take(limit)
        .map(|record| (*record).clone())
        .collect()
}

/// 过滤、排序并分页
pub fn execute<T, F>(pool: &[T], params: &QueryParams, mut compare: F) -> Vec<T>
where
    T: ContentRecord,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut records = filter(pool, params);
    records.sort_by(|a, b| compare(a, b));
    paginate(&records, params.offset, params.limit)
}

// ============================================================================
// 比较器
// ============================================================================

/// 时间倒序
pub fn newest_first<T: ContentRecord>(a: &T, b: &T) -> Ordering {
    b.timestamp().cmp(&a.timestamp())
}

/// 精选在前，之后按名称升序
pub fn featured_then<T: ContentRecord>(
    a: &T,
    b: &T,
    then: impl FnOnce(&T, &T) -> Ordering,
) -> Ordering {
    b.is_featured()
        .cmp(&a.is_featured())
        .then_with(|| then(a, b))
}

// ============================================================================
// 推荐与搜索
// ============================================================================

/// 候选记录与参考记录的相关度
///
/// 同分类（区分大小写）加 10 分，每个共同标签加 1 分
pub fn relevance_score<T: ContentRecord>(candidate: &T, reference: &T) -> usize {
    let category_score = match (candidate.category(), reference.category()) {
        (Some(a), Some(b)) if a == b => SAME_CATEGORY_SCORE,
        _ => 0,
    };

    let shared_tags = candidate
        .tags()
        .iter()
        .filter(|tag| reference.tags().contains(tag))
        .count();

    category_score + shared_tags
}

/// 相关推荐
///
/// 同分类或有共同标签的记录按相关度倒序取前 `limit` 条；
/// 不足时从剩余记录（排除已选和参考记录本身）中随机补齐。
pub fn recommend<T, R>(pool: &[T], reference: &T, limit: usize, rng: &mut R) -> Vec<T>
where
    T: ContentRecord,
    R: Rng + ?Sized,
{
    let mut scored: Vec<(usize, &T)> = pool
        .iter()
        .filter(|record| record.key() != reference.key())
        .map(|record| (relevance_score(record, reference), record))
        .filter(|(score, _)| *score > 0)
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    let mut selected: Vec<T> = scored
        .into_iter()
        .take(limit)
        .map(|(_, record)| record.clone())
        .collect();

    if selected.len() < limit {
        let chosen: HashSet<&str> = selected.iter().map(ContentRecord::key).collect();
        let mut rest: Vec<&T> = pool
            .iter()
            .filter(|record| record.key() != reference.key() && !chosen.contains(record.key()))
            .collect();
        rest.shuffle(rng);

        let missing = limit - selected.len();
        let filler: Vec<T> = rest.into_iter().take(missing).cloned().collect();
        selected.extend(filler);
    }

    selected
}

/// 随机打乱后截取
pub fn random_sample<T, R>(pool: &[T], limit: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut records: Vec<&T> = pool.iter().collect();
    records.shuffle(rng);
    records.into_iter().take(limit).cloned().collect()
}

/// 全文搜索
///
/// 标题命中的记录排在前面，同组内按时间倒序
pub fn search<T: ContentRecord>(pool: &[T], query: &str, limit: usize) -> Vec<T> {
    let lower_query = query.to_lowercase();
    let title_bonus = |record: &T| {
        if record
            .title()
            .is_some_and(|title| title.to_lowercase().contains(&lower_query))
        {
            TITLE_MATCH_BONUS
        } else {
            0
        }
    };

    let params = QueryParams::new(limit).search(query);
    execute(pool, &params, |a, b| {
        title_bonus(b)
            .cmp(&title_bonus(a))
            .then_with(|| newest_first(a, b))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        title: String,
        category: String,
        tags: Vec<String>,
        featured: bool,
        at: DateTime<Utc>,
    }

    impl ContentRecord for Item {
        const KIND: &'static str = "items";

        fn id(&self) -> &str {
            &self.id
        }

        fn title(&self) -> Option<&str> {
            Some(&self.title)
        }

        fn category(&self) -> Option<&str> {
            Some(&self.category)
        }

        fn is_featured(&self) -> bool {
            self.featured
        }

        fn timestamp(&self) -> Option<DateTime<Utc>> {
            Some(self.at)
        }

        fn tags(&self) -> &[String] {
            &self.tags
        }

        fn search_fields(&self) -> Vec<&str> {
            let mut fields = vec![self.title.as_str(), self.category.as_str()];
            fields.extend(self.tags.iter().map(String::as_str));
            fields
        }
    }

    fn item(id: &str, title: &str, category: &str, tags: &[&str], hours_ago: i64) -> Item {
        Item {
            id: id.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            featured: false,
            at: Utc::now() - Duration::hours(hours_ago),
        }
    }

    fn pool() -> Vec<Item> {
        vec![
            item("a", "Learning Rust", "Technology", &["rust", "guide"], 5),
            item("b", "Design systems", "Design", &["css", "guide"], 1),
            item("c", "Rust at scale", "Engineering", &["rust"], 3),
            item("d", "Quarterly report", "Business", &["finance"], 2),
            item("e", "Tech radar", "Technology", &["radar"], 4),
        ]
    }

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_execute_filters_sorts_and_paginates() {
        let pool = pool();

        let all = execute(&pool, &QueryParams::new(10), newest_first);
        assert_eq!(ids(&all), vec!["b", "d", "c", "e", "a"]);

        let page = execute(&pool, &QueryParams::new(2).offset(1), newest_first);
        assert_eq!(ids(&page), vec!["d", "c"]);

        let tech = execute(
            &pool,
            &QueryParams::new(10).category(Some("technology")),
            newest_first,
        );
        assert_eq!(ids(&tech), vec!["e", "a"]);

        let beyond = execute(&pool, &QueryParams::new(10).offset(10), newest_first);
        assert!(beyond.is_empty());
    }

    #[test]
    fn test_featured_only() {
        let mut pool = pool();
        pool[2].featured = true;
        let featured = execute(&pool, &QueryParams::new(10).featured_only(true), newest_first);
        assert_eq!(ids(&featured), vec!["c"]);
    }

    #[test]
    fn test_featured_then_name() {
        let mut pool = pool();
        pool[4].featured = true;
        pool[0].featured = true;
        let sorted = execute(&pool, &QueryParams::new(10), |a, b| {
            featured_then(a, b, |a, b| a.title.cmp(&b.title))
        });
        assert_eq!(ids(&sorted), vec!["a", "e", "b", "d", "c"]);
    }

    #[test]
    fn test_stable_sort_keeps_pool_order() {
        let pool = pool();
        let sorted = execute(&pool, &QueryParams::new(10), |_, _| Ordering::Equal);
        assert_eq!(ids(&sorted), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_relevance_score() {
        let pool = pool();
        assert_eq!(relevance_score(&pool[4], &pool[0]), 10);
        assert_eq!(relevance_score(&pool[2], &pool[0]), 1);
        assert_eq!(relevance_score(&pool[1], &pool[0]), 1);
        assert_eq!(relevance_score(&pool[3], &pool[0]), 0);

        // 分类比较区分大小写
        let lower = item("x", "x", "technology", &[], 0);
        assert_eq!(relevance_score(&lower, &pool[0]), 0);
    }

    #[test]
    fn test_recommend_ranks_then_tops_up() {
        let pool = pool();
        let mut rng = StdRng::seed_from_u64(1);

        let related = recommend(&pool, &pool[0], 2, &mut rng);
        assert_eq!(ids(&related), vec!["e", "b"]);

        let topped_up = recommend(&pool, &pool[0], 10, &mut rng);
        assert_eq!(topped_up.len(), 4);
        assert_eq!(ids(&topped_up[..3]), vec!["e", "b", "c"]);
        assert_eq!(topped_up[3].id, "d");
        assert!(topped_up.iter().all(|i| i.id != "a"));
    }

    #[test]
    fn test_random_sample() {
        let pool = pool();
        let mut rng = StdRng::seed_from_u64(2);
        let sample = random_sample(&pool, 3, &mut rng);
        assert_eq!(sample.len(), 3);
        let unique: HashSet<&str> = sample.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_search_title_matches_first() {
        let pool = pool();
        let results = search(&pool, "RUST", 10);
        assert_eq!(ids(&results), vec!["c", "a"]);

        let results = search(&pool, "guide", 10);
        assert_eq!(ids(&results), vec!["b", "a"]);

        // 标签命中但标题未命中的排在标题命中之后
        let results = search(&pool, "tech", 10);
        assert_eq!(ids(&results), vec!["e", "a"]);

        assert!(search(&pool, "nothing-matches", 10).is_empty());
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let pool = pool();
        assert_eq!(search(&pool, "", 10).len(), pool.len());
    }
}
