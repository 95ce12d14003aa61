//! 存储上下文
//!
//! 各服务状态共享同一个生成器和延迟模拟器。

use content_shared::config::StoreConfig;
use content_shared::observability::metrics;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info};

use super::pool::CachePool;
use crate::generators::ContentGenerator;
use crate::latency::{LatencySimulator, Operation};

/// 存储上下文
///
/// 生成器放在互斥锁后面，锁只在同步的生成过程中持有，不跨越 `.await`
#[derive(Clone)]
pub struct StoreContext {
    generator: Arc<Mutex<ContentGenerator>>,
    latency: LatencySimulator,
}

impl Default for StoreContext {
    fn default() -> Self {
        Self::new(ContentGenerator::new(), LatencySimulator::default())
    }
}

impl StoreContext {
    pub fn new(generator: ContentGenerator, latency: LatencySimulator) -> Self {
        Self {
            generator: Arc::new(Mutex::new(generator)),
            latency,
        }
    }

    /// 按配置创建：有种子时使用固定种子
    pub fn from_config(config: &StoreConfig) -> Self {
        let generator = match config.seed {
            Some(seed) => ContentGenerator::with_seed(seed),
            None => ContentGenerator::new(),
        };
        Self::new(generator, LatencySimulator::new(config.latency_scale))
    }

    /// 固定种子且无延迟，测试使用
    pub fn seeded(seed: u64) -> Self {
        Self::new(
            ContentGenerator::with_seed(seed),
            LatencySimulator::disabled(),
        )
    }

    pub fn latency(&self) -> LatencySimulator {
        self.latency
    }

    /// 进入一个内容操作：记录日志与指标，然后等待模拟延迟
    pub async fn enter(&self, operation: Operation) {
        debug!(operation = operation.name(), "处理内容请求");
        metrics::record_content_query(operation.name());
        self.latency.simulate(operation).await;
    }

    /// 独占生成器执行一段同步生成逻辑
    pub fn with_generator<R>(&self, f: impl FnOnce(&mut ContentGenerator) -> R) -> R {
        let mut generator = self.generator.lock();
        f(&mut generator)
    }

    /// 获取内容池，首次访问时生成全部记录
    ///
    /// `make` 接收生成器和记录序号
    pub fn fill_pool<T, F>(&self, pool: &CachePool<T>, mut make: F) -> Arc<[T]>
    where
        F: FnMut(&mut ContentGenerator, usize) -> T,
    {
        pool.get_or_init(|size| {
            let records: Vec<T> =
                self.with_generator(|generator| (0..size).map(|i| make(generator, i)).collect());

            info!(kind = pool.kind(), size = records.len(), "内容池初始化完成");
            metrics::record_pool_initialization(pool.kind(), records.len());
            records
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BlogPostOverrides;

    #[test]
    fn test_fill_pool_generates_once() {
        let context = StoreContext::seeded(9);
        let pool = CachePool::new("blog_posts", 10);

        let first = context.fill_pool(&pool, |g, _| g.blog_post(BlogPostOverrides::default()));
        let second = context.fill_pool(&pool, |g, _| g.blog_post(BlogPostOverrides::default()));

        assert_eq!(first.len(), 10);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_from_config_uses_seed() {
        let config = StoreConfig {
            seed: Some(5),
            latency_scale: 0.0,
            warm_on_start: false,
        };

        let a = StoreContext::from_config(&config).with_generator(|g| g.uuid());
        let b = StoreContext::from_config(&config).with_generator(|g| g.uuid());
        assert_eq!(a, b);
        assert!(StoreContext::from_config(&config).latency().is_disabled());
    }
}
