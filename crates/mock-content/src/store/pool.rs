//! 内容池
//!
//! 每种内容对应一个固定大小的池，首次访问时生成，之后只读复用。

use std::fmt;
use std::sync::{Arc, OnceLock};

/// 惰性初始化的内容池
///
/// 初始化只会执行一次：并发的首次访问者会等待唯一的初始化者完成，
/// 随后所有访问者拿到同一个池。池没有失效或清理操作。
pub struct CachePool<T> {
    kind: &'static str,
    size: usize,
    records: OnceLock<Arc<[T]>>,
}

impl<T> CachePool<T> {
    pub const fn new(kind: &'static str, size: usize) -> Self {
        Self {
            kind,
            size,
            records: OnceLock::new(),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// 池的固定大小
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_initialized(&self) -> bool {
        self.records.get().is_some()
    }

    /// 已初始化时返回池内容
    pub fn get(&self) -> Option<Arc<[T]>> {
        self.records.get().cloned()
    }

    /// 获取池内容，未初始化时用 `init` 生成
    ///
    /// `init` 接收池大小，返回的记录数即为池的最终大小
    pub fn get_or_init<F>(&self, init: F) -> Arc<[T]>
    where
        F: FnOnce(usize) -> Vec<T>,
    {
        let size = self.size;
        Arc::clone(self.records.get_or_init(|| init(size).into()))
    }
}

impl<T> fmt::Debug for CachePool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachePool")
            .field("kind", &self.kind)
            .field("size", &self.size)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
