//! 生成器模块
//!
//! 基于注入随机源的模拟内容生成，以及生成所用的词表和文本派生工具。

pub mod content_generator;
pub mod text;
pub mod vocabulary;

pub use content_generator::ContentGenerator;
pub use text::{as_question, slugify};
pub use vocabulary::{BRAND_GALLERY, DEMO_GALLERY, GalleryVocabulary};
