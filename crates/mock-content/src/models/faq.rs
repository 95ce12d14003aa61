//! FAQ 模型

use serde::{Deserialize, Serialize};

use super::ContentRecord;

/// 常见问题
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
    /// 展示顺序，即生成时的序号
    pub order: u32,
}

#[derive(Debug, Clone, Default)]
pub struct FaqOverrides {
    pub id: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
    pub order: Option<u32>,
}

impl FaqOverrides {
    pub fn apply(self, faq: &mut Faq) {
        apply_overrides!(self, faq; id, question, answer, category, order);
    }
}

impl ContentRecord for Faq {
    const KIND: &'static str = "faqs";

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.question.as_str(), self.answer.as_str()]
    }
}
