//! 文本派生工具

/// 生成 URL 安全的 slug
///
/// 转为小写，每段连续的非字母数字字符折叠为一个 `-`，首尾不保留 `-`
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// 将陈述句转为问句
pub fn as_question(sentence: &str) -> String {
    format!("{}?", sentence.trim_end_matches(['.', ' ']))
}
