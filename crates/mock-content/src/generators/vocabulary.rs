//! 生成词表
//!
//! 各类内容的分类、标签、技能等候选值。

/// 博客分类
pub const BLOG_CATEGORIES: [&str; 10] = [
    "Technology",
    "Design",
    "Business",
    "Marketing",
    "Development",
    "Product",
    "Engineering",
    "Data Science",
    "AI/ML",
    "DevOps",
];

/// 博客标签
pub const BLOG_TAGS: [&str; 15] = [
    "javascript",
    "typescript",
    "react",
    "nextjs",
    "nodejs",
    "css",
    "html",
    "web",
    "mobile",
    "cloud",
    "database",
    "api",
    "tutorial",
    "guide",
    "tips",
];

/// 团队部门
pub const DEPARTMENTS: [&str; 10] = [
    "Engineering",
    "Design",
    "Marketing",
    "Sales",
    "Product",
    "Customer Success",
    "Operations",
    "Human Resources",
    "Finance",
    "Legal",
];

pub const SKILLS: [&str; 20] = [
    "JavaScript",
    "TypeScript",
    "React",
    "Next.js",
    "Node.js",
    "Python",
    "Go",
    "AWS",
    "Docker",
    "Kubernetes",
    "GraphQL",
    "PostgreSQL",
    "MongoDB",
    "Redis",
    "Machine Learning",
    "Data Science",
    "UI Design",
    "UX Research",
    "Product Management",
    "Agile",
];

/// 服务名称，每个名称对应服务池中的一条记录
pub const SERVICE_NAMES: [&str; 10] = [
    "Web Development",
    "Mobile Development",
    "Cloud Solutions",
    "AI/ML Consulting",
    "DevOps Services",
    "UI/UX Design",
    "Digital Marketing",
    "Data Analytics",
    "Security Audit",
    "Technical Support",
];

pub const SERVICE_ICONS: [&str; 10] = [
    "🚀", "💡", "🎯", "📊", "🔧", "🎨", "📱", "☁️", "🔒", "⚡",
];

pub const FAQ_CATEGORIES: [&str; 5] = ["General", "Pricing", "Technical", "Support", "Features"];

/// 演示站点文章标签
pub const DEMO_POST_TAGS: [&str; 8] = [
    "javascript",
    "typescript",
    "react",
    "nextjs",
    "nodejs",
    "web",
    "tutorial",
    "guide",
];

/// 图库词表
///
/// 品牌站点和演示站点的图库使用不同的分类与标签集合
#[derive(Debug, Clone, Copy)]
pub struct GalleryVocabulary {
    pub categories: &'static [&'static str],
    pub tags: &'static [&'static str],
}

/// 品牌站点图库
pub const BRAND_GALLERY: GalleryVocabulary = GalleryVocabulary {
    categories: &[
        "Product",
        "Team",
        "Office",
        "Events",
        "Projects",
        "Clients",
        "Awards",
        "Community",
    ],
    tags: &[
        "innovation",
        "design",
        "technology",
        "creativity",
        "teamwork",
        "success",
        "award",
        "milestone",
    ],
};

/// 演示站点图库
pub const DEMO_GALLERY: GalleryVocabulary = GalleryVocabulary {
    categories: &["Product", "Team", "Office", "Events", "Projects", "Community"],
    tags: &["innovation", "design", "technology", "creativity", "teamwork"],
};
