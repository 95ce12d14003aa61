//! 客户（合作企业）模型

use serde::{Deserialize, Serialize};

use super::ContentRecord;

/// 合作客户
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub website: String,
    pub description: String,
    pub featured: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ClientOverrides {
    pub id: Option<String>,
    pub name: Option<String>,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub featured: Option<bool>,
}

impl ClientOverrides {
    pub fn apply(self, client: &mut Client) {
        apply_overrides!(self, client; id, name, logo, website, description, featured);
    }
}

impl ContentRecord for Client {
    const KIND: &'static str = "clients";

    fn id(&self) -> &str {
        &self.id
    }

    fn is_featured(&self) -> bool {
        self.featured
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}
