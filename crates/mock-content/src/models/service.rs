//! 服务项目模型

use serde::{Deserialize, Serialize};

use super::ContentRecord;

/// 服务项目
///
/// 约 70% 的服务带有报价，其余为面议
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
    pub price: Option<ServicePrice>,
    pub popular: bool,
}

/// 服务报价
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePrice {
    pub amount: u32,
    pub currency: String,
    pub period: Option<BillingPeriod>,
}

/// 计费周期
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BillingPeriod {
    Monthly,
    Yearly,
    OneTime,
}

impl BillingPeriod {
    pub const ALL: [BillingPeriod; 3] = [Self::Monthly, Self::Yearly, Self::OneTime];
}

#[derive(Debug, Clone, Default)]
pub struct ServiceOverrides {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub features: Option<Vec<String>>,
    pub price: Option<Option<ServicePrice>>,
    pub popular: Option<bool>,
}

impl ServiceOverrides {
    /// 只覆盖服务名称
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn apply(self, service: &mut Service) {
        apply_overrides!(self, service; id, name, description, icon, features, price, popular);
    }
}

impl ContentRecord for Service {
    const KIND: &'static str = "services";

    fn id(&self) -> &str {
        &self.id
    }

    fn is_featured(&self) -> bool {
        self.popular
    }

    fn tags(&self) -> &[String] {
        &self.features
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}
