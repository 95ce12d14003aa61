//! 公司信息模型
//!
//! 联系方式和公司统计都是单例，进程内只生成一次。

use serde::{Deserialize, Serialize};

/// 公司联系方式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: Address,
    pub social_media: SocialMedia,
    pub business_hours: BusinessHours,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
}

/// 社交媒体主页
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialMedia {
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub youtube: Option<String>,
    pub github: Option<String>,
}

/// 一周营业时间，按周一到周日排列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessHours {
    pub monday: DayHours,
    pub tuesday: DayHours,
    pub wednesday: DayHours,
    pub thursday: DayHours,
    pub friday: DayHours,
    pub saturday: DayHours,
    pub sunday: DayHours,
}

impl BusinessHours {
    /// 工作日 09:00-18:00，周五提前到 17:00，周末休息
    pub fn standard() -> Self {
        Self {
            monday: DayHours::open("09:00", "18:00"),
            tuesday: DayHours::open("09:00", "18:00"),
            wednesday: DayHours::open("09:00", "18:00"),
            thursday: DayHours::open("09:00", "18:00"),
            friday: DayHours::open("09:00", "17:00"),
            saturday: DayHours::closed(),
            sunday: DayHours::closed(),
        }
    }
}

/// 单日营业时间
///
/// 休息日序列化为字符串 `"closed"`，营业日序列化为 `{ "open", "close" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DayHours {
    Open { open: String, close: String },
    Closed(ClosedMarker),
}

/// `"closed"` 字面量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClosedMarker {
    Closed,
}

impl DayHours {
    pub fn closed() -> Self {
        Self::Closed(ClosedMarker::Closed)
    }

    pub fn open(open: &str, close: &str) -> Self {
        Self::Open {
            open: open.to_string(),
            close: close.to_string(),
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed(_))
    }
}

/// 公司统计数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyStats {
    pub employee_count: u32,
    pub projects_completed: u32,
    pub years_in_business: u32,
    pub client_count: u32,
    pub countries_served: u32,
    /// 满意度百分比，95.0 - 99.9
    pub satisfaction_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_hours_serialization() {
        assert_eq!(serde_json::to_string(&DayHours::closed()).unwrap(), "\"closed\"");

        let open = DayHours::open("09:00", "18:00");
        let json = serde_json::to_value(&open).unwrap();
        assert_eq!(json["open"], "09:00");
        assert_eq!(json["close"], "18:00");

        let parsed: DayHours = serde_json::from_str("\"closed\"").unwrap();
        assert!(parsed.is_closed());
    }

    #[test]
    fn test_standard_business_hours() {
        let hours = BusinessHours::standard();
        assert!(!hours.monday.is_closed());
        assert_eq!(hours.friday, DayHours::open("09:00", "17:00"));
        assert!(hours.saturday.is_closed());
        assert!(hours.sunday.is_closed());
    }
}
