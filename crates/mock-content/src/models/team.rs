//! 团队成员模型

use serde::{Deserialize, Serialize};

use super::ContentRecord;

/// 团队成员
///
/// 社交链接按各自的概率独立生成，可能为空
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub department: String,
    pub avatar: String,
    pub bio: String,
    pub email: String,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub github: Option<String>,
    pub years_of_experience: u8,
    pub skills: Vec<String>,
}

/// 团队成员字段覆盖
#[derive(Debug, Clone, Default)]
pub struct TeamMemberOverrides {
    pub id: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<Option<String>>,
    pub twitter: Option<Option<String>>,
    pub github: Option<Option<String>>,
    pub years_of_experience: Option<u8>,
    pub skills: Option<Vec<String>>,
}

impl TeamMemberOverrides {
    pub fn apply(self, member: &mut TeamMember) {
        apply_overrides!(self, member;
            id, name, role, department, avatar, bio, email,
            linkedin, twitter, github, years_of_experience, skills,
        );
    }
}

impl ContentRecord for TeamMember {
    const KIND: &'static str = "team_members";

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> Option<&str> {
        Some(&self.department)
    }

    fn tags(&self) -> &[String] {
        &self.skills
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.role.as_str(),
            self.department.as_str(),
            self.bio.as_str(),
        ];
        fields.extend(self.skills.iter().map(String::as_str));
        fields
    }
}
