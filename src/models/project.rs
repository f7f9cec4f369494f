use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::reference::{GenderPreference, PaymentType, ProjectType, ResponseTimeLimit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Cancelled => "cancelled",
        }
    }
}

/// Optional filters a company attaches to a casting call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequirements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<GenderPreference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_min: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_max: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_min: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_max: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_requirements: Option<String>,
}

impl ProjectRequirements {
    /// One-line summary shown on a request card.
    pub fn summary(&self) -> String {
        let Some(gender) = self.gender else {
            return "Open to all".to_string();
        };

        match (self.age_min, self.age_max) {
            (Some(min), Some(max)) => format!("{}, {}-{} years", gender, min, max),
            (Some(min), None) => format!("{}, {}-+ years", gender, min),
            _ => gender.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseDecision {
    Accepted,
    Declined,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub talent_id: String,
    pub decision: ResponseDecision,
    pub responded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub company_id: String,
    pub company_name: String,
    pub title: String,
    pub project_type: ProjectType,
    pub description: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub compensation: String,
    pub payment_type: PaymentType,
    #[serde(default)]
    pub response_time_limit: ResponseTimeLimit,
    #[serde(default)]
    pub requirements: ProjectRequirements,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub views: u32,
    #[serde(default)]
    pub responses: Vec<ProjectResponse>,
}

impl Project {
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + self.response_time_limit.duration()
    }

    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirement_summaries() {
        let mut requirements = ProjectRequirements::default();
        assert_eq!(requirements.summary(), "Open to all");

        requirements.gender = Some(GenderPreference::Female);
        assert_eq!(requirements.summary(), "Female");

        requirements.age_min = Some(18);
        assert_eq!(requirements.summary(), "Female, 18-+ years");

        requirements.age_max = Some(30);
        assert_eq!(requirements.summary(), "Female, 18-30 years");
    }
}
