use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::project::Project;
use crate::models::reference::ProjectType;

const TBD: &str = "TBD";
const URGENT_MINUTES: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShootingDates {
    pub start: String,
    pub end: String,
}

/// A casting call as seen by a talent. Rebuilt from the project on every load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TalentRequest {
    pub id: String,
    pub project_name: String,
    pub project_type: ProjectType,
    pub company_name: String,
    pub location: String,
    pub shooting_dates: ShootingDates,
    pub compensation: String,
    pub requirements: String,
    pub description: String,
    pub expires_at: DateTime<Utc>,
    pub viewed_at: Option<DateTime<Utc>>,
}

impl From<&Project> for TalentRequest {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            project_name: project.title.clone(),
            project_type: project.project_type,
            company_name: project.company_name.clone(),
            location: project.city.clone(),
            shooting_dates: ShootingDates {
                start: project.start_date.clone().unwrap_or_else(|| TBD.to_string()),
                end: project.end_date.clone().unwrap_or_else(|| TBD.to_string()),
            },
            compensation: project.compensation.clone(),
            requirements: project.requirements.summary(),
            description: project.description.clone(),
            expires_at: project.expires_at(),
            viewed_at: None,
        }
    }
}

impl TalentRequest {
    pub fn time_remaining(&self, now: DateTime<Utc>) -> TimeRemaining {
        calculate_time_remaining(self.expires_at, now)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.time_remaining(now).expired
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRemaining {
    pub expired: bool,
    pub minutes: i64,
    pub seconds: i64,
    pub display: String,
    pub urgent: bool,
}

/// Countdown to `expires_at`, shown as total minutes and zero-padded seconds.
pub fn calculate_time_remaining(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> TimeRemaining {
    let diff_ms = (expires_at - now).num_milliseconds();

    if diff_ms <= 0 {
        return TimeRemaining {
            expired: true,
            minutes: 0,
            seconds: 0,
            display: "Expired".to_string(),
            urgent: false,
        };
    }

    let minutes = diff_ms / 60_000;
    let seconds = (diff_ms % 60_000) / 1_000;

    TimeRemaining {
        expired: false,
        minutes,
        seconds,
        display: format!("{}:{:02}", minutes, seconds),
        urgent: minutes < URGENT_MINUTES,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestFilter {
    #[default]
    All,
    Urgent,
    Viewed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownEntry {
    pub request_id: String,
    pub remaining: TimeRemaining,
    pub actions_enabled: bool,
}
