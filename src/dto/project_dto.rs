use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::project::{Project, ProjectRequirements, ProjectStatus};
use crate::models::reference::{PaymentType, ProjectType, ResponseTimeLimit};
use crate::utils::validation::{
    validate_city, validate_compensation, validate_project_description, validate_project_title,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectPayload {
    #[validate(custom(function = "validate_project_title"))]
    pub title: String,
    #[validate(required(message = "Please select a project type"))]
    pub project_type: Option<ProjectType>,
    #[validate(custom(function = "validate_project_description"))]
    pub description: String,
    #[validate(
        required(message = "Please select a city"),
        custom(function = "validate_city")
    )]
    pub city: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[validate(custom(function = "validate_compensation"))]
    pub compensation: String,
    #[validate(required(message = "Please select payment type"))]
    pub payment_type: Option<PaymentType>,
    #[serde(default)]
    pub response_time_limit: ResponseTimeLimit,
    #[serde(default)]
    pub requirements: ProjectRequirements,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Active => project.status == ProjectStatus::Active,
            ProjectFilter::Completed => project.status == ProjectStatus::Completed,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProjectStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub total_views: u64,
    pub total_responses: usize,
}
