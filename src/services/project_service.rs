use std::sync::Arc;
use tracing::{error, info};

use crate::dto::project_dto::{CompanyProjectStats, CreateProjectPayload, ProjectFilter};
use crate::error::{Error, Result};
use crate::models::project::{Project, ProjectStatus};
use crate::models::user::UserProfile;
use crate::storage::ProjectStore;
use crate::utils::time::{now, MonotonicMillis};
use crate::utils::validation::validate;

#[derive(Clone)]
pub struct ProjectService {
    store: Arc<dyn ProjectStore>,
    ids: Arc<MonotonicMillis>,
}

impl ProjectService {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self {
            store,
            ids: Arc::new(MonotonicMillis::new()),
        }
    }

    /// Posts a casting call on behalf of `owner`, who must be a company.
    pub async fn create(
        &self,
        owner: &UserProfile,
        payload: CreateProjectPayload,
    ) -> Result<Project> {
        let company = owner
            .as_company()
            .ok_or_else(|| Error::Unauthorized("Only companies can create projects".to_string()))?;
        validate(&payload)?;

        let created_at = now();
        let project = Project {
            id: format!("P{}", self.ids.next(created_at)),
            company_id: company.account.id.clone(),
            company_name: company.company_name.clone(),
            title: payload.title.trim().to_string(),
            project_type: payload
                .project_type
                .ok_or_else(|| Error::BadRequest("Project type is required".to_string()))?,
            description: payload.description.trim().to_string(),
            city: payload
                .city
                .ok_or_else(|| Error::BadRequest("City is required".to_string()))?,
            start_date: payload.start_date.filter(|d| !d.trim().is_empty()),
            end_date: payload.end_date.filter(|d| !d.trim().is_empty()),
            compensation: payload.compensation.trim().to_string(),
            payment_type: payload
                .payment_type
                .ok_or_else(|| Error::BadRequest("Payment type is required".to_string()))?,
            response_time_limit: payload.response_time_limit,
            requirements: payload.requirements,
            status: ProjectStatus::Active,
            created_at,
            views: 0,
            responses: Vec::new(),
        };

        if let Err(e) = self.store.insert(&project).await {
            error!(error = %e, "Error creating project");
            return Err(e);
        }

        info!(
            project_id = %project.id,
            company_id = %project.company_id,
            response_time_limit = project.response_time_limit.minutes(),
            "project created"
        );
        Ok(project)
    }

    pub async fn get(&self, id: &str) -> Result<Project> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Project {} not found", id)))
    }

    pub async fn list_for_company(
        &self,
        company_id: &str,
        filter: ProjectFilter,
    ) -> Result<Vec<Project>> {
        Ok(self
            .store
            .list_by_company(company_id)
            .await?
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect())
    }

    /// Every open casting call, the source of each talent's request list.
    pub async fn list_active(&self) -> Result<Vec<Project>> {
        Ok(self
            .store
            .load_all()
            .await?
            .into_iter()
            .filter(Project::is_active)
            .collect())
    }

    pub async fn company_stats(&self, company_id: &str) -> Result<CompanyProjectStats> {
        let projects = self.list_for_company(company_id, ProjectFilter::All).await?;

        Ok(CompanyProjectStats {
            total: projects.len(),
            active: projects
                .iter()
                .filter(|p| p.status == ProjectStatus::Active)
                .count(),
            completed: projects
                .iter()
                .filter(|p| p.status == ProjectStatus::Completed)
                .count(),
            total_views: projects.iter().map(|p| u64::from(p.views)).sum(),
            total_responses: projects.iter().map(|p| p.responses.len()).sum(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::reference::{PaymentType, ProjectType, ResponseTimeLimit};
    use crate::storage::{KvProjectStore, MemoryStore};
    use crate::test_support::{sample_company, sample_talent, t0, sample_project};
    use crate::utils::validation::MIN_DESCRIPTION_CHARS;

    fn service() -> (ProjectService, KvProjectStore) {
        let store = KvProjectStore::new(Arc::new(MemoryStore::new()));
        (ProjectService::new(Arc::new(store.clone())), store)
    }

    fn payload() -> CreateProjectPayload {
        CreateProjectPayload {
            title: "Ramadan TV spot".to_string(),
            project_type: Some(ProjectType::AdvertisementCampaign),
            description: "Family scene for a telecom Ramadan campaign".to_string(),
            city: Some("Riyadh".to_string()),
            start_date: Some("01/03/2026".to_string()),
            end_date: Some(String::new()),
            compensation: "1500 SAR per day".to_string(),
            payment_type: Some(PaymentType::Paid),
            response_time_limit: ResponseTimeLimit::try_from(30).unwrap(),
            ..CreateProjectPayload::default()
        }
    }

    #[tokio::test]
    async fn creates_active_project() {
        let (service, _) = service();
        let company = sample_company("C1");

        let project = service.create(&company, payload()).await.unwrap();
        assert!(project.id.starts_with('P'));
        assert_eq!(project.company_id, "C1");
        assert_eq!(project.company_name, "Desert Light Productions");
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.start_date.as_deref(), Some("01/03/2026"));
        assert_eq!(project.end_date, None);
        assert_eq!(project.views, 0);

        assert_eq!(service.get(&project.id).await.unwrap(), project);
    }

    #[tokio::test]
    async fn ids_stay_unique_for_rapid_creates() {
        let (service, _) = service();
        let company = sample_company("C1");

        let a = service.create(&company, payload()).await.unwrap();
        let b = service.create(&company, payload()).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(service.list_active().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn talents_cannot_create_projects() {
        let (service, _) = service();
        let err = service
            .create(&sample_talent("T1"), payload())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Unauthorized(_)));
    }

    #[tokio::test]
    async fn short_description_is_rejected() {
        let (service, _) = service();
        let err = service
            .create(
                &sample_company("C1"),
                CreateProjectPayload {
                    description: "Too short".to_string(),
                    ..payload()
                },
            )
            .await
            .unwrap_err();

        assert_eq!(
            err.field_errors().get("description").map(String::as_str),
            Some("Description must be at least 20 characters")
        );
        assert!(service.list_active().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn padding_does_not_count_toward_description_length() {
        let (service, _) = service();
        let company = sample_company("C1");

        let err = service
            .create(
                &company,
                CreateProjectPayload {
                    description: "Short text            ".to_string(),
                    ..payload()
                },
            )
            .await
            .unwrap_err();
        assert!(err.field_errors().contains_key("description"));
        assert!(service.list_active().await.unwrap().is_empty());

        let project = service
            .create(
                &company,
                CreateProjectPayload {
                    description: "  Two hand models for a watch campaign  ".to_string(),
                    ..payload()
                },
            )
            .await
            .unwrap();
        assert_eq!(project.description, "Two hand models for a watch campaign");
        assert!(project.description.chars().count() >= MIN_DESCRIPTION_CHARS);
    }

    #[tokio::test]
    async fn filters_and_stats_per_company() {
        let (service, store) = service();

        let mut done = sample_project("P1", "C1", t0());
        done.status = ProjectStatus::Completed;
        done.views = 12;
        store.insert(&done).await.unwrap();

        let mut open = sample_project("P2", "C1", t0());
        open.views = 3;
        store.insert(&open).await.unwrap();

        store
            .insert(&sample_project("P3", "C2", t0()))
            .await
            .unwrap();

        let active = service
            .list_for_company("C1", ProjectFilter::Active)
            .await
            .unwrap();
        assert_eq!(active.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), vec!["P2"]);

        let stats = service.company_stats("C1").await.unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.total_views, 15);
        assert_eq!(stats.total_responses, 0);

        assert!(matches!(service.get("P9").await, Err(Error::NotFound(_))));
    }
}
