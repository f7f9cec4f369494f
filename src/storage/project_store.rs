use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{get_json, set_json, KeyValueStore, PROJECTS_KEY};
use crate::error::{Error, Result};
use crate::models::project::Project;

#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Every project, oldest first.
    async fn load_all(&self) -> Result<Vec<Project>>;
    async fn get(&self, id: &str) -> Result<Option<Project>>;
    /// Projects posted by one company, oldest first.
    async fn list_by_company(&self, company_id: &str) -> Result<Vec<Project>>;
    async fn insert(&self, project: &Project) -> Result<()>;
    async fn update(&self, project: &Project) -> Result<()>;
}

/// The whole collection lives in one JSON array under `@casta_projects`;
/// every write re-serializes all of it.
#[derive(Clone)]
pub struct KvProjectStore {
    store: Arc<dyn KeyValueStore>,
    write_lock: Arc<Mutex<()>>,
}

impl KvProjectStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    async fn save_all(&self, projects: &[Project]) -> Result<()> {
        set_json(self.store.as_ref(), PROJECTS_KEY, projects).await
    }
}

#[async_trait]
impl ProjectStore for KvProjectStore {
    async fn load_all(&self) -> Result<Vec<Project>> {
        Ok(get_json::<Vec<Project>>(self.store.as_ref(), PROJECTS_KEY)
            .await?
            .unwrap_or_default())
    }

    async fn get(&self, id: &str) -> Result<Option<Project>> {
        Ok(self.load_all().await?.into_iter().find(|p| p.id == id))
    }

    async fn list_by_company(&self, company_id: &str) -> Result<Vec<Project>> {
        Ok(self
            .load_all()
            .await?
            .into_iter()
            .filter(|p| p.company_id == company_id)
            .collect())
    }

    async fn insert(&self, project: &Project) -> Result<()> {
        // Serializes read-modify-write cycles within this process.
        let _guard = self.write_lock.lock().await;
        let mut projects = self.load_all().await?;
        if projects.iter().any(|p| p.id == project.id) {
            return Err(Error::BadRequest(format!(
                "Project {} already exists",
                project.id
            )));
        }
        projects.push(project.clone());
        self.save_all(&projects).await
    }

    async fn update(&self, project: &Project) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut projects = self.load_all().await?;
        let slot = projects
            .iter_mut()
            .find(|p| p.id == project.id)
            .ok_or_else(|| Error::NotFound(format!("Project {} not found", project.id)))?;
        *slot = project.clone();
        self.save_all(&projects).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::ProjectStatus;
    use crate::storage::MemoryStore;
    use crate::test_support::{sample_project, t0};

    #[tokio::test]
    async fn whole_collection_blob() {
        let device = MemoryStore::new();
        let store = KvProjectStore::new(Arc::new(device.clone()));
        assert!(store.load_all().await.unwrap().is_empty());

        let mut project = sample_project("P1", "C1", t0());
        store.insert(&project).await.unwrap();
        store.insert(&sample_project("P2", "C1", t0())).await.unwrap();
        store.insert(&sample_project("P3", "C2", t0())).await.unwrap();
        assert!(matches!(
            store.insert(&project).await,
            Err(Error::BadRequest(_))
        ));

        project.status = ProjectStatus::Completed;
        store.update(&project).await.unwrap();
        assert_eq!(store.get("P1").await.unwrap(), Some(project));

        let raw = device.get_item(PROJECTS_KEY).await.unwrap().unwrap();
        let stored: Vec<Project> = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            stored.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            vec!["P1", "P2", "P3"]
        );
        assert_eq!(
            store
                .list_by_company("C1")
                .await
                .unwrap()
                .iter()
                .map(|p| p.id.as_str())
                .collect::<Vec<_>>(),
            vec!["P1", "P2"]
        );

        let missing = sample_project("P9", "C1", t0());
        assert!(matches!(store.update(&missing).await, Err(Error::NotFound(_))));
    }
}
