pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod services;
pub mod storage;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::config::Config;
use crate::database::pool::{create_pool, run_migrations};
use crate::database::project_store::PgProjectStore;
use crate::error::Result;
use crate::navigation::{root_route, RootRoute};
use crate::services::{
    CompanyRegistration, PhoneLogin, ProjectService, RequestService, SessionService,
    TalentRegistration,
};
use crate::storage::{FileStore, KeyValueStore, KvProjectStore, MemoryStore, ProjectStore};

/// Application root. Owns the session and services and is cloned into
/// whatever needs them.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn KeyValueStore>,
    pub session: SessionService,
    pub project_service: ProjectService,
    pub request_service: RequestService,
    pub phone_login: PhoneLogin,
    pub simulated_latency: Duration,
}

impl AppState {
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        projects: Arc<dyn ProjectStore>,
        config: &Config,
    ) -> Self {
        let session = SessionService::new(storage.clone());
        let project_service = ProjectService::new(projects);
        let request_service = RequestService::new(project_service.clone());
        let phone_login = PhoneLogin::new(config.otp_resend_secs, config.simulated_latency());

        Self {
            storage,
            session,
            project_service,
            request_service,
            phone_login,
            simulated_latency: config.simulated_latency(),
        }
    }

    /// Everything in memory, no artificial delay.
    pub fn in_memory() -> Self {
        let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let projects = Arc::new(KvProjectStore::new(storage.clone()));
        let config = Config {
            simulated_latency_ms: 0,
            ..Config::default()
        };
        Self::new(storage, projects, &config)
    }

    /// Device storage under `storage_dir`; projects go to Postgres when a
    /// database URL is configured.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let store = FileStore::open(&config.storage_dir)
            .await
            .with_context(|| {
                format!("opening device storage at {}", config.storage_dir.display())
            })?;
        let storage: Arc<dyn KeyValueStore> = Arc::new(store);

        let projects: Arc<dyn ProjectStore> = match &config.database_url {
            Some(url) => {
                let pool = create_pool(url, config.db_max_connections)
                    .await
                    .context("connecting to the project database")?;
                run_migrations(&pool)
                    .await
                    .context("applying project migrations")?;
                info!("projects stored in Postgres");
                Arc::new(PgProjectStore::new(pool))
            }
            None => {
                info!(dir = %config.storage_dir.display(), "projects stored on device");
                Arc::new(KvProjectStore::new(storage.clone()))
            }
        };

        Ok(Self::new(storage, projects, config))
    }

    pub fn talent_registration(&self, verified_phone: Option<String>) -> TalentRegistration {
        TalentRegistration::new(verified_phone, self.simulated_latency)
    }

    pub fn company_registration(&self, verified_phone: Option<String>) -> CompanyRegistration {
        CompanyRegistration::new(verified_phone, self.simulated_latency)
    }

    pub async fn root_route(&self) -> RootRoute {
        root_route(&self.session.snapshot().await)
    }
}
