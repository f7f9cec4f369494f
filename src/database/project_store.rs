use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::error::{Error, Result};
use crate::models::project::Project;
use crate::storage::ProjectStore;

/// Keyed `projects` table: one row per casting call, so inserts and updates
/// touch a single record.
#[derive(Clone)]
pub struct PgProjectStore {
    pool: PgPool,
}

impl PgProjectStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    async fn load_all(&self) -> Result<Vec<Project>> {
        let rows = sqlx::query_scalar::<_, Json<Project>>(
            "SELECT data FROM projects ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|Json(project)| project).collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Project>> {
        let row = sqlx::query_scalar::<_, Json<Project>>("SELECT data FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|Json(project)| project))
    }

    async fn list_by_company(&self, company_id: &str) -> Result<Vec<Project>> {
        let rows = sqlx::query_scalar::<_, Json<Project>>(
            r#"
            SELECT data
            FROM projects
            WHERE company_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|Json(project)| project).collect())
    }

    async fn insert(&self, project: &Project) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO projects (id, company_id, status, created_at, data)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(&project.id)
        .bind(&project.company_id)
        .bind(project.status.as_str())
        .bind(project.created_at)
        .bind(Json(project))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::BadRequest(format!(
                "Project {} already exists",
                project.id
            )));
        }
        Ok(())
    }

    async fn update(&self, project: &Project) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE projects
            SET company_id = $2,
                status = $3,
                data = $4,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(&project.id)
        .bind(&project.company_id)
        .bind(project.status.as_str())
        .bind(Json(project))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Project {} not found", project.id)));
        }
        Ok(())
    }
}
