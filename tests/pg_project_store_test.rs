use std::env;

use chrono::Utc;

use casta_core::database::pool::{create_pool, run_migrations};
use casta_core::database::project_store::PgProjectStore;
use casta_core::error::Error;
use casta_core::models::project::{Project, ProjectRequirements, ProjectStatus};
use casta_core::models::reference::{PaymentType, ProjectType, ResponseTimeLimit};
use casta_core::storage::ProjectStore;

fn project(id: &str, company_id: &str) -> Project {
    Project {
        id: id.to_string(),
        company_id: company_id.to_string(),
        company_name: "Eastern Lens".into(),
        title: "Corporate headshots".into(),
        project_type: ProjectType::CorporateVideo,
        description: "Interview-style clips for an energy company annual report".into(),
        city: "Dhahran".into(),
        start_date: Some("20/05/2026".into()),
        end_date: Some("21/05/2026".into()),
        compensation: "3000 SAR".into(),
        payment_type: PaymentType::Paid,
        response_time_limit: ResponseTimeLimit::try_from(360).expect("preset"),
        requirements: ProjectRequirements::default(),
        status: ProjectStatus::Active,
        created_at: Utc::now(),
        views: 0,
        responses: Vec::new(),
    }
}

#[tokio::test]
async fn keyed_table_inserts_and_updates_single_rows() {
    dotenvy::dotenv().ok();
    let Ok(database_url) = env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping");
        return;
    };

    let pool = create_pool(&database_url, 2).await.expect("pool");
    run_migrations(&pool).await.expect("migrations");
    let store = PgProjectStore::new(pool);

    let stamp = Utc::now().timestamp_millis();
    let company_id = format!("C{}", stamp);
    let mut first = project(&format!("P{}", stamp), &company_id);
    let second = project(&format!("P{}", stamp + 1), &company_id);

    store.insert(&first).await.expect("insert first");
    store.insert(&second).await.expect("insert second");

    let duplicate = store.insert(&first).await.expect_err("duplicate id");
    assert!(matches!(duplicate, Error::BadRequest(_)));

    first.status = ProjectStatus::Completed;
    first.views = 7;
    store.update(&first).await.expect("update");

    let fetched = store.get(&first.id).await.expect("get").expect("row");
    assert_eq!(fetched.status, ProjectStatus::Completed);
    assert_eq!(fetched.views, 7);
    assert_eq!(fetched.end_date.as_deref(), Some("21/05/2026"));

    let listed = store.list_by_company(&company_id).await.expect("list");
    assert_eq!(listed.len(), 2);

    let missing = store
        .update(&project("P-missing", &company_id))
        .await
        .expect_err("missing row");
    assert!(matches!(missing, Error::NotFound(_)));
}
