use chrono::{DateTime, TimeZone, Utc};
use std::collections::BTreeMap;

use crate::models::project::{Project, ProjectRequirements, ProjectStatus};
use crate::models::reference::{
    CompanyType, DayOfWeek, Gender, GenderPreference, NoticePeriod, PaymentType, ProjectType,
    ResponseTimeLimit, WorkPreference,
};
use crate::models::user::{
    AccountInfo, CompanyDocuments, CompanyProfile, DocumentRef, PhysicalAttributes, ProfileStatus,
    TalentProfile, UserProfile, VerificationStatus,
};

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 5, 10, 0, 0).unwrap()
}

pub fn pdf(name: &str) -> DocumentRef {
    DocumentRef::from_selection(name, format!("file:///docs/{}", name), "application/pdf", Some(2048))
        .unwrap()
}

pub fn sample_talent(id: &str) -> UserProfile {
    let mut account = AccountInfo::registering(
        "+966512345678".to_string(),
        None,
        "Riyadh".to_string(),
        ProfileStatus::Active,
        t0(),
    );
    account.id = id.to_string();

    let mut availability = BTreeMap::new();
    availability.insert(DayOfWeek::Sunday, true);
    availability.insert(DayOfWeek::Monday, false);

    UserProfile::Talent(TalentProfile {
        account,
        full_name_english: "Sara Alqahtani".to_string(),
        full_name_arabic: None,
        age: 24,
        date_of_birth: None,
        nationality: "Saudi".to_string(),
        gender: Gender::Female,
        physical: PhysicalAttributes::default(),
        availability,
        work_preference: WorkPreference::ProjectBased,
        notice_period: NoticePeriod::OneDay,
        willing_to_travel: false,
    })
}

pub fn sample_company(id: &str) -> UserProfile {
    let mut account = AccountInfo::registering(
        "+966501234567".to_string(),
        Some("casting@desertlight.sa".to_string()),
        "Jeddah".to_string(),
        ProfileStatus::PendingVerification,
        t0(),
    );
    account.id = id.to_string();

    UserProfile::Company(CompanyProfile {
        account,
        company_name: "Desert Light Productions".to_string(),
        company_name_arabic: None,
        company_type: CompanyType::ProductionHouse,
        cr_number: None,
        documents: CompanyDocuments {
            commercial_registration: pdf("cr.pdf"),
            zakat_certificate: pdf("zakat.pdf"),
            legal_documents: pdf("legal.pdf"),
            uploaded_at: t0(),
        },
        verification_status: VerificationStatus::PendingVerification,
        verified: false,
    })
}

pub fn sample_project(id: &str, company_id: &str, created_at: DateTime<Utc>) -> Project {
    Project {
        id: id.to_string(),
        company_id: company_id.to_string(),
        company_name: "Desert Light Productions".to_string(),
        title: "Summer campaign".to_string(),
        project_type: ProjectType::AdvertisementCampaign,
        description: "Outdoor shoot for a beverage brand in Jeddah".to_string(),
        city: "Jeddah".to_string(),
        start_date: Some("2026-02-01".to_string()),
        end_date: None,
        compensation: "2000 SAR".to_string(),
        payment_type: PaymentType::Paid,
        response_time_limit: ResponseTimeLimit::default(),
        requirements: ProjectRequirements {
            gender: Some(GenderPreference::Female),
            ..ProjectRequirements::default()
        },
        status: ProjectStatus::Active,
        created_at,
        views: 0,
        responses: Vec::new(),
    }
}
