use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::models::reference::{
    ClothingSize, CompanyType, DayOfWeek, EyeColor, Gender, HairColor, NoticePeriod, SkinTone,
    WorkPreference,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Talent,
    Company,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Talent => "talent",
            UserRole::Company => "company",
        }
    }

    pub fn id_prefix(&self) -> char {
        match self {
            UserRole::Talent => 'T',
            UserRole::Company => 'C',
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "talent" => Ok(UserRole::Talent),
            "company" => Ok(UserRole::Company),
            other => Err(Error::BadRequest(format!("Unknown user type: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStatus {
    Active,
    PendingVerification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    PendingVerification,
    Verified,
}

/// Fields shared by every account, stored flat alongside the role fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    #[serde(default)]
    pub id: String,
    pub mobile: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub city: String,
    pub registration_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_since: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub total_projects: u32,
    #[serde(default)]
    pub total_reviews: u32,
    pub status: ProfileStatus,
    #[serde(default)]
    pub profile_complete: bool,
}

impl AccountInfo {
    /// Account fields gathered by a registration form, before bookkeeping is stamped.
    pub fn registering(
        mobile: String,
        email: Option<String>,
        city: String,
        status: ProfileStatus,
        registration_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: String::new(),
            mobile,
            email: email.filter(|e| !e.trim().is_empty()),
            city,
            registration_date,
            member_since: None,
            rating: 0.0,
            total_projects: 0,
            total_reviews: 0,
            status,
            profile_complete: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clothing_size: Option<ClothingSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hair_color: Option<HairColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eye_color: Option<EyeColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_tone: Option<SkinTone>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentProfile {
    #[serde(flatten)]
    pub account: AccountInfo,
    pub full_name_english: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name_arabic: Option<String>,
    pub age: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    pub nationality: String,
    pub gender: Gender,
    #[serde(flatten)]
    pub physical: PhysicalAttributes,
    pub availability: BTreeMap<DayOfWeek, bool>,
    pub work_preference: WorkPreference,
    pub notice_period: NoticePeriod,
    #[serde(default)]
    pub willing_to_travel: bool,
}

impl TalentProfile {
    pub fn available_days(&self) -> impl Iterator<Item = DayOfWeek> + '_ {
        self.availability
            .iter()
            .filter(|(_, available)| **available)
            .map(|(day, _)| *day)
    }
}

/// A file picked on the device; only its reference is kept, never the content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub name: String,
    pub uri: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl DocumentRef {
    pub fn from_selection(
        name: impl Into<String>,
        uri: impl Into<String>,
        mime_type: impl Into<String>,
        size: Option<u64>,
    ) -> Result<Self> {
        let mime_type = mime_type.into();
        if !is_accepted_document_type(&mime_type) {
            return Err(Error::BadRequest(format!(
                "Unsupported document type: {}",
                mime_type
            )));
        }

        Ok(Self {
            name: name.into(),
            uri: uri.into(),
            mime_type,
            size,
        })
    }
}

pub fn is_accepted_document_type(mime_type: &str) -> bool {
    let mime_type = mime_type.trim().to_ascii_lowercase();
    mime_type == "application/pdf" || mime_type.starts_with("image/")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDocuments {
    pub commercial_registration: DocumentRef,
    pub zakat_certificate: DocumentRef,
    pub legal_documents: DocumentRef,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    #[serde(flatten)]
    pub account: AccountInfo,
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name_arabic: Option<String>,
    pub company_type: CompanyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cr_number: Option<String>,
    pub documents: CompanyDocuments,
    pub verification_status: VerificationStatus,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum UserProfile {
    Talent(TalentProfile),
    Company(CompanyProfile),
}

impl UserProfile {
    pub fn role(&self) -> UserRole {
        match self {
            UserProfile::Talent(_) => UserRole::Talent,
            UserProfile::Company(_) => UserRole::Company,
        }
    }

    pub fn account(&self) -> &AccountInfo {
        match self {
            UserProfile::Talent(talent) => &talent.account,
            UserProfile::Company(company) => &company.account,
        }
    }

    pub fn account_mut(&mut self) -> &mut AccountInfo {
        match self {
            UserProfile::Talent(talent) => &mut talent.account,
            UserProfile::Company(company) => &mut company.account,
        }
    }

    pub fn id(&self) -> &str {
        &self.account().id
    }

    pub fn mobile(&self) -> &str {
        &self.account().mobile
    }

    pub fn display_name(&self) -> &str {
        match self {
            UserProfile::Talent(talent) => &talent.full_name_english,
            UserProfile::Company(company) => &company.company_name,
        }
    }

    pub fn as_talent(&self) -> Option<&TalentProfile> {
        match self {
            UserProfile::Talent(talent) => Some(talent),
            UserProfile::Company(_) => None,
        }
    }

    pub fn as_company(&self) -> Option<&CompanyProfile> {
        match self {
            UserProfile::Company(company) => Some(company),
            UserProfile::Talent(_) => None,
        }
    }
}
