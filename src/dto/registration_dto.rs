use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

use crate::models::reference::{
    ClothingSize, CompanyType, DayOfWeek, EyeColor, Gender, HairColor, NoticePeriod, SkinTone,
    WorkPreference,
};
use crate::models::user::{DocumentRef, PhysicalAttributes};
use crate::utils::validation::{
    validate_city, validate_company_name, validate_full_name_english, validate_has_available_day,
    validate_mobile_length, validate_nationality, validate_optional_email,
    validate_required_email, validate_saudi_mobile, validate_terms_accepted,
};

/// Talent wizard, step 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TalentContactPayload {
    #[validate(custom(function = "validate_saudi_mobile"))]
    pub mobile: String,
    #[validate(custom(function = "validate_optional_email"))]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_terms_accepted"))]
    pub agree_to_terms: bool,
}

/// Talent wizard, step 2.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TalentPersonalPayload {
    #[validate(custom(function = "validate_full_name_english"))]
    pub full_name_english: String,
    pub full_name_arabic: Option<String>,
    #[validate(
        required(message = "Please enter a valid age (16-70)"),
        range(min = 16, max = 70, message = "Please enter a valid age (16-70)")
    )]
    pub age: Option<u8>,
    pub date_of_birth: Option<String>,
    #[validate(
        required(message = "Please select your nationality"),
        custom(function = "validate_nationality")
    )]
    pub nationality: Option<String>,
    #[validate(required(message = "Please select your gender"))]
    pub gender: Option<Gender>,
    #[validate(
        required(message = "Please select your city"),
        custom(function = "validate_city")
    )]
    pub city: Option<String>,
    pub weight: Option<u16>,
    pub height: Option<u16>,
    pub clothing_size: Option<ClothingSize>,
    pub hair_color: Option<HairColor>,
    pub eye_color: Option<EyeColor>,
    pub skin_tone: Option<SkinTone>,
}

impl TalentPersonalPayload {
    pub fn physical_attributes(&self) -> PhysicalAttributes {
        PhysicalAttributes {
            weight: self.weight,
            height: self.height,
            clothing_size: self.clothing_size,
            hair_color: self.hair_color,
            eye_color: self.eye_color,
            skin_tone: self.skin_tone,
        }
    }
}

/// Talent wizard, step 3.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TalentAvailabilityPayload {
    #[serde(default)]
    #[validate(custom(function = "validate_has_available_day"))]
    pub availability: BTreeMap<DayOfWeek, bool>,
    #[validate(required(message = "Please select your work preference"))]
    pub work_preference: Option<WorkPreference>,
    #[validate(required(message = "Please select your notice period"))]
    pub notice_period: Option<NoticePeriod>,
    #[serde(default)]
    pub willing_to_travel: bool,
}

impl TalentAvailabilityPayload {
    pub fn toggle_day(&mut self, day: DayOfWeek) {
        let entry = self.availability.entry(day).or_insert(false);
        *entry = !*entry;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    CommercialRegistration,
    ZakatCertificate,
    LegalDocuments,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRegistrationPayload {
    #[validate(custom(function = "validate_company_name"))]
    pub company_name: String,
    pub company_name_arabic: Option<String>,
    #[validate(custom(function = "validate_mobile_length"))]
    pub mobile: String,
    #[validate(custom(function = "validate_required_email"))]
    pub email: String,
    #[validate(
        required(message = "Please select a city"),
        custom(function = "validate_city")
    )]
    pub city: Option<String>,
    #[validate(required(message = "Please select company type"))]
    pub company_type: Option<CompanyType>,
    pub cr_number: Option<String>,
    #[validate(required(message = "Commercial Registration (Sijil Tejary) is required"))]
    pub commercial_registration: Option<DocumentRef>,
    #[validate(required(message = "Zakat Certificate is required"))]
    pub zakat_certificate: Option<DocumentRef>,
    #[validate(required(message = "Legal Documents are required"))]
    pub legal_documents: Option<DocumentRef>,
    #[serde(default)]
    #[validate(custom(function = "validate_terms_accepted"))]
    pub agree_to_terms: bool,
}

impl CompanyRegistrationPayload {
    pub fn document_slot(&mut self, kind: DocumentKind) -> &mut Option<DocumentRef> {
        match kind {
            DocumentKind::CommercialRegistration => &mut self.commercial_registration,
            DocumentKind::ZakatCertificate => &mut self.zakat_certificate,
            DocumentKind::LegalDocuments => &mut self.legal_documents,
        }
    }
}
