use std::time::Duration;
use tracing::{info, warn};

use crate::dto::registration_dto::{CompanyRegistrationPayload, DocumentKind};
use crate::error::{Error, Result};
use crate::models::user::{
    AccountInfo, CompanyDocuments, CompanyProfile, DocumentRef, ProfileStatus, UserProfile,
    UserRole, VerificationStatus,
};
use crate::services::session_service::SessionService;
use crate::utils::phone::{format_mobile, local_digits, to_international};
use crate::utils::time::{now, simulate_latency};
use crate::utils::validation::validate;

/// Single-screen company sign-up with three required document uploads.
pub struct CompanyRegistration {
    form: CompanyRegistrationPayload,
    completed: Option<UserProfile>,
    latency: Duration,
}

impl CompanyRegistration {
    pub fn new(verified_phone: Option<String>, latency: Duration) -> Self {
        let form = CompanyRegistrationPayload {
            mobile: verified_phone
                .as_deref()
                .map(|phone| format_mobile(&local_digits(phone)))
                .unwrap_or_default(),
            ..CompanyRegistrationPayload::default()
        };

        Self {
            form,
            completed: None,
            latency,
        }
    }

    pub fn form(&self) -> &CompanyRegistrationPayload {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CompanyRegistrationPayload {
        &mut self.form
    }

    pub fn attach_document(&mut self, kind: DocumentKind, document: DocumentRef) {
        *self.form.document_slot(kind) = Some(document);
    }

    pub fn remove_document(&mut self, kind: DocumentKind) -> Option<DocumentRef> {
        self.form.document_slot(kind).take()
    }

    pub fn completed(&self) -> Option<&UserProfile> {
        self.completed.as_ref()
    }

    /// Validates the whole form and registers the company as pending
    /// verification. The form is untouched on failure.
    pub async fn submit(&mut self, session: &SessionService) -> Result<UserProfile> {
        if self.completed.is_some() {
            return Err(Error::BadRequest("Company is already registered".to_string()));
        }
        validate(&self.form)?;

        let profile = self.build_profile()?;
        simulate_latency(self.latency).await;

        match session.complete_registration(profile, UserRole::Company).await {
            Ok(profile) => {
                info!(user_id = %profile.id(), "company registration submitted for verification");
                self.completed = Some(profile.clone());
                Ok(profile)
            }
            Err(e) => {
                warn!(error = %e, "company registration failed");
                Err(e)
            }
        }
    }

    fn build_profile(&self) -> Result<UserProfile> {
        let form = &self.form;
        let registered_at = now();

        let account = AccountInfo::registering(
            to_international(&form.mobile),
            Some(form.email.trim().to_string()),
            required(&form.city, "city")?,
            ProfileStatus::PendingVerification,
            registered_at,
        );

        let documents = CompanyDocuments {
            commercial_registration: required(
                &form.commercial_registration,
                "commercial_registration",
            )?,
            zakat_certificate: required(&form.zakat_certificate, "zakat_certificate")?,
            legal_documents: required(&form.legal_documents, "legal_documents")?,
            uploaded_at: registered_at,
        };

        Ok(UserProfile::Company(CompanyProfile {
            account,
            company_name: form.company_name.trim().to_string(),
            company_name_arabic: form
                .company_name_arabic
                .clone()
                .filter(|name| !name.trim().is_empty()),
            company_type: required(&form.company_type, "company_type")?,
            cr_number: form.cr_number.clone().filter(|cr| !cr.trim().is_empty()),
            documents,
            verification_status: VerificationStatus::PendingVerification,
            verified: false,
        }))
    }
}

fn required<T: Clone>(value: &Option<T>, field: &str) -> Result<T> {
    value
        .clone()
        .ok_or_else(|| Error::BadRequest(format!("{} is required", field)))
}
