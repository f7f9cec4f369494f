use std::time::Duration;
use tracing::{info, warn};

use crate::dto::registration_dto::{
    TalentAvailabilityPayload, TalentContactPayload, TalentPersonalPayload,
};
use crate::error::{Error, Result};
use crate::models::user::{AccountInfo, ProfileStatus, TalentProfile, UserProfile, UserRole};
use crate::services::session_service::SessionService;
use crate::utils::phone::{format_mobile, local_digits, to_international};
use crate::utils::time::{now, simulate_latency};
use crate::utils::validation::validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TalentStep {
    Contact,
    Personal,
    Availability,
    Complete,
}

/// Three-step talent sign-up. Each accepted step is kept, so stepping back or
/// a failed final submit never loses earlier input.
pub struct TalentRegistration {
    step: TalentStep,
    verified_phone: Option<String>,
    contact: Option<TalentContactPayload>,
    personal: Option<TalentPersonalPayload>,
    availability: Option<TalentAvailabilityPayload>,
    latency: Duration,
}

impl TalentRegistration {
    pub fn new(verified_phone: Option<String>, latency: Duration) -> Self {
        Self {
            step: TalentStep::Contact,
            verified_phone,
            contact: None,
            personal: None,
            availability: None,
            latency,
        }
    }

    pub fn step(&self) -> TalentStep {
        self.step
    }

    /// Step 1 form contents, pre-filled from the verified phone on first visit.
    pub fn contact_form(&self) -> TalentContactPayload {
        if let Some(contact) = &self.contact {
            return contact.clone();
        }
        TalentContactPayload {
            mobile: self
                .verified_phone
                .as_deref()
                .map(|phone| format_mobile(&local_digits(phone)))
                .unwrap_or_default(),
            ..TalentContactPayload::default()
        }
    }

    pub fn personal_form(&self) -> TalentPersonalPayload {
        self.personal.clone().unwrap_or_default()
    }

    pub fn availability_form(&self) -> TalentAvailabilityPayload {
        self.availability.clone().unwrap_or_default()
    }

    pub fn submit_contact(&mut self, payload: TalentContactPayload) -> Result<()> {
        self.expect_step(TalentStep::Contact)?;
        validate(&payload)?;
        self.contact = Some(payload);
        self.step = TalentStep::Personal;
        Ok(())
    }

    pub fn submit_personal(&mut self, payload: TalentPersonalPayload) -> Result<()> {
        self.expect_step(TalentStep::Personal)?;
        validate(&payload)?;
        self.personal = Some(payload);
        self.step = TalentStep::Availability;
        Ok(())
    }

    pub fn back(&mut self) {
        self.step = match self.step {
            TalentStep::Personal => TalentStep::Contact,
            TalentStep::Availability => TalentStep::Personal,
            other => other,
        };
    }

    /// Final step. The draft is kept even when validation or storage fails so
    /// the form can be re-presented for retry.
    pub async fn submit_availability(
        &mut self,
        payload: TalentAvailabilityPayload,
        session: &SessionService,
    ) -> Result<UserProfile> {
        self.expect_step(TalentStep::Availability)?;
        self.availability = Some(payload.clone());
        validate(&payload)?;

        let profile = self.build_profile(&payload)?;
        simulate_latency(self.latency).await;

        match session.complete_registration(profile, UserRole::Talent).await {
            Ok(profile) => {
                info!(user_id = %profile.id(), "talent registration complete");
                self.step = TalentStep::Complete;
                Ok(profile)
            }
            Err(e) => {
                warn!(error = %e, "talent registration failed");
                Err(e)
            }
        }
    }

    fn expect_step(&self, expected: TalentStep) -> Result<()> {
        if self.step != expected {
            return Err(Error::BadRequest(format!(
                "Registration is at step {:?}, not {:?}",
                self.step, expected
            )));
        }
        Ok(())
    }

    fn build_profile(&self, availability: &TalentAvailabilityPayload) -> Result<UserProfile> {
        let contact = self
            .contact
            .as_ref()
            .ok_or_else(|| Error::BadRequest("Contact details are missing".to_string()))?;
        let personal = self
            .personal
            .as_ref()
            .ok_or_else(|| Error::BadRequest("Personal details are missing".to_string()))?;

        let account = AccountInfo::registering(
            to_international(&contact.mobile),
            contact.email.clone(),
            required(&personal.city, "city")?,
            ProfileStatus::Active,
            now(),
        );

        Ok(UserProfile::Talent(TalentProfile {
            account,
            full_name_english: personal.full_name_english.trim().to_string(),
            full_name_arabic: personal
                .full_name_arabic
                .clone()
                .filter(|name| !name.trim().is_empty()),
            age: required(&personal.age, "age")?,
            date_of_birth: personal.date_of_birth.clone(),
            nationality: required(&personal.nationality, "nationality")?,
            gender: required(&personal.gender, "gender")?,
            physical: personal.physical_attributes(),
            availability: availability.availability.clone(),
            work_preference: required(&availability.work_preference, "work_preference")?,
            notice_period: required(&availability.notice_period, "notice_period")?,
            willing_to_travel: availability.willing_to_travel,
        }))
    }
}

fn required<T: Clone>(value: &Option<T>, field: &str) -> Result<T> {
    value
        .clone()
        .ok_or_else(|| Error::BadRequest(format!("{} is required", field)))
}
