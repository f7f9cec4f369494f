use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::time::Duration;
use tracing::info;

use crate::error::{Error, Result};
use crate::models::user::UserProfile;
use crate::services::session_service::SessionService;
use crate::utils::phone::{digits_only, same_mobile, to_international, LOCAL_MOBILE_DIGITS};
use crate::utils::time::simulate_latency;

/// A code has been "sent" to `phone`; resending is locked until
/// `resend_available_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpChallenge {
    pub phone: String,
    pub sent_at: DateTime<Utc>,
    pub resend_available_at: DateTime<Utc>,
    cooldown: ChronoDuration,
}

impl OtpChallenge {
    pub fn seconds_until_resend(&self, now: DateTime<Utc>) -> i64 {
        (self.resend_available_at - now).num_seconds().max(0)
    }

    pub fn resend(&mut self, now: DateTime<Utc>) -> Result<()> {
        let wait = self.seconds_until_resend(now);
        if wait > 0 {
            return Err(Error::BadRequest(format!(
                "You can resend the code in {} seconds",
                wait
            )));
        }
        self.sent_at = now;
        self.resend_available_at = now + self.cooldown;
        info!(phone = %self.phone, "verification code resent");
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    LoggedIn(UserProfile),
    RegistrationRequired { phone: String },
}

#[derive(Debug, Clone)]
pub struct PhoneLogin {
    cooldown: ChronoDuration,
    latency: Duration,
}

impl PhoneLogin {
    pub fn new(cooldown_secs: i64, latency: Duration) -> Self {
        Self {
            cooldown: ChronoDuration::seconds(cooldown_secs),
            latency,
        }
    }

    /// Takes the nine local digits as typed (spaces allowed) and sends a code.
    pub async fn start(&self, input: &str, now: DateTime<Utc>) -> Result<OtpChallenge> {
        let digits = digits_only(input);
        if digits.len() != LOCAL_MOBILE_DIGITS || !digits.starts_with('5') {
            return Err(Error::BadRequest(
                "Please enter a valid Saudi mobile number".to_string(),
            ));
        }

        simulate_latency(self.latency).await;

        let phone = to_international(&digits);
        info!(phone = %phone, "verification code sent");
        Ok(OtpChallenge {
            phone,
            sent_at: now,
            resend_available_at: now + self.cooldown,
            cooldown: self.cooldown,
        })
    }

    /// Checks the code, then either logs in the known profile for this number
    /// or asks the caller to start registration.
    pub async fn verify(
        &self,
        challenge: &OtpChallenge,
        code: &str,
        directory: &[UserProfile],
        session: &SessionService,
    ) -> Result<LoginOutcome> {
        simulate_latency(self.latency).await;
        let phone = session.verify_otp(&challenge.phone, code).await?;

        let Some(profile) = directory.iter().find(|p| same_mobile(p.mobile(), &phone)) else {
            info!(phone = %phone, "no account for number, registration required");
            return Ok(LoginOutcome::RegistrationRequired { phone });
        };

        session.login(profile.clone(), profile.role()).await?;
        Ok(LoginOutcome::LoggedIn(profile.clone()))
    }
}
