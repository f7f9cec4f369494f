//! Which screen tree the host renders, decided purely from session state.

use crate::models::user::{UserProfile, UserRole, VerificationStatus};
use crate::services::session_service::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootRoute {
    Loading,
    Auth,
    TalentApp,
    CompanyApp,
}

pub fn root_route(state: &SessionState) -> RootRoute {
    if state.loading {
        return RootRoute::Loading;
    }
    if !state.is_authenticated {
        return RootRoute::Auth;
    }
    match state.user_type {
        Some(UserRole::Talent) => RootRoute::TalentApp,
        Some(UserRole::Company) => RootRoute::CompanyApp,
        None => RootRoute::Auth,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScreen {
    Welcome,
    SelectUserType,
    PhoneLogin,
    OtpVerification,
    TalentRegisterStep1,
    TalentRegisterStep2,
    TalentRegisterStep3,
    TalentRegisterComplete,
    CompanyRegister,
    CompanyVerificationPending,
}

impl AuthScreen {
    /// Forward edge of the unauthenticated stack. After OTP verification the
    /// chosen role picks the registration branch.
    pub fn next(self, role: Option<UserRole>) -> Option<AuthScreen> {
        use AuthScreen::*;

        match self {
            Welcome => Some(SelectUserType),
            SelectUserType => Some(PhoneLogin),
            PhoneLogin => Some(OtpVerification),
            OtpVerification => match role? {
                UserRole::Talent => Some(TalentRegisterStep1),
                UserRole::Company => Some(CompanyRegister),
            },
            TalentRegisterStep1 => Some(TalentRegisterStep2),
            TalentRegisterStep2 => Some(TalentRegisterStep3),
            TalentRegisterStep3 => Some(TalentRegisterComplete),
            CompanyRegister => Some(CompanyVerificationPending),
            TalentRegisterComplete | CompanyVerificationPending => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TalentTab {
    Dashboard,
    Requests,
    History,
    Calendar,
    Profile,
}

impl TalentTab {
    pub const ALL: [TalentTab; 5] = [
        TalentTab::Dashboard,
        TalentTab::Requests,
        TalentTab::History,
        TalentTab::Calendar,
        TalentTab::Profile,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyTab {
    Dashboard,
    CreateProject,
    Projects,
    TalentPool,
    Profile,
}

impl CompanyTab {
    pub const ALL: [CompanyTab; 5] = [
        CompanyTab::Dashboard,
        CompanyTab::CreateProject,
        CompanyTab::Projects,
        CompanyTab::TalentPool,
        CompanyTab::Profile,
    ];
}

/// Whether company screens should show the verification banner. Never used
/// to withhold the company tabs.
pub fn verification_pending(profile: &UserProfile) -> bool {
    profile
        .as_company()
        .map(|company| {
            !company.verified || company.verification_status == VerificationStatus::PendingVerification
        })
        .unwrap_or(false)
}
