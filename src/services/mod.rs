pub mod company_registration;
pub mod phone_login;
pub mod project_service;
pub mod request_service;
pub mod session_service;
pub mod talent_registration;

pub use company_registration::CompanyRegistration;
pub use phone_login::{LoginOutcome, OtpChallenge, PhoneLogin};
pub use project_service::ProjectService;
pub use request_service::{CountdownTicker, RefreshTrigger, RequestBoard, RequestService};
pub use session_service::{SessionService, SessionState};
pub use talent_registration::{TalentRegistration, TalentStep};
