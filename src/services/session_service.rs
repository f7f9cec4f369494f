use serde_json::{Map, Value as JsonValue};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::error::{Error, Result};
use crate::models::user::{UserProfile, UserRole};
use crate::storage::{get_json, set_json, KeyValueStore, USER_KEY, USER_TYPE_KEY};
use crate::utils::time::now;

/// Fields the profile editor may not overwrite.
const IMMUTABLE_PROFILE_FIELDS: &[&str] = &["id", "role"];

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<UserProfile>,
    pub user_type: Option<UserRole>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl SessionState {
    fn initial() -> Self {
        Self {
            user: None,
            user_type: None,
            is_authenticated: false,
            loading: true,
        }
    }

    fn anonymous() -> Self {
        Self {
            loading: false,
            ..Self::initial()
        }
    }

    fn authenticated(user: UserProfile, role: UserRole) -> Self {
        Self {
            user: Some(user),
            user_type: Some(role),
            is_authenticated: true,
            loading: false,
        }
    }
}

/// Current user's identity, persisted to device storage. Owned by the
/// application root and handed to whoever needs it.
#[derive(Clone)]
pub struct SessionService {
    store: Arc<dyn KeyValueStore>,
    state: Arc<RwLock<SessionState>>,
}

impl SessionService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            state: Arc::new(RwLock::new(SessionState::initial())),
        }
    }

    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn current_user(&self) -> Option<UserProfile> {
        self.state.read().await.user.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated
    }

    /// Restores the persisted session. Any read or parse failure is logged and
    /// leaves the session anonymous.
    pub async fn load(&self) -> SessionState {
        let restored = match self.read_persisted().await {
            Ok(Some((user, role))) => {
                info!(user_id = %user.id(), role = %role, "session restored");
                SessionState::authenticated(user, role)
            }
            Ok(None) => SessionState::anonymous(),
            Err(e) => {
                error!(error = %e, "Error loading user data");
                SessionState::anonymous()
            }
        };

        let mut state = self.state.write().await;
        *state = restored;
        state.clone()
    }

    async fn read_persisted(&self) -> Result<Option<(UserProfile, UserRole)>> {
        let user = get_json::<UserProfile>(self.store.as_ref(), USER_KEY).await?;
        let role = self.store.get_item(USER_TYPE_KEY).await?;

        let (Some(user), Some(role)) = (user, role) else {
            return Ok(None);
        };
        let role: UserRole = role.parse()?;
        if user.role() != role {
            warn!(
                stored = %role,
                profile = %user.role(),
                "stored user type does not match profile"
            );
            return Ok(None);
        }
        Ok(Some((user, role)))
    }

    pub async fn login(&self, profile: UserProfile, role: UserRole) -> Result<()> {
        if profile.role() != role {
            return Err(Error::BadRequest(format!(
                "Profile is a {} account, not {}",
                profile.role(),
                role
            )));
        }

        let mut state = self.state.write().await;

        if let Err(e) = set_json(self.store.as_ref(), USER_KEY, &profile).await {
            error!(error = %e, "Error saving user data");
            return Err(e);
        }
        if let Err(e) = self.store.set_item(USER_TYPE_KEY, role.as_str()).await {
            error!(error = %e, "Error saving user data");
            if let Err(cleanup) = self.store.remove_item(USER_KEY).await {
                warn!(error = %cleanup, "could not roll back partially saved session");
            }
            return Err(e);
        }

        info!(user_id = %profile.id(), role = %role, "logged in");
        *state = SessionState::authenticated(profile, role);
        Ok(())
    }

    pub async fn logout(&self) -> Result<()> {
        let mut state = self.state.write().await;

        let removed = async {
            self.store.remove_item(USER_KEY).await?;
            self.store.remove_item(USER_TYPE_KEY).await
        }
        .await;

        if let Err(e) = removed {
            error!(error = %e, "Error logging out");
            return Err(e);
        }

        info!("logged out");
        *state = SessionState::anonymous();
        Ok(())
    }

    /// Shallow-merges `patch` into the current profile and persists the result.
    pub async fn update_user(&self, patch: Map<String, JsonValue>) -> Result<UserProfile> {
        if let Some(field) = IMMUTABLE_PROFILE_FIELDS
            .iter()
            .find(|field| patch.contains_key(**field))
        {
            return Err(Error::BadRequest(format!("Field '{}' cannot be changed", field)));
        }

        let mut state = self.state.write().await;
        let current = state
            .user
            .as_ref()
            .ok_or_else(|| Error::Unauthorized("No active session".to_string()))?;

        let JsonValue::Object(mut merged) = serde_json::to_value(current)? else {
            return Err(Error::Internal("Profile did not serialize to an object".to_string()));
        };
        merged.extend(patch);

        let updated: UserProfile = serde_json::from_value(JsonValue::Object(merged))
            .map_err(|e| Error::BadRequest(format!("Invalid profile update: {}", e)))?;

        if let Err(e) = set_json(self.store.as_ref(), USER_KEY, &updated).await {
            error!(error = %e, "Error updating user data");
            return Err(e);
        }

        info!(user_id = %updated.id(), "profile updated");
        state.user = Some(updated.clone());
        Ok(updated)
    }

    /// Stamps identifier and bookkeeping fields onto a freshly registered
    /// profile, then logs it in. This is the only way new accounts appear.
    pub async fn complete_registration(
        &self,
        mut profile: UserProfile,
        role: UserRole,
    ) -> Result<UserProfile> {
        let at = now();
        {
            let account = profile.account_mut();
            account.id = format!("{}{}", role.id_prefix(), at.timestamp_millis());
            account.member_since = Some(at);
            account.rating = 0.0;
            account.total_projects = 0;
            account.total_reviews = 0;
        }

        self.login(profile.clone(), role).await?;
        info!(user_id = %profile.id(), role = %role, "registration completed");
        Ok(profile)
    }

    /// Simulated one-time-code check: any four-character code is accepted.
    pub async fn verify_otp(&self, phone: &str, code: &str) -> Result<String> {
        if code.chars().count() == 4 {
            Ok(phone.to_string())
        } else {
            Err(Error::InvalidOtp)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, MockKeyValueStore};
    use crate::test_support::{sample_company, sample_talent};
    use serde_json::json;

    #[tokio::test]
    async fn load_without_persisted_data_is_anonymous() {
        let session = SessionService::new(Arc::new(MemoryStore::new()));
        assert!(session.snapshot().await.loading);

        let state = session.load().await;
        assert!(!state.is_authenticated);
        assert!(!state.loading);
        assert!(state.user.is_none());
    }

    #[tokio::test]
    async fn load_swallows_storage_failures() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_get_item()
            .returning(|_| Err(Error::Storage("disk unavailable".to_string())));

        let session = SessionService::new(Arc::new(store));
        let state = session.load().await;
        assert!(!state.is_authenticated);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn load_ignores_corrupt_profile() {
        let store = MemoryStore::new();
        store.set_item(USER_KEY, "{not json").await.unwrap();
        store.set_item(USER_TYPE_KEY, "talent").await.unwrap();

        let session = SessionService::new(Arc::new(store));
        assert!(!session.load().await.is_authenticated);
    }

    #[tokio::test]
    async fn failed_login_leaves_state_untouched() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_set_item()
            .returning(|_, _| Err(Error::Storage("quota exceeded".to_string())));

        let session = SessionService::new(Arc::new(store));
        let err = session
            .login(sample_talent("T1"), UserRole::Talent)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Storage error: quota exceeded");
        assert!(!session.is_authenticated().await);
        assert!(session.current_user().await.is_none());
    }

    #[tokio::test]
    async fn failed_role_write_rolls_back_profile() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_set_item()
            .withf(|key, _| key == USER_KEY)
            .returning(|_, _| Ok(()));
        store
            .expect_set_item()
            .withf(|key, _| key == USER_TYPE_KEY)
            .returning(|_, _| Err(Error::Storage("write failed".to_string())));
        store
            .expect_remove_item()
            .withf(|key| key == USER_KEY)
            .times(1)
            .returning(|_| Ok(()));

        let session = SessionService::new(Arc::new(store));
        assert!(session
            .login(sample_talent("T1"), UserRole::Talent)
            .await
            .is_err());
        assert!(!session.is_authenticated().await);
    }

    #[tokio::test]
    async fn login_rejects_mismatched_role() {
        let session = SessionService::new(Arc::new(MemoryStore::new()));
        let err = session
            .login(sample_company("C1"), UserRole::Talent)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }

    #[tokio::test]
    async fn failed_logout_keeps_session() {
        let mut store = MockKeyValueStore::new();
        store.expect_set_item().returning(|_, _| Ok(()));
        store
            .expect_remove_item()
            .returning(|_| Err(Error::Storage("locked".to_string())));

        let session = SessionService::new(Arc::new(store));
        session
            .login(sample_talent("T1"), UserRole::Talent)
            .await
            .unwrap();

        assert!(session.logout().await.is_err());
        assert!(session.is_authenticated().await);
    }

    #[tokio::test]
    async fn logout_clears_storage() {
        let store = MemoryStore::new();
        let session = SessionService::new(Arc::new(store.clone()));
        session
            .login(sample_company("C1"), UserRole::Company)
            .await
            .unwrap();
        assert_eq!(store.keys().await.len(), 2);

        session.logout().await.unwrap();
        assert!(store.keys().await.is_empty());
        let state = session.snapshot().await;
        assert!(!state.is_authenticated);
        assert!(state.user_type.is_none());
    }

    #[tokio::test]
    async fn update_user_merges_and_persists() {
        let store = MemoryStore::new();
        let session = SessionService::new(Arc::new(store.clone()));
        session
            .login(sample_talent("T1"), UserRole::Talent)
            .await
            .unwrap();

        let patch = json!({ "city": "Jeddah", "willingToTravel": true });
        let updated = session
            .update_user(patch.as_object().cloned().unwrap())
            .await
            .unwrap();

        let talent = updated.as_talent().unwrap();
        assert_eq!(talent.account.city, "Jeddah");
        assert!(talent.willing_to_travel);
        assert_eq!(talent.full_name_english, "Sara Alqahtani");

        let reloaded = SessionService::new(Arc::new(store));
        let state = reloaded.load().await;
        assert_eq!(state.user, Some(updated));
    }

    #[tokio::test]
    async fn update_user_requires_session_and_protects_identity() {
        let session = SessionService::new(Arc::new(MemoryStore::new()));
        let patch = json!({ "city": "Jeddah" }).as_object().cloned().unwrap();
        assert!(matches!(
            session.update_user(patch).await,
            Err(Error::Unauthorized(_))
        ));

        session
            .login(sample_talent("T1"), UserRole::Talent)
            .await
            .unwrap();
        let patch = json!({ "id": "T999" }).as_object().cloned().unwrap();
        assert!(matches!(
            session.update_user(patch).await,
            Err(Error::BadRequest(_))
        ));
        let patch = json!({ "age": "old" }).as_object().cloned().unwrap();
        assert!(matches!(
            session.update_user(patch).await,
            Err(Error::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn complete_registration_stamps_bookkeeping() {
        let session = SessionService::new(Arc::new(MemoryStore::new()));
        let mut draft = sample_company("");
        draft.account_mut().rating = 4.5;

        let profile = session
            .complete_registration(draft, UserRole::Company)
            .await
            .unwrap();

        assert!(profile.id().starts_with('C'));
        assert!(profile.id()[1..].parse::<i64>().is_ok());
        assert_eq!(profile.account().rating, 0.0);
        assert!(profile.account().member_since.is_some());
        assert_eq!(session.current_user().await, Some(profile));
    }

    #[tokio::test]
    async fn otp_accepts_any_four_characters() {
        let session = SessionService::new(Arc::new(MemoryStore::new()));
        assert_eq!(
            session.verify_otp("+966512345678", "1234").await.unwrap(),
            "+966512345678"
        );
        assert_eq!(
            session.verify_otp("+966512345678", "ab!z").await.unwrap(),
            "+966512345678"
        );
        assert!(matches!(
            session.verify_otp("+966512345678", "123").await,
            Err(Error::InvalidOtp)
        ));
        assert!(matches!(
            session.verify_otp("+966512345678", "12345").await,
            Err(Error::InvalidOtp)
        ));
    }
}
