use std::sync::Arc;

use chrono::Utc;
use csvnest_core::constants::{API_KEY_KEY, THEME_KEY, USER_KEY};
use csvnest_core::error::{AppError, AppResult};
use csvnest_core::models::{Theme, User};
use csvnest_core::validation::validate_email;
use csvnest_processing::{FilenameAnalyzer, MetadataAnalyzer};

use super::store::LocalStore;

/// Local session: the logged-in user, theme preference and saved API key.
///
/// Login is a local gate only. The email is format-checked and remembered;
/// nothing is verified against any service.
#[derive(Debug)]
pub struct SessionService {
    store: LocalStore,
}

impl SessionService {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// Open the store at `path` and restore whatever session it holds.
    pub async fn load(path: impl Into<std::path::PathBuf>) -> AppResult<Self> {
        let store = LocalStore::open(path).await?;
        let session = Self::new(store);

        tracing::debug!(
            logged_in = session.is_logged_in(),
            theme = %session.theme(),
            "Session restored"
        );

        Ok(session)
    }

    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    /// The remembered user, if the stored record parses.
    pub fn current_user(&self) -> Option<User> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str::<User>(raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "Stored user record is unreadable, treating as logged out");
                None
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user().is_some()
    }

    pub fn require_login(&self) -> AppResult<User> {
        self.current_user().ok_or(AppError::LoginRequired)
    }

    pub async fn login(&mut self, email: &str) -> AppResult<User> {
        let email = email.trim();
        validate_email(email)?;

        let user = User {
            email: email.to_string(),
            logged_in_at: Some(Utc::now()),
        };
        self.store.set(USER_KEY, serde_json::to_string(&user)?).await?;

        tracing::info!(email = %user.email, "User logged in");
        Ok(user)
    }

    /// Forget the user. Theme and API key are kept.
    pub async fn logout(&mut self) -> AppResult<()> {
        self.store.remove(USER_KEY).await?;
        tracing::info!("User logged out");
        Ok(())
    }

    pub fn theme(&self) -> Theme {
        Theme::from_stored(self.store.get(THEME_KEY))
    }

    pub async fn set_theme(&mut self, theme: Theme) -> AppResult<Theme> {
        self.store.set(THEME_KEY, theme.as_str()).await?;
        Ok(theme)
    }

    pub async fn toggle_theme(&mut self) -> AppResult<Theme> {
        let next = self.theme().toggled();
        self.set_theme(next).await
    }

    pub fn api_key(&self) -> Option<&str> {
        self.store.get(API_KEY_KEY).filter(|k| !k.is_empty())
    }

    /// Save the key trimmed. An empty key is saved as empty, which reads back as unset.
    pub async fn save_api_key(&mut self, key: &str) -> AppResult<()> {
        let key = key.trim();
        self.store.set(API_KEY_KEY, key).await?;
        tracing::info!(has_key = !key.is_empty(), "API key saved");
        Ok(())
    }

    /// The analyzer generation runs with. The saved API key is not used by
    /// any analyzer yet, so this is always the filename heuristic.
    pub fn analyzer(&self) -> Arc<dyn MetadataAnalyzer> {
        if self.api_key().is_some() {
            tracing::debug!("API key present but unused, generating from filenames");
        }
        Arc::new(FilenameAnalyzer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn session_in(dir: &TempDir) -> SessionService {
        SessionService::load(dir.path().join("storage.json")).await.unwrap()
    }

    #[tokio::test]
    async fn test_login_persists_trimmed_email() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir).await;
        assert!(!session.is_logged_in());

        let user = session.login("  artist@example.com ").await.unwrap();
        assert_eq!(user.email, "artist@example.com");

        let restored = session_in(&dir).await;
        assert_eq!(restored.require_login().unwrap().email, "artist@example.com");
    }

    #[tokio::test]
    async fn test_login_rejects_invalid_email_and_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir).await;

        for bad in ["", "no-at-sign", "a@b", "a b@c.d"] {
            let err = session.login(bad).await.unwrap_err();
            assert!(matches!(err, AppError::InvalidEmail(_)));
        }
        assert!(matches!(session.require_login(), Err(AppError::LoginRequired)));
    }

    #[tokio::test]
    async fn test_stored_user_with_email_only_is_logged_in() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        tokio::fs::write(&path, r#"{"csvnest_user":"{\"email\":\"a@b.co\"}"}"#)
            .await
            .unwrap();

        let session = SessionService::load(&path).await.unwrap();
        assert_eq!(session.current_user().unwrap().email, "a@b.co");
    }

    #[tokio::test]
    async fn test_logout_keeps_theme_and_api_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir).await;
        session.login("a@b.co").await.unwrap();
        session.set_theme(Theme::Dark).await.unwrap();
        session.save_api_key("sk-123").await.unwrap();

        session.logout().await.unwrap();

        let restored = session_in(&dir).await;
        assert!(!restored.is_logged_in());
        assert_eq!(restored.theme(), Theme::Dark);
        assert_eq!(restored.api_key(), Some("sk-123"));
    }

    #[tokio::test]
    async fn test_theme_toggle_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir).await;
        assert_eq!(session.theme(), Theme::Light);

        assert_eq!(session.toggle_theme().await.unwrap(), Theme::Dark);
        assert_eq!(session.store().get(THEME_KEY), Some("dark"));
        assert_eq!(session_in(&dir).await.theme(), Theme::Dark);

        assert_eq!(session.toggle_theme().await.unwrap(), Theme::Light);
        assert_eq!(session_in(&dir).await.theme(), Theme::Light);
    }

    #[tokio::test]
    async fn test_api_key_is_trimmed_and_blank_reads_unset() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir).await;

        session.save_api_key("  key-with-spaces \n").await.unwrap();
        assert_eq!(session.api_key(), Some("key-with-spaces"));

        session.save_api_key("   ").await.unwrap();
        assert_eq!(session.api_key(), None);
        assert_eq!(session.store().get(API_KEY_KEY), Some(""));
    }

    #[tokio::test]
    async fn test_analyzer_ignores_api_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir).await;
        session.save_api_key("sk-123").await.unwrap();
        assert_eq!(session.analyzer().name(), "filename");
    }
}
