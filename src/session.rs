//! Session context
//!
//! Login state, role and display name live in one explicit object that is
//! loaded once at start-up and cleared on logout.

use crate::models::UserRole;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};
use validator::{Validate, ValidationErrors};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid login details: {0}")]
    InvalidCredentials(String),

    #[error("Session file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<ValidationErrors> for SessionError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_values()
            .flat_map(|errs| errs.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .collect();
        messages.sort();
        SessionError::InvalidCredentials(messages.join("; "))
    }
}

/// Login form submitted by a tenant or an owner
#[derive(Debug, Clone, Validate)]
pub struct LoginForm {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email is invalid")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    pub role: UserRole,

    /// Display name; derived from the email when absent
    pub name: Option<String>,
}

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub user_name: String,
    pub role: UserRole,
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    /// Route the user lands on after logging in
    pub fn landing_route(&self) -> &'static str {
        match self.role {
            UserRole::Owner => "/dashboard",
            UserRole::Tenant | UserRole::Admin => "/user-dashboard",
        }
    }
}

/// Owns the session for the lifetime of the app
#[derive(Debug)]
pub struct SessionContext {
    file: PathBuf,
    current: Option<Session>,
}

impl SessionContext {
    /// Read the persisted session once. A missing, unreadable or corrupt
    /// file means nobody is logged in.
    pub async fn init(file: impl Into<PathBuf>) -> Self {
        let file = file.into();
        let current = match tokio::fs::read_to_string(&file).await {
            Ok(content) => match serde_json::from_str::<Session>(&content) {
                Ok(session) => {
                    info!("👤 Restored session for {}", session.user_name);
                    Some(session)
                }
                Err(e) => {
                    warn!("Ignoring corrupt session file {:?}: {}", file, e);
                    None
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Could not read session file {:?}: {}", file, e);
                None
            }
        };

        Self { file, current }
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Validate the form, start a session and persist it. Returns the new
    /// session; its landing route tells the caller where to navigate.
    pub async fn login(&mut self, form: LoginForm) -> Result<&Session, SessionError> {
        form.validate()?;

        let user_name = form
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| {
                form.email
                    .split('@')
                    .next()
                    .unwrap_or_default()
                    .to_string()
            });

        let session = Session {
            email: form.email,
            user_name,
            role: form.role,
            logged_in_at: Utc::now(),
        };

        if let Some(parent) = self.file.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(&session)?;
        tokio::fs::write(&self.file, json).await?;

        info!(
            "✅ Login successful, welcome back to StayLoft as a {:?}",
            session.role
        );
        Ok(self.current.insert(session))
    }

    /// End the session and remove the persisted file
    pub async fn logout(&mut self) -> Result<(), SessionError> {
        if let Some(session) = self.current.take() {
            info!("👋 Logged out {}", session.user_name);
        }

        match tokio::fs::remove_file(&self.file).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str, role: UserRole) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
            role,
            name: None,
        }
    }

    #[tokio::test]
    async fn starts_logged_out_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = SessionContext::init(dir.path().join("session.json")).await;
        assert!(!ctx.is_logged_in());
    }

    #[tokio::test]
    async fn login_persists_and_restores() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("nested").join("session.json");

        let mut ctx = SessionContext::init(&file).await;
        let session = ctx
            .login(form("asha@example.com", "secret", UserRole::Owner))
            .await
            .unwrap();
        assert_eq!(session.user_name, "asha");
        assert_eq!(session.landing_route(), "/dashboard");

        let restored = SessionContext::init(&file).await;
        assert_eq!(restored.current(), ctx.current());
    }

    #[tokio::test]
    async fn tenants_land_on_user_dashboard() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = SessionContext::init(dir.path().join("s.json")).await;
        let mut login = form("ravi@example.com", "pw", UserRole::Tenant);
        login.name = Some("Ravi K".to_string());

        let session = ctx.login(login).await.unwrap();
        assert_eq!(session.user_name, "Ravi K");
        assert_eq!(session.landing_route(), "/user-dashboard");
    }

    #[tokio::test]
    async fn empty_fields_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("s.json");
        let mut ctx = SessionContext::init(&file).await;

        let err = ctx.login(form("", "", UserRole::Tenant)).await.unwrap_err();
        match err {
            SessionError::InvalidCredentials(msg) => {
                assert!(msg.contains("Email is required"));
                assert!(msg.contains("Password is required"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!ctx.is_logged_in());
        assert!(!file.exists());
    }

    #[tokio::test]
    async fn malformed_email_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("s.json");
        let mut ctx = SessionContext::init(&file).await;

        let err = ctx
            .login(form("not-an-email", "pw", UserRole::Tenant))
            .await
            .unwrap_err();
        match err {
            SessionError::InvalidCredentials(msg) => assert_eq!(msg, "Email is invalid"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!ctx.is_logged_in());
        assert!(!file.exists());
    }

    #[tokio::test]
    async fn only_owners_land_on_owner_dashboard() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = SessionContext::init(dir.path().join("s.json")).await;

        let session = ctx
            .login(form("root@example.com", "pw", UserRole::Admin))
            .await
            .unwrap();
        assert_eq!(session.landing_route(), "/user-dashboard");
    }

    #[tokio::test]
    async fn logout_clears_memory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("s.json");
        let mut ctx = SessionContext::init(&file).await;
        ctx.login(form("meera@example.com", "pw", UserRole::Tenant))
            .await
            .unwrap();
        assert!(file.exists());

        ctx.logout().await.unwrap();
        assert!(!ctx.is_logged_in());
        assert!(!file.exists());

        // logging out twice is harmless
        ctx.logout().await.unwrap();
    }

    #[tokio::test]
    async fn corrupt_file_means_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("s.json");
        std::fs::write(&file, "not json").unwrap();

        let ctx = SessionContext::init(&file).await;
        assert!(ctx.current().is_none());
    }

    #[tokio::test]
    async fn unreadable_file_means_logged_out() {
        let dir = tempfile::tempdir().unwrap();

        // a directory cannot be read as a file
        let ctx = SessionContext::init(dir.path()).await;
        assert!(!ctx.is_logged_in());
    }
}
