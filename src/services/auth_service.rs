use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::models::{Role, Session, User, UserDto};
use crate::storage::{Storage, StorageKeys};
use crate::ui::{Regions, RenderTarget, escape_html};

/// Username of the account seeded on first start.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Password of the account seeded on first start.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Where logout navigates to.
pub const HOME_URL: &str = "index.html";

/// Digest used for password equality checks: rolling multiply-add over the
/// UTF-16 units, wrapped to 32-bit signed, rendered as `h_` plus the hex
/// magnitude. Not collision-resistant; demo credential storage only.
pub fn hash_password(password: &str) -> String {
    let mut hash: i32 = 0;
    for unit in password.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    format!("h_{:x}", i64::from(hash).abs())
}

pub struct AuthService {
    storage: Arc<dyn Storage>,
}

impl AuthService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub fn init(&self, ui: &mut dyn RenderTarget) -> Result<(), AuthError> {
        // Seed the default admin when no users exist yet
        if self.load_users()?.is_empty() {
            self.create_user(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD, Role::Admin)?;
            info!("Seeded default admin account");
        }

        self.update_auth_ui(ui);
        Ok(())
    }

    pub fn register(&self, username: &str, password: &str) -> Result<User, AuthError> {
        self.create_user(username, password, Role::User)
    }

    pub fn create_user(
        &self,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<User, AuthError> {
        let mut users = self.load_users()?;

        if users.iter().any(|u| u.username == username) {
            return Err(AuthError::DuplicateUsername);
        }

        let now = Utc::now();
        let user = User {
            id: now.timestamp_millis(),
            username: username.to_string(),
            password_hash: hash_password(password),
            role,
            created_at: now,
        };

        users.push(user.clone());
        self.save_users(&users)?;

        Ok(user)
    }

    pub fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let users = self.load_users()?;
        let digest = hash_password(password);

        let user = users
            .iter()
            .find(|u| u.username == username && u.password_hash == digest)
            .ok_or(AuthError::InvalidCredentials)?;

        let session = Session::for_user(user);
        let serialized = serde_json::to_string(&session)?;
        self.storage.set_item(StorageKeys::SESSION, &serialized)?;

        info!("User {} logged in", session.username);
        Ok(session)
    }

    pub fn logout(&self, ui: &mut dyn RenderTarget) -> Result<(), AuthError> {
        self.storage.remove_item(StorageKeys::SESSION)?;
        self.update_auth_ui(ui);
        ui.navigate(HOME_URL);
        Ok(())
    }

    /// Current session, if any. An unreadable or corrupt session counts as
    /// logged out rather than surfacing an error.
    pub fn session(&self) -> Option<Session> {
        let raw = match self.storage.get_item(StorageKeys::SESSION) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Session unreadable: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!("Session corrupt: {}", e);
                None
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.session().is_some_and(|s| s.role == Role::Admin)
    }

    pub fn delete_user(&self, id: i64) -> Result<(), AuthError> {
        if !self.is_admin() {
            return Err(AuthError::Unauthorized);
        }

        let mut users = self.load_users()?;
        users.retain(|u| u.id != id);
        self.save_users(&users)?;

        Ok(())
    }

    pub fn list_users(&self) -> Result<Vec<UserDto>, AuthError> {
        if !self.is_admin() {
            return Err(AuthError::Unauthorized);
        }

        let users = self.load_users()?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }

    pub fn update_auth_ui(&self, ui: &mut dyn RenderTarget) {
        ui.replace(Regions::AUTH, self.render_auth_ui());
    }

    pub fn render_auth_ui(&self) -> String {
        match self.session() {
            Some(session) => {
                let mut html = format!(
                    r#"<span style="margin-right: 1rem">Welcome, {}</span>"#,
                    escape_html(&session.username)
                );

                if session.role == Role::Admin {
                    html.push_str(r#"<a href="admin.html" class="login-btn">Admin Panel</a>"#);
                }

                html.push_str(r#"<button class="signup-btn" data-action="logout">Logout</button>"#);
                html
            }
            None => concat!(
                r#"<a href="login.html" class="login-btn">Login</a>"#,
                r#"<a href="signup.html" class="signup-btn">Sign Up</a>"#,
            )
            .to_string(),
        }
    }

    fn load_users(&self) -> Result<Vec<User>, AuthError> {
        match self.storage.get_item(StorageKeys::USERS)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save_users(&self, users: &[User]) -> Result<(), AuthError> {
        let serialized = serde_json::to_string(users)?;
        self.storage.set_item(StorageKeys::USERS, &serialized)?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Username already exists")]
    DuplicateUsername,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Storage error: {0}")]
    Storage(#[from] crate::storage::StorageError),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
