//! User business rules
//!
//! Covers the admin user screen plus the pin-pad login the GUI drives.

use shared::models::{PasswordChange, User, UserCreate};

use super::{Op, OpsError, OpsErrorKind, OpsResult, check_page, check_payload, check_required_text};
use crate::db::repository::UserRepository;

/// Pin-pad input check: digits only, non-empty.
pub fn validate_pin(text: &str) -> OpsResult<()> {
    if text.is_empty() {
        return Err(OpsError::new(
            Op::ValidatePin,
            OpsErrorKind::Validation("No PIN was provided.".into()),
        ));
    }
    if !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(OpsError::new(
            Op::ValidatePin,
            OpsErrorKind::Validation("Invalid PIN format.".into()),
        ));
    }
    Ok(())
}

#[derive(Clone)]
pub struct UserOps {
    repo: UserRepository,
}

impl UserOps {
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    fn check_password(op: Op, password: &str) -> OpsResult<()> {
        check_required_text(
            op,
            password,
            "No password was provided.",
            "Invalid password format.",
        )
    }

    pub async fn create(&self, data: &UserCreate) -> OpsResult<User> {
        Self::check_password(Op::CreateUser, &data.password)?;
        check_payload(Op::CreateUser, data)?;
        self.repo
            .create(data)
            .await
            .map_err(|e| OpsError::new(Op::CreateUser, e))
    }

    pub async fn delete(&self, id: i64) -> OpsResult<()> {
        self.repo
            .delete(id)
            .await
            .map_err(|e| OpsError::new(Op::DeleteUser, e))
    }

    pub async fn change_password(&self, id: i64, data: &PasswordChange) -> OpsResult<()> {
        Self::check_password(Op::ChangePassword, &data.new_password)?;
        check_payload(Op::ChangePassword, data)?;
        self.repo
            .update_password(id, data)
            .await
            .map_err(|e| OpsError::new(Op::ChangePassword, e))
    }

    pub async fn list(
        &self,
        page_index: i64,
        page_size: i64,
        sort_by: Option<&str>,
    ) -> OpsResult<Vec<User>> {
        let page = check_page(Op::GetUserList, page_index, page_size)?;
        self.repo
            .list(page, sort_by)
            .await
            .map_err(|e| OpsError::new(Op::GetUserList, e))
    }

    pub async fn get_by_id(&self, id: i64) -> OpsResult<Option<User>> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| OpsError::new(Op::GetUserById, e))
    }

    pub async fn get_by_username(&self, username: &str) -> OpsResult<Option<User>> {
        if username.is_empty() {
            return Err(OpsError::new(
                Op::GetUserByUsername,
                OpsErrorKind::Validation("No username provided.".into()),
            ));
        }
        self.repo
            .find_by_username(username)
            .await
            .map_err(|e| OpsError::new(Op::GetUserByUsername, e))
    }

    /// Check credentials and return the user.
    ///
    /// Unknown usernames and wrong passwords produce the same message so the
    /// login screen cannot be used to enumerate accounts.
    pub async fn login(&self, username: &str, password: &str) -> OpsResult<User> {
        let rejected = || {
            OpsError::new(
                Op::Login,
                OpsErrorKind::Validation("Invalid username or password.".into()),
            )
        };

        Self::check_password(Op::Login, password)?;
        let user = self
            .repo
            .find_by_username(username)
            .await
            .map_err(|e| OpsError::new(Op::Login, e))?
            .ok_or_else(rejected)?;

        match user.verify_password(password) {
            Ok(true) => Ok(user),
            _ => Err(rejected()),
        }
    }
}
