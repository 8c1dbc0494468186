// ABOUTME: Account sign-up, sign-in, and session management
// ABOUTME: bcrypt password hashing with uniform invalid-credential errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Authentication
//!
//! Passwords are hashed with bcrypt at sign-up and verified at sign-in; the
//! plaintext never reaches storage. Sign-in failures return the same message
//! whether the email is unknown or the password is wrong, so the API does not
//! leak which accounts exist.
//!
//! The session (the logged-in [`PublicUser`]) and the remembered email live in
//! local storage only.

use crate::constants::auth::MIN_PASSWORD_LEN;
use crate::errors::{AppError, AppResult};
use crate::models::{new_user_id, NewUser, PublicUser, User, UserInfo};
use crate::storage::{Storage, StorageProvider};
use chrono::Utc;
use tracing::info;

const INVALID_CREDENTIALS: &str = "invalid email or password";

/// Authentication and session service
#[derive(Clone)]
pub struct AuthService {
    storage: Storage,
}

impl AuthService {
    /// Create the service over the selected storage backend
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Register a new account and open a session for it
    ///
    /// The profile fields carried on the form (weight, height, age, gender)
    /// are seeded into the stored [`UserInfo`] so the goal calculators have
    /// data to work with immediately.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ErrorCode::MissingRequiredField`] when email,
    /// password, or a name is blank,
    /// [`crate::errors::ErrorCode::InvalidInput`] when the password is too
    /// short, and [`crate::errors::ErrorCode::ResourceAlreadyExists`] when the
    /// email is taken.
    pub async fn sign_up(&self, new_user: NewUser) -> AppResult<PublicUser> {
        for (value, field) in [
            (&new_user.email, "email"),
            (&new_user.password, "password"),
            (&new_user.first_name, "firstName"),
            (&new_user.last_name, "lastName"),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::missing_field(field));
            }
        }
        if new_user.password.len() < MIN_PASSWORD_LEN {
            return Err(AppError::invalid_input(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        let email = new_user.email.trim().to_lowercase();
        if self.storage.get_user_by_email(&email).await?.is_some() {
            return Err(AppError::already_exists(format!(
                "an account with email {email} already exists"
            )));
        }

        let password_hash = bcrypt::hash(&new_user.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::internal(format!("password hashing failed: {e}")))?;

        let user = User {
            id: new_user_id(),
            email,
            password_hash,
            first_name: new_user.first_name.trim().to_string(),
            last_name: new_user.last_name.trim().to_string(),
            phone: new_user.phone.unwrap_or_default(),
            weight: new_user.weight,
            height: new_user.height,
            age: new_user.age,
            gender: new_user.gender.unwrap_or_default(),
            created_at: Utc::now(),
        };
        self.storage.create_user(&user).await?;

        let info = UserInfo {
            name: user.display_name(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            weight: user.weight,
            height: user.height,
            age: user.age,
            gender: user.gender,
            ..UserInfo::default()
        };
        self.storage.save_user_info(&info).await?;

        let public = PublicUser::from(&user);
        self.storage.set_current_user(&public).await?;
        info!(user_id = %user.id, "account created");
        Ok(public)
    }

    /// Authenticate and open a session
    ///
    /// With `remember_me` the email is stored for prefilling the next login
    /// form; without it any remembered email is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ErrorCode::AuthInvalid`] with a uniform
    /// message for an unknown email or a wrong password.
    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
        remember_me: bool,
    ) -> AppResult<PublicUser> {
        let email = email.trim().to_lowercase();
        let user = self
            .storage
            .get_user_by_email(&email)
            .await?
            .ok_or_else(|| AppError::auth_invalid(INVALID_CREDENTIALS))?;

        let verified = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| AppError::internal(format!("password verification failed: {e}")))?;
        if !verified {
            return Err(AppError::auth_invalid(INVALID_CREDENTIALS));
        }

        let public = PublicUser::from(&user);
        self.storage.set_current_user(&public).await?;
        if remember_me {
            self.storage.set_last_email(Some(&email)).await?;
        } else {
            self.storage.set_last_email(None).await?;
        }
        info!(user_id = %user.id, "signed in");
        Ok(public)
    }

    /// Close the session, keeping any remembered email
    pub async fn sign_out(&self) -> AppResult<()> {
        self.storage.clear_current_user().await?;
        Ok(())
    }

    /// The logged-in user, if a session is open
    pub async fn current_user(&self) -> AppResult<Option<PublicUser>> {
        Ok(self.storage.current_user().await?)
    }

    /// Email remembered from the last "remember me" sign-in
    pub async fn last_email(&self) -> AppResult<Option<String>> {
        Ok(self.storage.last_email().await?)
    }
}
