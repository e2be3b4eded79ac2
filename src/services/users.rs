//! Account registration, login and profile service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{
        RegisterRequest, UpdateProfileRequest, UserProfile, UserRole, UserSummary,
    },
    repository::{users::NewUser, Repository},
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new account. `forced_role` pins the role for the owner
    /// endpoint; otherwise the caller-supplied role applies, defaulting to
    /// a plain user account.
    pub async fn register(
        &self,
        request: RegisterRequest,
        forced_role: Option<UserRole>,
    ) -> AppResult<i32> {
        request.validate()?;

        let (Some(username), Some(email), Some(password), Some(phone_number)) = (
            request.username,
            request.email,
            request.password,
            request.phone_number,
        ) else {
            return Err(AppError::Validation(
                "Please provide all required fields".to_string(),
            ));
        };
        let (Some(first_name), Some(last_name), Some(date_of_birth)) = (
            request.first_name,
            request.last_name,
            request.date_of_birth,
        ) else {
            return Err(AppError::Validation(
                "Please provide all required fields".to_string(),
            ));
        };

        let user = NewUser {
            username,
            email,
            password_hash: self.hash_password(&password)?,
            phone_number,
            first_name,
            last_name,
            date_of_birth,
            role: forced_role
                .or(request.role)
                .unwrap_or(UserRole::User),
        };

        self.repository.users.create(&user).await
    }

    /// Authenticate an account within a role scope; users and owners log in
    /// through separate endpoints against the same table
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> AppResult<UserSummary> {
        let user = self
            .repository
            .users
            .get_by_email_and_role(email, role)
            .await?
            .ok_or_else(|| match role {
                UserRole::User => AppError::NotFound("User not found".to_string()),
                UserRole::Owner => AppError::NotFound("Owner not found".to_string()),
            })?;

        if !self.verify_password(&user.password, password)? {
            return Err(AppError::Authentication(format!(
                "Invalid {} credentials",
                role.as_str()
            )));
        }

        Ok(UserSummary::from(&user))
    }

    /// Profile fields for the account page
    pub async fn get_profile(&self, user_id: i32) -> AppResult<UserProfile> {
        self.repository.users.get_profile(user_id).await
    }

    /// Update profile fields; all of them are required by the frontend form
    pub async fn update_profile(
        &self,
        user_id: i32,
        request: UpdateProfileRequest,
    ) -> AppResult<()> {
        request.validate()?;

        let (Some(username), Some(first_name), Some(last_name), Some(email), Some(phone_number)) = (
            request.username,
            request.first_name,
            request.last_name,
            request.email,
            request.phone_number,
        ) else {
            return Err(AppError::Validation(
                "Please provide all required fields".to_string(),
            ));
        };

        self.repository
            .users
            .update_profile(user_id, &username, &first_name, &last_name, &email, &phone_number)
            .await
    }

    /// Hash a password using Argon2
    fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }

    /// Verify a password against its stored digest
    fn verify_password(&self, hash: &str, password: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}
