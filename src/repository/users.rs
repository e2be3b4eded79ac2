//! Users repository for database operations

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::user::{User, UserProfile, UserRole},
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

/// Validated registration payload, password already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub role: UserRole,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get account by email within a role scope (login lookup).
    ///
    /// Email is not unique across roles; the same address may exist once as
    /// a user and once as an owner. Takes the first match in storage order.
    pub async fn get_by_email_and_role(
        &self,
        email: &str,
        role: UserRole,
    ) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE email = $1 AND role = $2 LIMIT 1",
        )
        .bind(email)
        .bind(role)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Profile fields for the account page
    pub async fn get_profile(&self, user_id: i32) -> AppResult<UserProfile> {
        sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT id, username, first_name, last_name, email, phone_number
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Update profile fields; errors if no row was touched
    pub async fn update_profile(
        &self,
        user_id: i32,
        username: &str,
        first_name: &str,
        last_name: &str,
        email: &str,
        phone_number: &str,
    ) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET username = $1, first_name = $2, last_name = $3, email = $4, phone_number = $5
            WHERE id = $6
            "#,
        )
        .bind(username)
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(phone_number)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }

    /// Create a new account
    pub async fn create(&self, user: &NewUser) -> AppResult<i32> {
        let user_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO users (username, email, password, phone_number, first_name, last_name, date_of_birth, role)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.phone_number)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.date_of_birth)
        .bind(user.role)
        .fetch_one(&self.pool)
        .await?;

        Ok(user_id)
    }
}
