//! Camping spots repository for database operations

use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::spot::{CampingSpot, SpotWithOwner},
};

#[derive(Clone)]
pub struct SpotsRepository {
    pool: Pool<Postgres>,
}

/// Validated spot creation payload
#[derive(Debug, Clone)]
pub struct NewSpot {
    pub owner_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub location: String,
    pub price_per_night: Decimal,
    pub facilities: Option<String>,
    pub spot_type: String,
    pub province: String,
}

impl SpotsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// All spots, each joined with its owner's name and email
    pub async fn get_all(&self) -> AppResult<Vec<SpotWithOwner>> {
        let spots = sqlx::query_as::<_, SpotWithOwner>(
            r#"
            SELECT s.*, u.first_name AS owner_name, u.email AS owner_email
            FROM campingspots s
            LEFT JOIN users u ON s.owner_id = u.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(spots)
    }

    /// Get spot by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<SpotWithOwner> {
        sqlx::query_as::<_, SpotWithOwner>(
            r#"
            SELECT s.*, u.first_name AS owner_name, u.email AS owner_email
            FROM campingspots s
            LEFT JOIN users u ON s.owner_id = u.id
            WHERE s.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Camping spot not found".to_string()))
    }

    /// Spots listed by an owner
    pub async fn get_by_owner(&self, owner_id: i32) -> AppResult<Vec<CampingSpot>> {
        let spots = sqlx::query_as::<_, CampingSpot>(
            "SELECT * FROM campingspots WHERE owner_id = $1",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(spots)
    }

    /// Create a new camping spot
    pub async fn create(&self, spot: &NewSpot) -> AppResult<i32> {
        let spot_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO campingspots (owner_id, name, description, location, price_per_night, facilities, type, province)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(spot.owner_id)
        .bind(&spot.name)
        .bind(&spot.description)
        .bind(&spot.location)
        .bind(spot.price_per_night)
        .bind(&spot.facilities)
        .bind(&spot.spot_type)
        .bind(&spot.province)
        .fetch_one(&self.pool)
        .await?;

        Ok(spot_id)
    }
}
