//! Bookings repository for database operations

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::booking::{BookedRange, NewBooking, OverlapPolicy, UserBooking},
};

/// Name of the exclusion constraint backing the non-overlap invariant,
/// see migrations/0001_initial_schema.sql
const NO_OVERLAP_CONSTRAINT: &str = "bookings_no_overlap";

pub const DATES_ALREADY_BOOKED: &str = "Selected dates are already booked";

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Admission check and insert for a requested stay.
    ///
    /// The read and the write run inside one transaction with the spot's
    /// non-cancelled bookings row-locked, so two concurrent requests for
    /// overlapping dates cannot both pass the check. The exclusion
    /// constraint on the table is the backstop: if it fires anyway (for
    /// instance a containment case the legacy policy does not test), the
    /// violation is reported as the same conflict, not a storage error.
    pub async fn create(&self, booking: &NewBooking, policy: OverlapPolicy) -> AppResult<i32> {
        let mut tx = self.pool.begin().await?;

        let existing: Vec<(Option<NaiveDate>, Option<NaiveDate>)> = sqlx::query_as(
            r#"
            SELECT start_date, end_date FROM bookings
            WHERE camping_spot_id = $1 AND status != 'cancelled'
            FOR UPDATE
            "#,
        )
        .bind(booking.camping_spot_id)
        .fetch_all(&mut *tx)
        .await?;

        for (start, end) in existing {
            let (Some(start), Some(end)) = (start, end) else {
                continue;
            };
            if policy.conflicts(start, end, booking.start_date, booking.end_date) {
                return Err(AppError::Conflict(DATES_ALREADY_BOOKED.to_string()));
            }
        }

        let booking_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO bookings (user_id, camping_spot_id, start_date, end_date, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(booking.user_id)
        .bind(booking.camping_spot_id)
        .bind(booking.start_date)
        .bind(booking.end_date)
        .bind(booking.status)
        .fetch_one(&mut *tx)
        .await
        .map_err(constraint_to_conflict)?;

        tx.commit().await?;

        Ok(booking_id)
    }

    /// Booked date ranges for a spot, rows with a null endpoint dropped,
    /// in storage order
    pub async fn booked_ranges(&self, spot_id: i32) -> AppResult<Vec<BookedRange>> {
        let ranges = sqlx::query_as::<_, BookedRange>(
            r#"
            SELECT start_date AS start, end_date AS "end" FROM bookings
            WHERE camping_spot_id = $1
              AND start_date IS NOT NULL AND end_date IS NOT NULL
            "#,
        )
        .bind(spot_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ranges)
    }

    /// Bookings for a user joined with spot name and location, most recent
    /// stay first
    pub async fn get_user_bookings(&self, user_id: i32) -> AppResult<Vec<UserBooking>> {
        let bookings = sqlx::query_as::<_, UserBooking>(
            r#"
            SELECT b.id, s.name AS spot_name, s.location,
                   b.start_date, b.end_date, b.status
            FROM bookings b
            INNER JOIN campingspots s ON b.camping_spot_id = s.id
            WHERE b.user_id = $1
            ORDER BY b.start_date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }
}

/// Map a violation of the non-overlap exclusion constraint to the booking
/// conflict error; anything else stays a database error
fn constraint_to_conflict(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db) = e {
        if db.constraint() == Some(NO_OVERLAP_CONSTRAINT) {
            return AppError::Conflict(DATES_ALREADY_BOOKED.to_string());
        }
    }
    AppError::Database(e)
}
