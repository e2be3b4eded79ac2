//! Business logic services

pub mod bookings;
pub mod spots;
pub mod users;

use sqlx::{Pool, Postgres};

use crate::{config::BookingsConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    repository: Repository,
    pub bookings: bookings::BookingsService,
    pub spots: spots::SpotsService,
    pub users: users::UsersService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, bookings_config: BookingsConfig) -> Self {
        Self {
            bookings: bookings::BookingsService::new(repository.clone(), bookings_config),
            spots: spots::SpotsService::new(repository.clone()),
            users: users::UsersService::new(repository.clone()),
            repository,
        }
    }

    /// Database pool, used by the readiness probe
    pub fn pool(&self) -> &Pool<Postgres> {
        &self.repository.pool
    }
}
