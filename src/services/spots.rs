//! Camping spot listing service

use crate::{
    error::{AppError, AppResult},
    models::spot::{CampingSpot, CreateSpotRequest, SpotWithOwner},
    repository::{spots::NewSpot, Repository},
};

#[derive(Clone)]
pub struct SpotsService {
    repository: Repository,
}

impl SpotsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All spots with owner contact details
    pub async fn get_all(&self) -> AppResult<Vec<SpotWithOwner>> {
        self.repository.spots.get_all().await
    }

    /// Get spot by ID
    pub async fn get_by_id(&self, spot_id: i32) -> AppResult<SpotWithOwner> {
        self.repository.spots.get_by_id(spot_id).await
    }

    /// Spots listed by an owner
    pub async fn get_by_owner(&self, owner_id: i32) -> AppResult<Vec<CampingSpot>> {
        self.repository.spots.get_by_owner(owner_id).await
    }

    /// Create a new camping spot listing.
    ///
    /// Description and facilities are the only optional fields, matching the
    /// listing form.
    pub async fn create(&self, request: CreateSpotRequest) -> AppResult<i32> {
        let (Some(owner_id), Some(name), Some(location), Some(price_per_night)) = (
            request.owner_id,
            request.name,
            request.location,
            request.price_per_night,
        ) else {
            return Err(AppError::Validation("Missing required fields".to_string()));
        };
        let (Some(spot_type), Some(province)) = (request.spot_type, request.province) else {
            return Err(AppError::Validation("Missing required fields".to_string()));
        };

        let spot = NewSpot {
            owner_id,
            name,
            description: request.description,
            location,
            price_per_night,
            facilities: request.facilities,
            spot_type,
            province,
        };

        self.repository.spots.create(&spot).await
    }
}
