//! Van catalog
//!
//! This module owns the read-only vehicle and location lists and the pure
//! queries over them:
//! - Loading and validating the seed dataset (embedded or from a file)
//! - Availability, location, price, capacity and popularity queries
//! - The listing page's combined multi-field filter

pub mod filter;
pub mod query;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::models::{Location, Vehicle};
use crate::{Result, VanScoutError};

pub use filter::{PriceRange, VehicleFilter};
pub use query::{CatalogStats, DEFAULT_TOP_RATED_LIMIT, estimate_stay_cost};

/// Seed dataset shipped with the binary
const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Immutable vehicle and location lists.
///
/// Insertion order is significant: every query that does not sort
/// explicitly returns results in this order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    locations: Vec<Location>,
    vehicles: Vec<Vehicle>,
}

impl Catalog {
    /// Build a catalog, checking its invariants
    pub fn new(vehicles: Vec<Vehicle>, locations: Vec<Location>) -> Result<Self> {
        let catalog = Self {
            locations,
            vehicles,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load the dataset embedded at build time
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Parse a catalog from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)
            .map_err(|e| VanScoutError::catalog(format!("Invalid catalog JSON: {e}")))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file from disk
    #[instrument(level = "debug")]
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json).map_err(|e| match e {
            VanScoutError::Catalog { message } => {
                VanScoutError::catalog(format!("{}: {message}", path.display()))
            }
            other => other,
        })
    }

    /// Load from `path` when given, otherwise the embedded dataset
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let catalog = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::embedded()?,
        };
        info!(
            "Catalog loaded: {} vehicles, {} locations",
            catalog.vehicles.len(),
            catalog.locations.len()
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    fn validate(&self) -> Result<()> {
        let mut vehicle_ids = HashSet::new();
        for vehicle in &self.vehicles {
            if !vehicle_ids.insert(vehicle.id.as_str()) {
                return Err(VanScoutError::catalog(format!(
                    "duplicate vehicle id '{}'",
                    vehicle.id
                )));
            }
            if vehicle.price_per_day == 0 {
                return Err(VanScoutError::catalog(format!(
                    "vehicle '{}' has a zero daily price",
                    vehicle.id
                )));
            }
            if vehicle.sleeps == 0 {
                return Err(VanScoutError::catalog(format!(
                    "vehicle '{}' sleeps nobody",
                    vehicle.id
                )));
            }
            if !(0.0..=5.0).contains(&vehicle.rating) {
                return Err(VanScoutError::catalog(format!(
                    "vehicle '{}' has rating {} outside 0-5",
                    vehicle.id, vehicle.rating
                )));
            }
            if let Some(window) = vehicle.availability.iter().find(|w| !w.is_well_formed()) {
                return Err(VanScoutError::catalog(format!(
                    "vehicle '{}' has availability window {} > {}",
                    vehicle.id, window.start_date, window.end_date
                )));
            }
        }

        let mut location_ids = HashSet::new();
        for location in &self.locations {
            if !location_ids.insert(location.id.as_str()) {
                return Err(VanScoutError::catalog(format!(
                    "duplicate location id '{}'",
                    location.id
                )));
            }
        }

        if !self.locations.is_empty() {
            for vehicle in &self.vehicles {
                if !location_ids.contains(vehicle.location.as_str()) {
                    warn!(
                        "Vehicle '{}' references unknown location '{}'",
                        vehicle.id, vehicle.location
                    );
                }
            }
        }

        debug!("Catalog passed validation");
        Ok(())
    }
}
