//! `VanScout` - campervan rental catalog
//!
//! This library holds the vehicle and location catalog, the date-range
//! availability queries over it, and a month-grid range-select calendar.
//! The JSON API and the CLI are thin layers over these.

pub mod api;
pub mod calendar;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;
pub mod web;

// Re-export core types for public API
pub use calendar::{MonthGrid, RangeCalendar, Selection};
pub use catalog::{Catalog, CatalogStats, PriceRange, VehicleFilter};
pub use config::VanScoutConfig;
pub use error::VanScoutError;
pub use models::{AvailabilityWindow, DateRange, Location, Vehicle};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, VanScoutError>;
