//! Data models for VanScout
//!
//! This module contains the core domain models organized by concern:
//! - Vehicle: catalog entries and their availability windows
//! - Location: pickup cities
//! - DateRange: calendar-day ranges and ISO date parsing

pub mod date_range;
pub mod location;
pub mod vehicle;

// Re-export all public types for convenient access
pub use date_range::{DateRange, ISO_DATE_FORMAT, parse_iso_date, stay_duration_days};
pub use location::Location;
pub use vehicle::{AvailabilityWindow, Owner, Specifications, Vehicle};
