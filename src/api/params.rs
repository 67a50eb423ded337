//! Query-string parsing for the API
//!
//! Raw parameters arrive as optional strings; blank values count as unset,
//! matching the listing page's "any" options.

use serde::Deserialize;

use crate::catalog::{PriceRange, VehicleFilter};
use crate::models::{DateRange, parse_iso_date};
use crate::{Result, VanScoutError};

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `GET /vans` parameters
#[derive(Debug, Default, Deserialize)]
pub struct VanListParams {
    pub q: Option<String>,
    pub location: Option<String>,
    /// `min-max`
    pub price: Option<String>,
    pub sleeps: Option<String>,
}

impl VanListParams {
    pub fn into_filter(self) -> Result<VehicleFilter> {
        let price = non_blank(self.price)
            .map(|p| PriceRange::parse(&p))
            .transpose()?;
        let min_sleeps = non_blank(self.sleeps)
            .map(|s| {
                s.parse::<u32>().map_err(|_| {
                    VanScoutError::validation(format!("sleeps must be a whole number, got '{s}'"))
                })
            })
            .transpose()?;

        Ok(VehicleFilter {
            search: non_blank(self.q),
            location: non_blank(self.location),
            price,
            min_sleeps,
        })
    }
}

/// `GET /vans/popular` parameters
#[derive(Debug, Default, Deserialize)]
pub struct PopularParams {
    pub limit: Option<String>,
}

impl PopularParams {
    /// Requested list length, `default` when absent or blank
    pub fn limit_or(self, default: usize) -> Result<usize> {
        match non_blank(self.limit) {
            None => Ok(default),
            Some(limit) => limit.parse::<usize>().map_err(|_| {
                VanScoutError::validation(format!("limit must be a whole number, got '{limit}'"))
            }),
        }
    }
}

/// `GET /search` parameters
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// A validated availability search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub location: String,
    pub range: DateRange,
}

impl SearchParams {
    /// All three parameters are required and the range must be ordered
    pub fn into_request(self) -> Result<SearchRequest> {
        let location = non_blank(self.location)
            .ok_or_else(|| VanScoutError::validation("location is required"))?;
        let start = non_blank(self.start_date)
            .ok_or_else(|| VanScoutError::validation("startDate is required"))?;
        let end = non_blank(self.end_date)
            .ok_or_else(|| VanScoutError::validation("endDate is required"))?;

        let range = DateRange::new(parse_iso_date(&start)?, parse_iso_date(&end)?)?;
        Ok(SearchRequest { location, range })
    }
}
