//! Command-line interface
//!
//! Every subcommand except `serve` renders plain text from the catalog and
//! returns it, so the output can be tested without a terminal.

use std::fmt::Write as _;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::api::{SearchParams, SearchRequest, VanListParams};
use crate::calendar::RangeCalendar;
use crate::catalog::{Catalog, estimate_stay_cost};
use crate::config::VanScoutConfig;
use crate::models::{Vehicle, parse_iso_date};
use crate::{Result, VanScoutError};

#[derive(Parser, Debug)]
#[command(
    name = "vanscout",
    version,
    about = "Van rental catalog: availability search, listings and a range-select calendar"
)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Debug logging for vanscout
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the JSON API server
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
    /// Vans available at a location for a date range
    Search {
        #[arg(long)]
        location: String,
        /// First day, YYYY-MM-DD
        #[arg(long)]
        start: String,
        /// Last day, YYYY-MM-DD
        #[arg(long)]
        end: String,
    },
    /// List vans, optionally filtered
    Vans {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        location: Option<String>,
        /// Daily price range, `min-max`
        #[arg(long)]
        price: Option<String>,
        /// Minimum sleeping capacity
        #[arg(long)]
        sleeps: Option<String>,
    },
    /// Best-rated vans
    Popular {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Pickup locations
    Locations {
        #[arg(long)]
        search: Option<String>,
    },
    /// Catalog totals
    Stats,
    /// Print a month grid
    Calendar {
        /// Month to show, YYYY-MM (defaults to the current month)
        #[arg(long)]
        month: Option<String>,
        /// Day to mark as selection start, YYYY-MM-DD
        #[arg(long)]
        from: Option<String>,
        /// Day to mark as selection end, YYYY-MM-DD
        #[arg(long, requires = "from")]
        to: Option<String>,
    },
}

/// Run an offline subcommand and return its output
pub fn execute(
    command: Commands,
    catalog: &Catalog,
    config: &VanScoutConfig,
    today: NaiveDate,
) -> Result<String> {
    match command {
        Commands::Serve { .. } => Err(VanScoutError::general(
            "serve runs the web server and produces no text output",
        )),
        Commands::Search {
            location,
            start,
            end,
        } => {
            let request = SearchParams {
                location: Some(location),
                start_date: Some(start),
                end_date: Some(end),
            }
            .into_request()?;
            Ok(render_search(catalog, config, &request))
        }
        Commands::Vans {
            search,
            location,
            price,
            sleeps,
        } => {
            let filter = VanListParams {
                q: search,
                location,
                price,
                sleeps,
            }
            .into_filter()?;
            let vans = catalog.filter(&filter);
            let mut out = format!("{} van(s) found\n", vans.len());
            for van in vans {
                out.push_str(&vehicle_line(van));
            }
            Ok(out)
        }
        Commands::Popular { limit } => {
            let limit = limit.unwrap_or(config.defaults.popular_limit as usize);
            Ok(catalog.top_rated(limit).into_iter().map(vehicle_line).collect())
        }
        Commands::Locations { search } => {
            let mut out = String::new();
            for location in catalog.search_locations(search.as_deref().unwrap_or("")) {
                let _ = writeln!(
                    out,
                    "{:<10} {:<10} {:<28} {:>3} vans  ★{:.1}",
                    location.id, location.name, location.region, location.van_count, location.rating
                );
            }
            if out.is_empty() {
                out.push_str("No location found\n");
            }
            Ok(out)
        }
        Commands::Stats => {
            let stats = catalog.stats();
            Ok(format!(
                "{} vans, average rating {:.1}, {} reviews\n",
                stats.vehicle_count, stats.average_rating, stats.total_reviews
            ))
        }
        Commands::Calendar { month, from, to } => {
            let from = from.as_deref().map(parse_iso_date).transpose()?;
            let to = to.as_deref().map(parse_iso_date).transpose()?;
            let reference = match month {
                Some(month) => parse_iso_date(&format!("{}-01", month.trim()))?,
                None => from.unwrap_or(today),
            };

            let mut calendar = RangeCalendar::starting_at(reference, today);
            let mut out = String::new();
            for day in from.into_iter().chain(to) {
                if let Some(range) = calendar.click(day) {
                    let _ = writeln!(
                        out,
                        "Selected {} -> {} ({} day(s))",
                        range.start,
                        range.end,
                        range.duration_days()
                    );
                }
            }
            Ok(format!("{}{out}", calendar.render()))
        }
    }
}

fn render_search(catalog: &Catalog, config: &VanScoutConfig, request: &SearchRequest) -> String {
    let SearchRequest { location, range } = request;
    let days = range.duration_days();
    let name = catalog
        .location_by_id(location)
        .map_or(location.as_str(), |l| l.name.as_str());
    let vans = catalog.available_vehicles(range.start, range.end, location);

    let mut out = format!(
        "{name}: {} -> {} ({days} day(s), ~{}€ at {}€/day)\n",
        range.start,
        range.end,
        estimate_stay_cost(days, config.defaults.estimated_daily_rate),
        config.defaults.estimated_daily_rate
    );
    if vans.is_empty() {
        let _ = writeln!(out, "No van available in {name} for these dates");
        return out;
    }
    for van in vans {
        let _ = writeln!(
            out,
            "{}  total {}€",
            vehicle_line(van).trim_end(),
            van.stay_price(days)
        );
    }
    out
}

fn vehicle_line(van: &Vehicle) -> String {
    format!(
        "{:<6} {:<28} {:<10} {:>4}€/day  sleeps {}  ★{:.1} ({})\n",
        van.id, van.title, van.location, van.price_per_day, van.sleeps, van.rating, van.review_count
    )
}
