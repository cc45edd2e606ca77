//! World records.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Data returned by the world endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorldData {
    pub nation_count: Option<u64>,
    pub region_count: Option<u64>,
    /// Name of the census of the day.
    pub census_name: Option<String>,
    pub census_id: Option<u32>,
    pub census_size: Option<u64>,
    pub census_scale: Option<String>,
    pub census_median: Option<f64>,
    pub featured_region: Option<String>,
    pub happenings: Option<Vec<WorldHappening>>,
    pub new_nations: Option<Vec<String>>,
    /// Regions matching the regions-by-tag search.
    pub regions_by_tag: Option<Vec<String>>,
}

/// A world happening, carrying the event ID used for paging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorldHappening {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    pub text: String,
}
