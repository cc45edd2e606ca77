//! Nation records.

use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

use crate::data::Happening;

/// Data returned by the nation endpoint, or one nation of the nations dump.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NationData {
    pub name: Option<String>,
    pub full_name: Option<String>,
    /// Pretitle of the nation, e.g. "Republic".
    pub kind: Option<String>,
    pub motto: Option<String>,
    pub category: Option<String>,
    /// World Assembly status: "Non-member", "WA Member" or "WA Delegate".
    pub world_assembly_status: Option<String>,
    pub endorsements: Option<Vec<String>>,
    pub general_assembly_vote: Option<String>,
    pub security_council_vote: Option<String>,
    pub freedom: Option<FreedomDescriptions>,
    pub region: Option<String>,
    /// Population, in millions.
    pub population: Option<u64>,
    pub tax: Option<f64>,
    pub animal: Option<String>,
    pub animal_trait: Option<String>,
    pub currency: Option<String>,
    pub flag: Option<Url>,
    pub major_industry: Option<String>,
    pub crime: Option<String>,
    pub sensibilities: Option<String>,
    pub government_priority: Option<String>,
    pub government_budget: Option<GovernmentBudget>,
    pub government_description: Option<String>,
    pub industry_description: Option<String>,
    pub notable: Option<String>,
    pub admirable: Option<String>,
    /// Relative founding date as rendered by the game, e.g. "7 years ago".
    pub founded: Option<String>,
    pub first_login: Option<DateTime<Utc>>,
    pub last_login: Option<DateTime<Utc>>,
    /// Relative activity date as rendered by the game.
    pub last_activity: Option<String>,
    pub influence: Option<String>,
    pub freedom_scores: Option<FreedomScores>,
    pub public_sector: Option<f64>,
    pub causes_of_death: Option<Vec<CauseOfDeath>>,
    pub leader: Option<String>,
    pub capital: Option<String>,
    pub religion: Option<String>,
    pub regional_census_rank: Option<u32>,
    pub world_census_rank: Option<u32>,
    pub census_scores: Option<Vec<CensusScore>>,
    pub legislation: Option<Vec<String>>,
    pub happenings: Option<Vec<Happening>>,
    pub demonym_adjective: Option<String>,
    pub demonym_noun: Option<String>,
    pub demonym_noun_plural: Option<String>,
    pub factbook_count: Option<u32>,
    pub factbooks: Option<Vec<DispatchMetadata>>,
    pub dispatch_count: Option<u32>,
    pub dispatches: Option<Vec<DispatchMetadata>>,
}

/// Textual ratings of the three freedoms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FreedomDescriptions {
    pub civil_rights: String,
    pub economy: String,
    pub political_freedom: String,
}

/// Numeric ratings of the three freedoms, from 0 to 100.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FreedomScores {
    pub civil_rights: u32,
    pub economy: u32,
    pub political_freedom: u32,
}

/// Share of the government budget spent on each area, in percent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GovernmentBudget {
    pub environment: f64,
    pub social_equality: f64,
    pub education: f64,
    pub law_and_order: f64,
    pub administration: f64,
    pub welfare: f64,
    pub spirituality: f64,
    pub defence: f64,
    pub public_transport: f64,
    pub healthcare: f64,
    pub commerce: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CauseOfDeath {
    pub cause: String,
    /// Share of deaths, in percent.
    pub percentage: f64,
}

/// Score of the nation for one census statistic.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CensusScore {
    pub id: u32,
    pub score: f64,
}

/// Listing entry of a factbook or dispatch written by the nation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DispatchMetadata {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub category: String,
    pub subcategory: String,
    pub created: DateTime<Utc>,
    pub edited: DateTime<Utc>,
    pub views: u64,
    pub score: i64,
}
