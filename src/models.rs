use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a record came from. Set once when the record is materialized:
/// fixtures are built `Demo`, store results default to `Live`. Mutation
/// routing branches on this tag, never on id conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Origin {
    #[default]
    Live,
    Demo,
}

impl Origin {
    pub fn is_demo(self) -> bool {
        matches!(self, Origin::Demo)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub vendor_id: String,
    pub title: String,
    pub description: String,
    pub work_type: String,
    pub required_skills: Vec<String>,
    pub pay_min: i64,
    pub pay_max: i64,
    pub location: String,
    pub hours: u32,
    pub status: String, // "open", "closed", "completed"
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip, default)]
    pub origin: Origin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: String,
    pub job_id: String,
    pub worker_id: String,
    pub status: String, // "pending", "accepted", "rejected"
    pub applied_at: DateTime<Utc>,
    pub accepted_at: Option<DateTime<Utc>>,
    #[serde(skip, default)]
    pub origin: Origin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequest {
    pub id: String,
    pub worker_id: String,
    pub title: String,
    pub description: String,
    pub hours: u32,
    pub min_pay: i64,
    pub max_pay: i64,
    pub skills: Vec<String>,
    pub location: String,
    pub urgency: String, // "low", "medium", "high"
    pub status: String,  // "pending", "accepted", "rejected"
    pub accepted_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub accepted_at: Option<DateTime<Utc>>,
    #[serde(skip, default)]
    pub origin: Origin,
}

// --- Suggestion results ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobTitleSuggestion {
    pub title: String,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillSuggestion {
    pub skill: String,
    pub category: String,
    /// Derived relevance for the query that produced this suggestion.
    pub relevance: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationSuggestion {
    pub place_id: String,
    pub description: String,
    pub formatted_address: String,
    pub types: Vec<String>,
    pub geometry: Option<LatLng>,
}
