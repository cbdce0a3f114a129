use crate::utils::text::trim_search;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_QUERY: &str = "Software Engineer";
pub const DEFAULT_LOCATION: &str = "Copenhagen, Denmark";

/// Keywords and location as they are fed into the estimator and URL builders.
///
/// Both fields are trimmed; blank input falls back to [`DEFAULT_QUERY`] and
/// [`DEFAULT_LOCATION`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchInput {
    query: String,
    location: String,
}

impl SearchInput {
    pub fn new(raw_query: &str, raw_location: &str) -> Self {
        Self {
            query: trim_or_default(raw_query, DEFAULT_QUERY),
            location: trim_or_default(raw_location, DEFAULT_LOCATION),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// `"{query} | {location}"`, the one-line form of the current search.
    pub fn summary_line(&self) -> String {
        format!("{} | {}", self.query, self.location)
    }
}

impl Default for SearchInput {
    fn default() -> Self {
        Self::new("", "")
    }
}

fn trim_or_default(raw: &str, default: &str) -> String {
    let trimmed = trim_search(raw);
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardProfile {
    pub identifier: String,
    pub baseline: u32,
}

/// One rendered job board card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardListing {
    pub name: String,
    pub icon: String,
    pub description: String,
    pub highlight: String,
    pub url: String,
    pub estimated_jobs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryStats {
    pub total_jobs: u64,
    pub new_listings: u64,
    pub hybrid_roles: u64,
    pub remote_friendly: u64,
}

/// Per-board settings layered over the built-in catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardOverride {
    pub baseline: Option<u32>,
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
    pub name: String,
    pub url: String,
    pub icon: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub search: SearchInput,
    pub generated_at: DateTime<Utc>,
    pub stats: SummaryStats,
    pub boards: Vec<BoardListing>,
    pub top_boards: Vec<String>,
    pub companies: Vec<Company>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
    Tsv,
    Urls,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 5] = ["text", "json", "csv", "tsv", "urls"];

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Urls => "txt",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = crate::utils::error::HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            "urls" => Ok(OutputFormat::Urls),
            _ => Err(crate::utils::error::HubError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: s.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}
