use crate::core::estimate::keyword_token_count;
use crate::domain::model::SummaryStats;

const MIN_NEW_LISTINGS: u64 = 12;
const MIN_HYBRID_ROLES: u64 = 8;
const MIN_REMOTE_FRIENDLY: u64 = 10;

impl SummaryStats {
    /// Headline numbers derived from the per-board estimates and the query.
    pub fn from_estimates(estimates: &[u64], query: &str) -> Self {
        let total_jobs: u64 = estimates.iter().sum();
        let keywords = keyword_token_count(query) as f64;
        let total = total_jobs as f64;

        let new_listings = round_count(total * 0.04 + keywords * 5.0).max(MIN_NEW_LISTINGS);
        let hybrid_roles = round_count(total * 0.03 + keywords * 4.0).max(MIN_HYBRID_ROLES);
        let remote_friendly = round_count(total * 0.05).max(MIN_REMOTE_FRIENDLY);

        Self {
            total_jobs,
            new_listings,
            hybrid_roles,
            remote_friendly,
        }
    }
}

fn round_count(value: f64) -> u64 {
    value.round() as u64
}
