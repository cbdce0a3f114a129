use crate::core::boards::BoardCatalog;
use crate::core::companies::company_directory;
use crate::core::estimate::estimate;
use crate::domain::model::{BoardListing, DashboardView, SearchInput, SummaryStats};
use crate::utils::error::{HubError, Result};
use crate::utils::validation::validate_url;
use chrono::Utc;

/// How many boards the "open top boards" action covers.
pub const DEFAULT_TOP_BOARDS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardOptions {
    pub top_boards: usize,
    pub include_companies: bool,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            top_boards: DEFAULT_TOP_BOARDS,
            include_companies: true,
        }
    }
}

/// Recomputes every card, link and statistic for one search.
pub fn build_dashboard(
    search: &SearchInput,
    catalog: &BoardCatalog,
    options: &DashboardOptions,
) -> Result<DashboardView> {
    let query = search.query();
    let location = search.location();

    let mut boards = Vec::new();
    for entry in catalog.enabled() {
        let board = entry.board;
        let url = board.build_url(query, location);
        validate_url(board.name(), &url).map_err(|e| HubError::InvalidUrlError {
            board: board.name().to_string(),
            reason: e.to_string(),
        })?;

        let profile = entry.profile();
        let estimated_jobs = estimate(profile.baseline, query, location, &profile.identifier);
        tracing::debug!("{}: ~{} jobs ({})", board, estimated_jobs, url);

        boards.push(BoardListing {
            name: board.name().to_string(),
            icon: board.icon().to_string(),
            description: board.description().to_string(),
            highlight: board.highlight().to_string(),
            url,
            estimated_jobs,
        });
    }

    let estimates: Vec<u64> = boards.iter().map(|b| b.estimated_jobs).collect();
    let stats = SummaryStats::from_estimates(&estimates, query);

    let top_boards = boards
        .iter()
        .take(options.top_boards)
        .map(|b| b.url.clone())
        .collect();

    let companies = if options.include_companies {
        company_directory()
    } else {
        Vec::new()
    };

    tracing::info!(
        "Built dashboard for '{}' with {} boards, ~{} jobs",
        search.summary_line(),
        boards.len(),
        stats.total_jobs
    );

    Ok(DashboardView {
        search: search.clone(),
        generated_at: Utc::now(),
        stats,
        boards,
        top_boards,
        companies,
    })
}
