//! The job boards the dashboard links into, and how each one spells a search URL.

use crate::domain::model::{BoardOverride, BoardProfile};
use crate::utils::error::{HubError, Result};
use crate::utils::text::trim_search;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use url::form_urlencoded;

/// URI component encoding: everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("static regex is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Board {
    LinkedIn,
    Jobindex,
    TheHub,
    Glassdoor,
    Indeed,
    EnglishJobs,
}

impl Board {
    /// Display order.
    pub const ALL: [Board; 6] = [
        Board::LinkedIn,
        Board::Jobindex,
        Board::TheHub,
        Board::Glassdoor,
        Board::Indeed,
        Board::EnglishJobs,
    ];

    /// Also the identifier fed into the estimate hash.
    pub fn name(&self) -> &'static str {
        match self {
            Board::LinkedIn => "LinkedIn",
            Board::Jobindex => "Jobindex.dk",
            Board::TheHub => "The Hub",
            Board::Glassdoor => "Glassdoor",
            Board::Indeed => "Indeed",
            Board::EnglishJobs => "EnglishJobs.dk",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Board::LinkedIn => "💼",
            Board::Jobindex => "🇩🇰",
            Board::TheHub => "🎯",
            Board::Glassdoor => "🏢",
            Board::Indeed => "🌐",
            Board::EnglishJobs => "🗣️",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Board::LinkedIn => "Global professional network with daily updates",
            Board::Jobindex => "Comprehensive Scandinavian job board",
            Board::TheHub => "Tech & startup jobs across the Nordics",
            Board::Glassdoor => "Includes company reviews & salary data",
            Board::Indeed => "Global job search engine",
            Board::EnglishJobs => "English-speaking opportunities across Europe",
        }
    }

    pub fn highlight(&self) -> &'static str {
        match self {
            Board::LinkedIn => "Most active",
            Board::Jobindex => "Local favorite",
            Board::TheHub => "Tech focused",
            Board::Glassdoor => "Salary data",
            Board::Indeed => "International",
            Board::EnglishJobs => "English OK",
        }
    }

    pub fn default_baseline(&self) -> u32 {
        match self {
            Board::LinkedIn => 104,
            Board::Jobindex => 89,
            Board::TheHub => 67,
            Board::Glassdoor => 103,
            Board::Indeed => 156,
            Board::EnglishJobs => 45,
        }
    }

    /// Absolute search URL for this board. `query` and `location` are used as
    /// given; some boards swap well-known locations for their own region codes.
    pub fn build_url(&self, query: &str, location: &str) -> String {
        let normalized = normalize_location(location);
        match self {
            Board::LinkedIn => format!(
                "https://www.linkedin.com/jobs/search/?keywords={}&location={}&f_TPR=r86400",
                encode_component(query),
                encode_component(location)
            ),
            Board::Jobindex => {
                let region = lookup(JOBINDEX_REGIONS, &normalized).unwrap_or("danmark");
                format!(
                    "https://www.jobindex.dk/jobsoegning/{}?{}",
                    region,
                    form_query(&[("q", query)])
                )
            }
            Board::TheHub => format!(
                "https://thehub.io/jobs?search={}&location={}&countryCode=DK&sorting=mostPopular",
                encode_component(query),
                encode_component(location)
            ),
            Board::Glassdoor => match lookup(GLASSDOOR_LOCATIONS, &normalized) {
                Some(place) => glassdoor_seo_url(place, query),
                None => format!(
                    "https://www.glassdoor.com/Job/jobs.htm?{}",
                    form_query(&[("sc.keyword", query), ("locT", "C"), ("locKeyword", location)])
                ),
            },
            Board::Indeed => {
                let mut params = vec![("q", query), ("l", location)];
                if let Some(place) = lookup(INDEED_LOCATIONS, &normalized) {
                    if let Some(q) = place.q {
                        params[0].1 = q;
                    }
                    if let Some(l) = place.l {
                        params[1].1 = l;
                    }
                    params.extend_from_slice(place.extra);
                }
                format!("https://dk.indeed.com/jobs?{}", form_query(&params))
            }
            Board::EnglishJobs => {
                let region = if normalized.contains("denmark") || normalized.contains("copenhagen") {
                    "hovedstaden"
                } else {
                    "europe"
                };
                format!(
                    "https://englishjobs.dk/in/{}?{}",
                    region,
                    form_query(&[("q", query)])
                )
            }
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Board {
    type Err = HubError;

    /// Case-insensitive, ignores punctuation and spaces: `"the-hub"`, `"The Hub"`
    /// and `"thehub"` all resolve.
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "linkedin" => Ok(Board::LinkedIn),
            "jobindex" | "jobindexdk" => Ok(Board::Jobindex),
            "thehub" | "hub" => Ok(Board::TheHub),
            "glassdoor" => Ok(Board::Glassdoor),
            "indeed" => Ok(Board::Indeed),
            "englishjobs" | "englishjobsdk" => Ok(Board::EnglishJobs),
            _ => Err(HubError::UnknownBoardError {
                name: s.to_string(),
            }),
        }
    }
}

pub fn normalize_location(location: &str) -> String {
    trim_search(location).to_lowercase()
}

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

fn form_query(pairs: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

fn lookup<T: Copy>(table: &[(&str, T)], normalized: &str) -> Option<T> {
    table
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|(_, value)| *value)
}

// ---------------------------------------------------------------------------
// Location lookup tables, keyed by normalized location
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
struct GlassdoorLocation {
    loc_id: &'static str,
    slug: &'static str,
}

#[derive(Debug, Clone, Copy)]
struct IndeedLocation {
    q: Option<&'static str>,
    l: Option<&'static str>,
    extra: &'static [(&'static str, &'static str)],
}

const GLASSDOOR_LOCATIONS: &[(&str, GlassdoorLocation)] = &[(
    "copenhagen, denmark",
    GlassdoorLocation {
        loc_id: "IC2218704",
        slug: "copenhagen-capital-region-denmark",
    },
)];

const JOBINDEX_REGIONS: &[(&str, &str)] = &[("copenhagen, denmark", "storkoebenhavn")];

const INDEED_LOCATIONS: &[(&str, IndeedLocation)] = &[(
    "copenhagen, denmark",
    IndeedLocation {
        q: None,
        l: Some("København"),
        extra: &[
            ("from", "searchOnHP,whereautocomplete"),
            ("vjk", "2ff3e908bc9b5f9b"),
        ],
    },
)];

/// Glassdoor's SEO path: the `IL`/`KO` ranges are character offsets of the
/// location and keyword parts inside `{slug}-{keyword}`.
fn glassdoor_seo_url(place: GlassdoorLocation, query: &str) -> String {
    let lowered = trim_search(query).to_lowercase();
    let keyword = NON_SLUG_CHARS.replace_all(&lowered, "-");
    let keyword = match keyword.trim_matches('-') {
        "" => "jobs",
        slug => slug,
    };

    let slug_len = place.slug.len();
    let start = slug_len + 1;
    let end = start + keyword.len();
    let loc_suffix = place.loc_id.strip_prefix("IC").unwrap_or(place.loc_id);

    format!(
        "https://www.glassdoor.com/Job/{}-{}-jobs-SRCH_IL.0,{}_IC{}_KO{},{}.htm",
        place.slug, keyword, slug_len, loc_suffix, start, end
    )
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub board: Board,
    pub baseline: u32,
    pub enabled: bool,
}

impl CatalogEntry {
    /// The identifier and baseline the estimator sees for this board.
    pub fn profile(&self) -> BoardProfile {
        BoardProfile {
            identifier: self.board.name().to_string(),
            baseline: self.baseline,
        }
    }
}

/// The boards in display order, with baselines and on/off switches applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCatalog {
    entries: Vec<CatalogEntry>,
}

impl BoardCatalog {
    pub fn standard() -> Self {
        Self {
            entries: Board::ALL
                .iter()
                .map(|&board| CatalogEntry {
                    board,
                    baseline: board.default_baseline(),
                    enabled: true,
                })
                .collect(),
        }
    }

    /// Applies overrides keyed by board name (any spelling accepted by
    /// [`Board::from_str`](std::str::FromStr)). Unknown names are an error.
    pub fn with_overrides(overrides: &HashMap<String, BoardOverride>) -> Result<Self> {
        let mut catalog = Self::standard();
        for (name, board_override) in overrides {
            let board: Board = name.parse()?;
            let Some(entry) = catalog.entries.iter_mut().find(|e| e.board == board) else {
                continue;
            };
            if let Some(baseline) = board_override.baseline {
                tracing::debug!("Baseline for {} set to {}", board, baseline);
                entry.baseline = baseline;
            }
            if let Some(enabled) = board_override.enabled {
                entry.enabled = enabled;
            }
        }
        Ok(catalog)
    }

    pub fn enabled(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(|e| e.enabled)
    }

}

impl Default for BoardCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CPH: &str = "Copenhagen, Denmark";

    #[test]
    fn test_default_search_urls() {
        let q = "Software Engineer";
        assert_eq!(
            Board::LinkedIn.build_url(q, CPH),
            "https://www.linkedin.com/jobs/search/?keywords=Software%20Engineer&location=Copenhagen%2C%20Denmark&f_TPR=r86400"
        );
        assert_eq!(
            Board::Jobindex.build_url(q, CPH),
            "https://www.jobindex.dk/jobsoegning/storkoebenhavn?q=Software+Engineer"
        );
        assert_eq!(
            Board::TheHub.build_url(q, CPH),
            "https://thehub.io/jobs?search=Software%20Engineer&location=Copenhagen%2C%20Denmark&countryCode=DK&sorting=mostPopular"
        );
        assert_eq!(
            Board::Glassdoor.build_url(q, CPH),
            "https://www.glassdoor.com/Job/copenhagen-capital-region-denmark-software-engineer-jobs-SRCH_IL.0,33_IC2218704_KO34,51.htm"
        );
        assert_eq!(
            Board::Indeed.build_url(q, CPH),
            "https://dk.indeed.com/jobs?q=Software+Engineer&l=K%C3%B8benhavn&from=searchOnHP%2Cwhereautocomplete&vjk=2ff3e908bc9b5f9b"
        );
        assert_eq!(
            Board::EnglishJobs.build_url(q, CPH),
            "https://englishjobs.dk/in/hovedstaden?q=Software+Engineer"
        );
    }

    #[test]
    fn test_urls_without_location_overrides() {
        let q = "Rust Developer";
        assert_eq!(
            Board::Jobindex.build_url(q, "Remote"),
            "https://www.jobindex.dk/jobsoegning/danmark?q=Rust+Developer"
        );
        assert_eq!(
            Board::Glassdoor.build_url(q, "Remote"),
            "https://www.glassdoor.com/Job/jobs.htm?sc.keyword=Rust+Developer&locT=C&locKeyword=Remote"
        );
        assert_eq!(
            Board::Indeed.build_url(q, "Remote"),
            "https://dk.indeed.com/jobs?q=Rust+Developer&l=Remote"
        );
        assert_eq!(
            Board::EnglishJobs.build_url(q, "Remote"),
            "https://englishjobs.dk/in/europe?q=Rust+Developer"
        );
    }

    #[test]
    fn test_location_tables_use_normalized_key() {
        let q = "C++ & Go";
        let loc = "  COPENHAGEN, denmark ";
        assert_eq!(
            Board::Glassdoor.build_url(q, loc),
            "https://www.glassdoor.com/Job/copenhagen-capital-region-denmark-c-go-jobs-SRCH_IL.0,33_IC2218704_KO34,38.htm"
        );
        assert_eq!(
            Board::Jobindex.build_url(q, loc),
            "https://www.jobindex.dk/jobsoegning/storkoebenhavn?q=C%2B%2B+%26+Go"
        );
        // raw text still goes into boards without tables
        assert_eq!(
            Board::LinkedIn.build_url(q, loc),
            "https://www.linkedin.com/jobs/search/?keywords=C%2B%2B%20%26%20Go&location=%20%20COPENHAGEN%2C%20denmark%20&f_TPR=r86400"
        );
    }

    #[test]
    fn test_normalized_location_strips_byte_order_mark() {
        assert_eq!(normalize_location("\u{feff}Copenhagen, Denmark\u{3000}"), "copenhagen, denmark");
        assert_eq!(normalize_location("\u{85}Copenhagen, Denmark"), "\u{85}copenhagen, denmark");
        assert_eq!(
            Board::Jobindex.build_url("Engineer", "\u{feff}Copenhagen, Denmark"),
            "https://www.jobindex.dk/jobsoegning/storkoebenhavn?q=Engineer"
        );
    }

    #[test]
    fn test_component_vs_form_encoding() {
        assert_eq!(
            Board::LinkedIn.build_url("!!!", "Berlin, Germany"),
            "https://www.linkedin.com/jobs/search/?keywords=!!!&location=Berlin%2C%20Germany&f_TPR=r86400"
        );
        assert_eq!(
            Board::Indeed.build_url("!!!", "Berlin, Germany"),
            "https://dk.indeed.com/jobs?q=%21%21%21&l=Berlin%2C+Germany"
        );
    }

    #[test]
    fn test_glassdoor_empty_keyword_slug() {
        assert_eq!(
            Board::Glassdoor.build_url("!!!", CPH),
            "https://www.glassdoor.com/Job/copenhagen-capital-region-denmark-jobs-jobs-SRCH_IL.0,33_IC2218704_KO34,38.htm"
        );
    }

    #[test]
    fn test_board_name_parsing() {
        assert_eq!("linkedin".parse::<Board>().unwrap(), Board::LinkedIn);
        assert_eq!("The Hub".parse::<Board>().unwrap(), Board::TheHub);
        assert_eq!("the-hub".parse::<Board>().unwrap(), Board::TheHub);
        assert_eq!("Jobindex.dk".parse::<Board>().unwrap(), Board::Jobindex);
        assert_eq!("EnglishJobs".parse::<Board>().unwrap(), Board::EnglishJobs);
        assert!("monster".parse::<Board>().is_err());

        for board in Board::ALL {
            assert_eq!(board.name().parse::<Board>().unwrap(), board);
        }
    }

    #[test]
    fn test_catalog_overrides() {
        let mut overrides = HashMap::new();
        overrides.insert(
            "linkedin".to_string(),
            BoardOverride {
                baseline: Some(250),
                enabled: None,
            },
        );
        overrides.insert(
            "glassdoor".to_string(),
            BoardOverride {
                baseline: None,
                enabled: Some(false),
            },
        );

        let catalog = BoardCatalog::with_overrides(&overrides).unwrap();
        let profiles: Vec<BoardProfile> = catalog.enabled().map(CatalogEntry::profile).collect();
        assert_eq!(profiles.len(), 5);
        assert_eq!(profiles[0].identifier, "LinkedIn");
        assert_eq!(profiles[0].baseline, 250);
        assert!(profiles.iter().all(|p| p.identifier != "Glassdoor"));
    }

    #[test]
    fn test_entry_profile_carries_overridden_baseline() {
        let mut overrides = HashMap::new();
        overrides.insert(
            "the-hub".to_string(),
            BoardOverride {
                baseline: Some(0),
                enabled: None,
            },
        );
        let catalog = BoardCatalog::with_overrides(&overrides).unwrap();
        let entry = catalog.enabled().find(|e| e.board == Board::TheHub).unwrap();
        assert_eq!(
            entry.profile(),
            BoardProfile {
                identifier: "The Hub".to_string(),
                baseline: 0,
            }
        );
    }

    #[test]
    fn test_catalog_rejects_unknown_board() {
        let mut overrides = HashMap::new();
        overrides.insert("monster".to_string(), BoardOverride::default());
        let err = BoardCatalog::with_overrides(&overrides).unwrap_err();
        assert!(matches!(err, HubError::UnknownBoardError { .. }));
    }

    #[test]
    fn test_standard_catalog_baselines() {
        let baselines: Vec<u32> = BoardCatalog::standard()
            .enabled()
            .map(|entry| entry.profile().baseline)
            .collect();
        assert_eq!(baselines, vec![104, 89, 67, 103, 156, 45]);
    }
}
