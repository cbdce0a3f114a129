pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use self::args::CliConfig;

#[cfg(feature = "cli")]
mod args {
    use super::toml_config::HubConfig;
    use crate::core::boards::Board;
    use crate::utils::error::Result;
    use clap::Parser;

    #[derive(Debug, Clone, Default, Parser)]
    #[command(name = "job-search-hub")]
    #[command(about = "Build job board search links and estimated job counts for a search")]
    pub struct CliConfig {
        /// Keywords, e.g. "Senior Software Engineer"
        #[arg(short, long)]
        pub query: Option<String>,

        /// Location, e.g. "Copenhagen, Denmark" or "Remote"
        #[arg(short, long)]
        pub location: Option<String>,

        /// Path to TOML configuration file
        #[arg(short, long)]
        pub config: Option<String>,

        /// Output format: text, json, csv, tsv or urls
        #[arg(short, long)]
        pub format: Option<String>,

        /// Write the dashboard into this directory instead of stdout
        #[arg(long)]
        pub output_dir: Option<String>,

        /// Number of boards listed under "Open Top N Job Boards"
        #[arg(long)]
        pub top: Option<usize>,

        /// Only show these boards (repeatable)
        #[arg(short, long = "board")]
        pub boards: Vec<String>,

        /// Leave out the company career pages
        #[arg(long)]
        pub no_companies: bool,

        /// Emit logs as JSON
        #[arg(long)]
        pub log_json: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        /// Loads the TOML file (if any) and layers the command line on top.
        pub fn resolve(&self) -> Result<HubConfig> {
            let mut config = match &self.config {
                Some(path) => {
                    tracing::info!("📁 Loading configuration from: {}", path);
                    HubConfig::from_file(path)?
                }
                None => HubConfig::default(),
            };

            if let Some(query) = &self.query {
                config.search.query = Some(query.clone());
            }
            if let Some(location) = &self.location {
                config.search.location = Some(location.clone());
            }
            if let Some(format) = &self.format {
                config.output.format = Some(format.clone());
            }
            if let Some(dir) = &self.output_dir {
                config.output.path = Some(dir.clone());
            }
            if let Some(top) = self.top {
                config.output.top_boards = Some(top);
            }
            if self.no_companies {
                config.output.include_companies = Some(false);
            }

            if !self.boards.is_empty() {
                let selected = self
                    .boards
                    .iter()
                    .map(|name| name.parse::<Board>())
                    .collect::<Result<Vec<_>>>()?;
                for board in Board::ALL {
                    config.board_override_mut(board).enabled = Some(selected.contains(&board));
                }
                tracing::debug!("Board selection: {:?}", selected);
            }

            Ok(config)
        }
    }

}
