use crate::core::boards::BoardCatalog;
use crate::core::dashboard::{build_dashboard, DashboardOptions};
use crate::core::render::renderer_for;
use crate::core::{ConfigProvider, SearchInput, Storage};
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The dashboard was written to this location.
    Written(String),
    /// No output path configured; the rendered dashboard is returned as is.
    Rendered(String),
}

pub struct HubEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> HubEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn run(&self) -> Result<RunOutcome> {
        let search = SearchInput::new(self.config.raw_query(), self.config.raw_location());
        tracing::debug!("Normalized search: {}", search.summary_line());

        let catalog = BoardCatalog::with_overrides(self.config.board_overrides())?;
        let options = DashboardOptions {
            top_boards: self.config.top_boards(),
            include_companies: self.config.include_companies(),
        };
        let view = build_dashboard(&search, &catalog, &options)?;

        let format = self.config.output_format();
        let rendered = renderer_for(format).render(&view)?;

        match self.config.output_path() {
            Some(_) => {
                let filename = format!("dashboard.{}", format.extension());
                let written = self.storage.write_file(&filename, rendered.as_bytes())?;
                tracing::info!("Dashboard saved to: {}", written);
                Ok(RunOutcome::Written(written))
            }
            None => Ok(RunOutcome::Rendered(rendered)),
        }
    }
}
