use crate::domain::model::{BoardOverride, DashboardView, OutputFormat};
use crate::utils::error::Result;
use std::collections::HashMap;

pub trait Storage {
    /// Writes `data` under `path` and returns the full location written to.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}

pub trait ConfigProvider {
    fn raw_query(&self) -> &str;
    fn raw_location(&self) -> &str;
    fn output_format(&self) -> OutputFormat;
    fn output_path(&self) -> Option<&str>;
    fn top_boards(&self) -> usize;
    fn include_companies(&self) -> bool;
    fn board_overrides(&self) -> &HashMap<String, BoardOverride>;
}

pub trait Renderer {
    fn render(&self, view: &DashboardView) -> Result<String>;
}
