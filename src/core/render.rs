use crate::domain::model::{DashboardView, OutputFormat};
use crate::domain::ports::Renderer;
use crate::utils::error::{HubError, Result};
use std::fmt::Write;

pub fn renderer_for(format: OutputFormat) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
        OutputFormat::Csv => Box::new(DelimitedRenderer::new(b',')),
        OutputFormat::Tsv => Box::new(DelimitedRenderer::new(b'\t')),
        OutputFormat::Urls => Box::new(UrlListRenderer),
    }
}

/// Human readable dashboard for the terminal.
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, view: &DashboardView) -> Result<String> {
        write_text(view).map_err(|e| HubError::RenderError {
            message: e.to_string(),
        })
    }
}

fn write_text(view: &DashboardView) -> std::result::Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "Custom Tech Job Hub")?;
    writeln!(out, "Keywords: {}", view.search.query())?;
    writeln!(out, "Location: {}", view.search.location())?;
    writeln!(out)?;

    let stats = &view.stats;
    writeln!(out, "  {:<20}{:>8}", "New Listings Today", stats.new_listings)?;
    writeln!(out, "  {:<20}{:>8}", "Hybrid Roles", stats.hybrid_roles)?;
    writeln!(out, "  {:<20}{:>8}", "Remote Friendly", stats.remote_friendly)?;
    writeln!(out, "  {:<20}{:>8}", "Total Listings", stats.total_jobs)?;
    writeln!(out)?;

    writeln!(out, "Search Job Boards")?;
    for board in &view.boards {
        writeln!(
            out,
            "  {} {}  ~{} jobs  [{}]",
            board.icon, board.name, board.estimated_jobs, board.highlight
        )?;
        writeln!(out, "     {}", board.description)?;
        writeln!(out, "     {}", board.url)?;
    }

    if !view.top_boards.is_empty() {
        writeln!(out)?;
        writeln!(out, "Open Top {} Job Boards", view.top_boards.len())?;
        for url in &view.top_boards {
            writeln!(out, "  {}", url)?;
        }
    }

    if !view.companies.is_empty() {
        writeln!(out)?;
        writeln!(out, "Top Companies Hiring")?;
        for company in &view.companies {
            writeln!(
                out,
                "  {} {} ({})  {}",
                company.icon, company.name, company.location, company.url
            )?;
        }
    }

    Ok(out)
}

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, view: &DashboardView) -> Result<String> {
        let mut json = serde_json::to_string_pretty(view)?;
        json.push('\n');
        Ok(json)
    }
}

/// One row per board: `board, highlight, estimated_jobs, url`.
pub struct DelimitedRenderer {
    delimiter: u8,
}

impl DelimitedRenderer {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

impl Renderer for DelimitedRenderer {
    fn render(&self, view: &DashboardView) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(Vec::new());

        writer.write_record(["board", "highlight", "estimated_jobs", "url"])?;
        for board in &view.boards {
            writer.write_record([
                board.name.as_str(),
                board.highlight.as_str(),
                board.estimated_jobs.to_string().as_str(),
                board.url.as_str(),
            ])?;
        }

        let bytes = writer.into_inner().map_err(|e| HubError::RenderError {
            message: e.to_string(),
        })?;
        String::from_utf8(bytes).map_err(|e| HubError::RenderError {
            message: e.to_string(),
        })
    }
}

/// Bare board URLs, one per line, for piping into a browser opener.
pub struct UrlListRenderer;

impl Renderer for UrlListRenderer {
    fn render(&self, view: &DashboardView) -> Result<String> {
        Ok(view.boards.iter().map(|b| format!("{}\n", b.url)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::boards::BoardCatalog;
    use crate::core::dashboard::{build_dashboard, DashboardOptions};
    use crate::domain::model::SearchInput;

    fn default_view() -> DashboardView {
        build_dashboard(
            &SearchInput::default(),
            &BoardCatalog::standard(),
            &DashboardOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_text_output() {
        let text = TextRenderer.render(&default_view()).unwrap();
        assert!(text.contains("Keywords: Software Engineer"));
        assert!(text.contains("Location: Copenhagen, Denmark"));
        assert!(text.contains("LinkedIn  ~191 jobs  [Most active]"));
        assert!(text.contains("Open Top 4 Job Boards"));
        assert!(text.contains("Novo Nordisk (Bagsværd)"));
    }

    #[test]
    fn test_json_output() {
        let json = JsonRenderer.render(&default_view()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["search"]["query"], "Software Engineer");
        assert_eq!(value["stats"]["total_jobs"], 915);
        assert_eq!(value["boards"][3]["name"], "Glassdoor");
        assert_eq!(value["boards"][3]["estimated_jobs"], 230);
        assert_eq!(value["top_boards"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_csv_output_quotes_commas() {
        let csv = renderer_for(OutputFormat::Csv).render(&default_view()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "board,highlight,estimated_jobs,url");
        assert_eq!(lines.len(), 7);
        // Glassdoor's SEO path contains commas
        assert!(lines[4].starts_with("Glassdoor,Salary data,230,\"https://www.glassdoor.com/"));
    }

    #[test]
    fn test_tsv_output() {
        let tsv = renderer_for(OutputFormat::Tsv).render(&default_view()).unwrap();
        let second = tsv.lines().nth(1).unwrap();
        assert_eq!(
            second,
            "LinkedIn\tMost active\t191\thttps://www.linkedin.com/jobs/search/?keywords=Software%20Engineer&location=Copenhagen%2C%20Denmark&f_TPR=r86400"
        );
    }

    #[test]
    fn test_url_list_output() {
        let urls = renderer_for(OutputFormat::Urls).render(&default_view()).unwrap();
        assert_eq!(urls.lines().count(), 6);
        assert!(urls.lines().all(|line| line.starts_with("https://")));
    }
}
