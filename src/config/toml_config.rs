use crate::core::boards::Board;
use crate::core::dashboard::DEFAULT_TOP_BOARDS;
use crate::core::ConfigProvider;
use crate::domain::model::{BoardOverride, OutputFormat};
use crate::utils::error::{HubError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HubConfig {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub boards: HashMap<String, BoardOverride>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    pub query: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub path: Option<String>,
    pub top_boards: Option<usize>,
    pub include_companies: Option<bool>,
}

impl HubConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HubError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HubError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${JOB_QUERY})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HubError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(format) = &self.output.format {
            validation::validate_one_of(
                "output.format",
                &format.to_ascii_lowercase(),
                &OutputFormat::NAMES,
            )?;
        }

        if let Some(path) = &self.output.path {
            validation::validate_path("output.path", path)?;
        }

        if let Some(top) = self.output.top_boards {
            validation::validate_range("output.top_boards", top, 1, Board::ALL.len())?;
        }

        for name in self.boards.keys() {
            name.parse::<Board>()?;
        }

        Ok(())
    }

    /// Entry for `board`, reusing whichever spelling of its name is already
    /// present so a board never ends up with two competing overrides.
    pub fn board_override_mut(&mut self, board: Board) -> &mut BoardOverride {
        let existing = self
            .boards
            .keys()
            .find(|key| key.parse::<Board>().ok() == Some(board))
            .cloned();
        let key = existing.unwrap_or_else(|| board.name().to_string());
        self.boards.entry(key).or_default()
    }
}

impl ConfigProvider for HubConfig {
    fn raw_query(&self) -> &str {
        self.search.query.as_deref().unwrap_or("")
    }

    fn raw_location(&self) -> &str {
        self.search.location.as_deref().unwrap_or("")
    }

    fn output_format(&self) -> OutputFormat {
        self.output
            .format
            .as_deref()
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }

    fn top_boards(&self) -> usize {
        self.output.top_boards.unwrap_or(DEFAULT_TOP_BOARDS)
    }

    fn include_companies(&self) -> bool {
        self.output.include_companies.unwrap_or(true)
    }

    fn board_overrides(&self) -> &HashMap<String, BoardOverride> {
        &self.boards
    }
}

impl Validate for HubConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
