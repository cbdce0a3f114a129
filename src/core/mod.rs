pub mod boards;
pub mod companies;
pub mod dashboard;
pub mod engine;
pub mod estimate;
pub mod render;
pub mod summary;

pub use crate::domain::model::{BoardListing, DashboardView, SearchInput, SummaryStats};
pub use crate::domain::ports::{ConfigProvider, Renderer, Storage};
pub use crate::utils::error::Result;
