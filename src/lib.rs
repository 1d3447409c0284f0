//! A static multi-panel dashboard of the 2024 policy benefit figures.
//!
//! Three fixed tables (village-cadre compensation, border-resident
//! subsidies, and poverty-alleviation welfare standards) are rendered as
//! annotated bar charts in a three-region layout and written once as a
//! PNG. The tables are literal constants; there is no input of any kind.

pub mod config;
pub mod error;
pub mod layout;
pub mod models;
pub mod render;
pub mod theme;

// Re-export the most common types for easier use
pub use config::DashboardConfig;
pub use error::{DashboardError, Result};
pub use render::{FIGURE_TITLE, draw_dashboard, render_dashboard};
