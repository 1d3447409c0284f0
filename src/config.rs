//! Configuration for the dashboard figure.

use std::path::PathBuf;

/// Fixed geometry of the rendered figure
///
/// The defaults reproduce the source figure: 15 in by 10 in at 150 dpi,
/// with a banner row for the figure title above the panel grid. The
/// dashboard takes no runtime inputs; this struct exists so tests can
/// point the renderer at a different output path and size.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Output image path
    pub output_path: PathBuf,
    /// Figure width in pixels
    pub width: u32,
    /// Figure height in pixels
    pub height: u32,
    /// Height of the figure-title banner in pixels
    pub banner_height: u32,
    /// Padding around each panel in pixels
    pub panel_margin: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("dashboard.png"),
            width: 2250,
            height: 1500,
            banner_height: 90,
            panel_margin: 24,
        }
    }
}

impl DashboardConfig {
    /// Set the output image path
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Set the figure dimensions in pixels
    #[must_use]
    pub const fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}
