//! Error handling for the dashboard renderer.

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Specialized error type for dashboard rendering
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Error writing the output image
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error reported by the plotting backend
    #[error("Render error: {0}")]
    Render(String),
}

// Plotters drawing errors are generic over the backend error type, so they
// are captured here as their rendered message. All of them are fatal.
impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for DashboardError {
    fn from(error: DrawingAreaErrorKind<E>) -> Self {
        Self::Render(error.to_string())
    }
}

/// Result type for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
