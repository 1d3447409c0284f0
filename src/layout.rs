//! Figure surface layout
//!
//! Splits the root drawing area into a title banner plus a 2-by-2 grid
//! with equal row weighting, where the bottom row's two cells are merged
//! into one wide region.

use plotters::coord::Shift;
use plotters::prelude::*;

/// The four regions of the figure surface
pub struct FigureLayout<DB: DrawingBackend> {
    /// Banner strip across the top, holding the figure title
    pub banner: DrawingArea<DB, Shift>,
    /// Top-left chart region
    pub top_left: DrawingArea<DB, Shift>,
    /// Top-right chart region
    pub top_right: DrawingArea<DB, Shift>,
    /// Bottom chart region, spanning the full row
    pub bottom: DrawingArea<DB, Shift>,
}

/// Split the root area into the banner and the three chart regions.
///
/// `panel_margin` insets each chart region on all sides so neighbouring
/// panels do not touch.
pub fn split_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    banner_height: u32,
    panel_margin: u32,
) -> FigureLayout<DB> {
    let m = panel_margin as i32;
    let (banner, body) = root.split_vertically(banner_height as i32);
    let rows = body.split_evenly((2, 1));
    let top = rows[0].split_evenly((1, 2));
    FigureLayout {
        banner,
        top_left: top[0].margin(m, m, m, m),
        top_right: top[1].margin(m, m, m, m),
        bottom: rows[1].margin(m, m, m, m),
    }
}
