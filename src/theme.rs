//! Palette and typography for the dashboard
//!
//! The palette is the fixed green scale of the source figure. Font sizes
//! are in pixels, converted from the source's point sizes at 150 dpi.

use plotters::prelude::*;
use plotters::style::FontStyle;
use plotters::style::text_anchor::{HPos, Pos, VPos};

/// Dark green used for titles, edges, and the strongest bars
pub const GREEN_STRONG: RGBColor = RGBColor(0x1b, 0x5e, 0x20);
/// Mid green used for secondary bars
pub const GREEN_MEDIUM: RGBColor = RGBColor(0x43, 0xa0, 0x47);
/// Pale green used for tertiary bars
pub const GREEN_LIGHT: RGBColor = RGBColor(0xa5, 0xd6, 0xa7);
/// Background fill of the nursing-care annotation box
pub const ANNOTATION_FILL: RGBColor = RGBColor(0xf1, 0xf8, 0xe9);

/// Figure title, 16 pt
pub const FIGURE_TITLE_SIZE: u32 = 33;
/// Panel title, 12 pt bold
pub const PANEL_TITLE_SIZE: u32 = 25;
/// Axis descriptions, tick labels, bar annotations, 10 pt
pub const LABEL_SIZE: u32 = 21;

const FONT_FAMILY: &str = "sans-serif";

/// Centered figure-title style
#[must_use]
pub fn figure_title_font() -> TextStyle<'static> {
    (FONT_FAMILY, FIGURE_TITLE_SIZE)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center))
}

/// Left-aligned bold panel-title style, in strong green
#[must_use]
pub fn panel_title_font() -> TextStyle<'static> {
    (FONT_FAMILY, PANEL_TITLE_SIZE)
        .into_font()
        .style(FontStyle::Bold)
        .color(&GREEN_STRONG)
        .pos(Pos::new(HPos::Left, VPos::Top))
}

/// Axis description and tick-label style
#[must_use]
pub fn label_font() -> TextStyle<'static> {
    (FONT_FAMILY, LABEL_SIZE).into_font().color(&BLACK)
}

/// Bar-annotation style, centered above the bar
#[must_use]
pub fn annotation_font() -> TextStyle<'static> {
    (FONT_FAMILY, LABEL_SIZE)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom))
}

/// Category tick-label style, centered under the axis
#[must_use]
pub fn category_font() -> TextStyle<'static> {
    (FONT_FAMILY, LABEL_SIZE)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top))
}

/// Note-box text style, left-aligned
#[must_use]
pub fn note_font() -> TextStyle<'static> {
    (FONT_FAMILY, LABEL_SIZE)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center))
}
