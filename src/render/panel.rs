//! Bar-panel specification and drawing
//!
//! A [`BarPanel`] is the declarative description of one chart region:
//! titled, unit-labelled, with one or more bar series over category slots
//! and an optional free-text note box. Drawing is generic over the
//! plotters backend so tests can render into an in-memory buffer.

use plotters::chart::SeriesLabelPosition;
use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf32;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::error::Result;
use crate::theme;

/// Height of the panel-title band in pixels, fitting two title lines
const TITLE_BAND: i32 = 70;
/// Vertical headroom above the tallest bar, leaving room for annotations
const Y_HEADROOM: f32 = 1.18;

/// One vertical bar
#[derive(Debug, Clone)]
pub struct Bar {
    /// Center of the bar in category-slot units
    pub x: f32,
    /// Width of the bar in category-slot units
    pub width: f32,
    /// Bar height, the literal table value
    pub value: u32,
    /// Annotation text drawn above the bar
    pub label: String,
    /// Fill color
    pub fill: RGBColor,
    /// Optional edge color drawn around the bar
    pub edge: Option<RGBColor>,
}

/// A group of bars sharing a legend entry
#[derive(Debug, Clone)]
pub struct BarSeries {
    /// Legend name; unnamed series produce no legend
    pub name: Option<&'static str>,
    /// Bars of this series
    pub bars: Vec<Bar>,
}

/// A category label centered under one slot of the x axis
#[derive(Debug, Clone)]
pub struct CategoryTick {
    /// Slot center in category-slot units
    pub x: f32,
    /// Label text
    pub label: &'static str,
}

/// Declarative description of one chart region
#[derive(Debug, Clone)]
pub struct BarPanel {
    /// Two-line panel title, newline separated
    pub title: &'static str,
    /// Y-axis unit description
    pub y_desc: &'static str,
    /// Number of category slots on the x axis
    pub slots: f32,
    /// Bar series, drawn in order
    pub series: Vec<BarSeries>,
    /// Category labels under the x axis
    pub ticks: Vec<CategoryTick>,
    /// Optional free-text note box drawn inside the plot area
    pub note: Option<&'static str>,
}

impl BarPanel {
    /// Total number of bars across all series
    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.series.iter().map(|s| s.bars.len()).sum()
    }

    /// Largest bar value, 0 for an empty panel
    #[must_use]
    pub fn max_value(&self) -> u32 {
        self.series
            .iter()
            .flat_map(|s| s.bars.iter().map(|b| b.value))
            .max()
            .unwrap_or(0)
    }

    /// Annotation labels of all bars, in series order
    #[must_use]
    pub fn bar_labels(&self) -> Vec<&str> {
        self.series
            .iter()
            .flat_map(|s| s.bars.iter().map(|b| b.label.as_str()))
            .collect()
    }
}

/// Draw one bar panel onto the given region.
pub fn draw_bar_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &BarPanel,
) -> Result<()> {
    let (title_area, chart_area) = area.split_vertically(TITLE_BAND);

    let title_font = theme::panel_title_font();
    let line_step = theme::PANEL_TITLE_SIZE as i32 + 6;
    for (i, line) in panel.title.lines().enumerate() {
        title_area.draw(&Text::new(line, (4, 4 + i as i32 * line_step), title_font.clone()))?;
    }

    let y_max = panel.max_value() as f32 * Y_HEADROOM;
    let mut chart = ChartBuilder::on(&chart_area)
        .margin(8)
        .x_label_area_size(36)
        .y_label_area_size(84)
        .build_cartesian_2d(0f32..panel.slots, 0f32..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_label_formatter(&|_| String::new())
        .y_label_formatter(&|v: &f32| format!("{}", *v as u32))
        .y_labels(5)
        .y_desc(panel.y_desc)
        .axis_desc_style(theme::label_font())
        .label_style(theme::label_font())
        .draw()?;

    // Horizontal dashed gridlines, under the bars
    let grid_style = ShapeStyle::from(BLACK.mix(0.3)).stroke_width(1);
    for tick in grid_ticks(y_max) {
        chart.draw_series(DashedLineSeries::new(
            vec![(0f32, tick), (panel.slots, tick)],
            6,
            6,
            grid_style,
        ))?;
    }

    for series in &panel.series {
        let fills = chart.draw_series(series.bars.iter().map(|b| {
            Rectangle::new(
                [(b.x - b.width / 2.0, 0f32), (b.x + b.width / 2.0, b.value as f32)],
                b.fill.filled(),
            )
        }))?;
        if let Some(name) = series.name {
            let chip = series.bars.first().map_or(theme::GREEN_STRONG, |b| b.fill);
            fills.label(name).legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 14, y + 6)], chip.filled())
            });
        }
        chart.draw_series(series.bars.iter().filter_map(|b| {
            b.edge.map(|edge| {
                Rectangle::new(
                    [(b.x - b.width / 2.0, 0f32), (b.x + b.width / 2.0, b.value as f32)],
                    edge.stroke_width(1),
                )
            })
        }))?;
        // Exact integer value above each bar
        let annotation_font = theme::annotation_font();
        chart.draw_series(series.bars.iter().map(|b| {
            Text::new(
                b.label.clone(),
                (b.x, b.value as f32 + y_max * 0.015),
                annotation_font.clone(),
            )
        }))?;
    }

    // Category labels centered under the axis
    let category_font = theme::category_font();
    let (x_px, y_px) = chart_area.get_pixel_range();
    for tick in &panel.ticks {
        let (bx, by) = chart.backend_coord(&(tick.x, 0f32));
        chart_area.draw(&Text::new(
            tick.label,
            (bx - x_px.start, by - y_px.start + 8),
            category_font.clone(),
        ))?;
    }

    if let Some(note) = panel.note {
        draw_note_box(&mut chart, panel.slots, y_max, note)?;
    }

    if panel.series.iter().any(|s| s.name.is_some()) {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.4))
            .label_font(theme::label_font())
            .draw()?;
    }

    Ok(())
}

/// Draw the free-text note box, anchored with its left edge at the
/// horizontal center of the plot and centered vertically.
fn draw_note_box<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf32, RangedCoordf32>>,
    slots: f32,
    y_max: f32,
    note: &str,
) -> Result<()> {
    let lines: Vec<&str> = note.lines().collect();
    let x0 = slots * 0.5;
    let x1 = slots * 0.94;
    let line_step = y_max * 0.085;
    let y_mid = y_max * 0.5;
    let half = line_step * (lines.len() as f32 + 1.0) / 2.0;

    chart.draw_series(std::iter::once(Rectangle::new(
        [(x0, y_mid - half), (x1, y_mid + half)],
        theme::ANNOTATION_FILL.filled(),
    )))?;
    chart.draw_series(std::iter::once(Rectangle::new(
        [(x0, y_mid - half), (x1, y_mid + half)],
        theme::GREEN_STRONG.stroke_width(2),
    )))?;

    let font = theme::note_font();
    chart.draw_series(lines.iter().enumerate().map(|(i, line)| {
        let y = y_mid + half - line_step * (i as f32 + 1.0);
        Text::new((*line).to_string(), (x0 + slots * 0.02, y), font.clone())
    }))?;
    Ok(())
}

/// Gridline positions between 0 (exclusive) and `max` at a round step.
fn grid_ticks(max: f32) -> Vec<f32> {
    let step = grid_step(max);
    let mut ticks = Vec::new();
    let mut t = step;
    while t < max {
        ticks.push(t);
        t += step;
    }
    ticks
}

/// Round gridline step (1, 2, or 5 times a power of ten) giving roughly
/// five divisions of `max`.
fn grid_step(max: f32) -> f32 {
    let raw = (max / 5.0).max(1.0);
    let magnitude = 10f32.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let step = if normalized < 1.5 {
        1.0
    } else if normalized < 3.5 {
        2.0
    } else if normalized < 7.5 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}
