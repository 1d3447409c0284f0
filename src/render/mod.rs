//! Chart rendering
//!
//! Builds the three panel descriptions from the model tables and draws
//! them into the figure layout. [`render_dashboard`] is the whole
//! program: it renders the figure once to the configured bitmap and
//! returns.

pub mod panel;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::config::DashboardConfig;
use crate::error::Result;
use crate::layout;
use crate::models::{
    BorderSubsidy, CadreSalary, NURSING_CARE_NOTE, Region, Role, WelfareStandard,
    border_subsidies, cadre_salaries, welfare_standards,
};
use crate::theme;
use panel::{Bar, BarPanel, BarSeries, CategoryTick, draw_bar_panel};

/// Figure title drawn across the banner
pub const FIGURE_TITLE: &str = "2024 Policy Benefits Structure: Categorized View";

const CADRE_TITLE: &str = "Category I: Job Performance\n(Village Cadre Compensation)";
const SUBSIDY_TITLE: &str = "Category II: Strategic Location\n(Border Resident Subsidy)";
const WELFARE_TITLE: &str = "Category III: Social Safety Net\n(Poverty Alleviation Standards)";

/// Top-left panel: grouped salary bars, one group per region, one
/// legend series per role.
#[must_use]
pub fn cadre_panel(rows: &[CadreSalary]) -> BarPanel {
    let regions = [Region::Interior, Region::Border];
    let roles = [
        (Role::Director, theme::GREEN_STRONG, -0.2f32),
        (Role::Staff, theme::GREEN_LIGHT, 0.2f32),
    ];

    let series = roles
        .iter()
        .map(|&(role, fill, shift)| BarSeries {
            name: Some(role.label()),
            bars: regions
                .iter()
                .enumerate()
                .filter_map(|(slot, &region)| {
                    rows.iter()
                        .find(|r| r.region == region && r.role == role)
                        .map(|r| Bar {
                            x: slot as f32 + 0.5 + shift,
                            width: 0.38,
                            value: r.salary,
                            label: r.salary.to_string(),
                            fill,
                            edge: Some(theme::GREEN_STRONG),
                        })
                })
                .collect(),
        })
        .collect();

    BarPanel {
        title: CADRE_TITLE,
        y_desc: "Annual Salary (CNY)",
        slots: regions.len() as f32,
        series,
        ticks: regions
            .iter()
            .enumerate()
            .map(|(i, r)| CategoryTick {
                x: i as f32 + 0.5,
                label: r.label(),
            })
            .collect(),
        note: None,
    }
}

/// Top-right panel: one subsidy bar per village type.
#[must_use]
pub fn subsidy_panel(rows: &[BorderSubsidy]) -> BarPanel {
    let palette = [theme::GREEN_STRONG, theme::GREEN_MEDIUM];
    BarPanel {
        title: SUBSIDY_TITLE,
        y_desc: "Annual Subsidy (CNY)",
        slots: rows.len() as f32,
        series: vec![BarSeries {
            name: None,
            bars: rows
                .iter()
                .enumerate()
                .map(|(i, r)| Bar {
                    x: i as f32 + 0.5,
                    width: 0.75,
                    value: r.subsidy,
                    label: r.subsidy.to_string(),
                    fill: palette[i % palette.len()],
                    edge: None,
                })
                .collect(),
        }],
        ticks: rows
            .iter()
            .enumerate()
            .map(|(i, r)| CategoryTick {
                x: i as f32 + 0.5,
                label: r.village.label(),
            })
            .collect(),
        note: None,
    }
}

/// Bottom panel: narrow welfare-standard bars plus the nursing-care
/// note box. The note is the figure's only free-text annotation.
#[must_use]
pub fn welfare_panel(rows: &[WelfareStandard]) -> BarPanel {
    let palette = [theme::GREEN_MEDIUM, theme::GREEN_LIGHT];
    BarPanel {
        title: WELFARE_TITLE,
        y_desc: "Standard (CNY/Year)",
        slots: rows.len() as f32,
        series: vec![BarSeries {
            name: None,
            bars: rows
                .iter()
                .enumerate()
                .map(|(i, r)| Bar {
                    x: i as f32 + 0.5,
                    width: 0.4,
                    value: r.amount,
                    label: r.amount.to_string(),
                    fill: palette[i % palette.len()],
                    edge: None,
                })
                .collect(),
        }],
        ticks: rows
            .iter()
            .enumerate()
            .map(|(i, r)| CategoryTick {
                x: i as f32 + 0.5,
                label: r.setting.label(),
            })
            .collect(),
        note: Some(NURSING_CARE_NOTE),
    }
}

/// Draw the whole figure onto an existing root area.
///
/// Generic over the backend so tests can draw into an in-memory buffer.
pub fn draw_dashboard<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    config: &DashboardConfig,
) -> Result<()> {
    root.fill(&WHITE)?;
    let regions = layout::split_figure(root, config.banner_height, config.panel_margin);

    let (banner_w, banner_h) = regions.banner.dim_in_pixel();
    regions.banner.draw(&Text::new(
        FIGURE_TITLE,
        (banner_w as i32 / 2, banner_h as i32 / 2),
        theme::figure_title_font(),
    ))?;

    draw_bar_panel(&regions.top_left, &cadre_panel(&cadre_salaries()))?;
    draw_bar_panel(&regions.top_right, &subsidy_panel(&border_subsidies()))?;
    draw_bar_panel(&regions.bottom, &welfare_panel(&welfare_standards()))?;
    Ok(())
}

/// Render the figure once to the configured output bitmap.
pub fn render_dashboard(config: &DashboardConfig) -> Result<()> {
    let root =
        BitMapBackend::new(&config.output_path, (config.width, config.height)).into_drawing_area();
    draw_dashboard(&root, config)?;
    root.present()?;
    log::info!(
        "Wrote {} ({}x{})",
        config.output_path.display(),
        config.width,
        config.height
    );
    Ok(())
}
