//! Print simulator: spreads a page budget over the study cells of a grid.
//!
//! The grid is walked column-major (every hour of day 1, then day 2, …). Each
//! study cell prints `pages_per_study_unit` pages. Cumulative totals are
//! recomputed from the running count each time, so rounding never compounds.

use serde::Serialize;

use crate::planner::activity::is_study;
use crate::planner::grid::Grid;

/// One study cell in traversal order. `day` and `hour` are 1-based.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintEvent {
    pub day: usize,
    pub hour: usize,
    pub running_count: usize,
    pub total_study: usize,
    pub cumulative_pages: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintSummary {
    pub pages_per_study_unit: f64,
    pub total_study: usize,
    pub events: Vec<PrintEvent>,
}

impl PrintSummary {
    fn empty() -> Self {
        Self {
            pages_per_study_unit: 0.0,
            total_study: 0,
            events: Vec::new(),
        }
    }
}

/// Rounds to 2 decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn count_study(grid: &Grid) -> usize {
    grid.rows()
        .iter()
        .flatten()
        .filter(|code| is_study(code))
        .count()
}

/// Simulates printing `total_pages` pages across the study cells of `grid`.
pub fn simulate(grid: &Grid, total_pages: f64) -> PrintSummary {
    let total_study = count_study(grid);
    if total_study == 0 {
        return PrintSummary::empty();
    }

    let pages_per_study_unit = total_pages / total_study as f64;
    let mut events = Vec::with_capacity(total_study);

    for day in 0..grid.days() {
        for (hour, code) in grid.column(day).enumerate() {
            if !is_study(code) {
                continue;
            }
            let running_count = events.len() + 1;
            events.push(PrintEvent {
                day: day + 1,
                hour: hour + 1,
                running_count,
                total_study,
                cumulative_pages: round2(running_count as f64 * pages_per_study_unit),
            });
        }
    }

    PrintSummary {
        pages_per_study_unit: round2(pages_per_study_unit),
        total_study,
        events,
    }
}
