//! Grid rescaler: maps a source study plan onto the requested schedule shape.
//!
//! # Algorithm
//! 1. Empty source → blank-filled target grid.
//! 2. Walk the target calendar from the start date and keep the day indices
//!    whose weekday passes the filter (`k` of them).
//! 3. `k = 0` → rest-filled target grid.
//! 4. Resample the source to `target_hours × k` by nearest-floor index sampling
//!    over evenly spaced positions in `[0, n-1]`. Cells are copied, never blended.
//! 5. Scatter the `k` resampled columns into the eligible positions, left to
//!    right. Every other column stays rest.
//!
//! Degradations are returned as data so the print simulator always has a
//! well-shaped grid to consume.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use crate::planner::activity::{BLANK, ERROR, REST};
use crate::planner::grid::{Grid, GridError};
use crate::planner::weekday::{weekday_name, WeekdayFilter};

// ────────────────────────────────────────────────────────────────────────────
// Outcome types
// ────────────────────────────────────────────────────────────────────────────

/// Why the rescaler returned a placeholder grid instead of resampled content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum DegradeReason {
    /// Source had zero cells. Grid is filled with the blank placeholder.
    EmptySource,
    /// Weekday filter excluded every target day. Grid is filled with rest.
    NoEligibleDays,
    /// Source could not be read as a rectangular grid. Grid is filled with the error marker.
    RescaleFailure(String),
}

/// Result of a rescale. Both variants carry a target-shaped grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RescaleOutcome {
    Ok(Grid),
    Degraded { grid: Grid, reason: DegradeReason },
}

impl RescaleOutcome {
    /// Error-filled target grid for a source that failed shape validation.
    pub fn failure(target_hours: usize, target_days: usize, err: &GridError) -> Self {
        warn!(error = %err, "Source grid is malformed, returning error grid");
        RescaleOutcome::Degraded {
            grid: Grid::filled(target_hours, target_days, ERROR),
            reason: DegradeReason::RescaleFailure(err.to_string()),
        }
    }

    #[cfg(test)]
    pub fn grid(&self) -> &Grid {
        match self {
            RescaleOutcome::Ok(grid) => grid,
            RescaleOutcome::Degraded { grid, .. } => grid,
        }
    }

    #[cfg(test)]
    pub fn reason(&self) -> Option<&DegradeReason> {
        match self {
            RescaleOutcome::Ok(_) => None,
            RescaleOutcome::Degraded { reason, .. } => Some(reason),
        }
    }

    pub fn into_parts(self) -> (Grid, Option<DegradeReason>) {
        match self {
            RescaleOutcome::Ok(grid) => (grid, None),
            RescaleOutcome::Degraded { grid, reason } => (grid, Some(reason)),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sampling
// ────────────────────────────────────────────────────────────────────────────

/// `count` source indices evenly spaced over `[0, source_len - 1]`, floored.
///
/// Exact integer form of `floor(linspace(0, n-1, count))`. A single sample, or
/// a single-element axis, always maps to index 0.
pub fn sample_indices(source_len: usize, count: usize) -> Vec<usize> {
    if count <= 1 || source_len <= 1 {
        return vec![0; count];
    }
    let span = source_len - 1;
    let steps = count - 1;
    (0..count).map(|i| i * span / steps).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Rescale
// ────────────────────────────────────────────────────────────────────────────

/// Rescales `source` to `target_hours × target_days`, restricted to the
/// weekdays admitted by `filter`, counting calendar days from `start`.
pub fn rescale(
    source: &Grid,
    target_days: usize,
    target_hours: usize,
    filter: &WeekdayFilter,
    start: NaiveDate,
) -> RescaleOutcome {
    if source.is_empty() {
        debug!("Source grid is empty, returning blank grid");
        return RescaleOutcome::Degraded {
            grid: Grid::filled(target_hours, target_days, BLANK),
            reason: DegradeReason::EmptySource,
        };
    }

    let eligible = filter.eligible_days(start, target_days);
    if eligible.is_empty() && target_days > 0 {
        warn!(
            target_days,
            %start,
            start_weekday = weekday_name(start),
            "Weekday filter excludes every target day, returning rest grid"
        );
        return RescaleOutcome::Degraded {
            grid: Grid::filled(target_hours, target_days, REST),
            reason: DegradeReason::NoEligibleDays,
        };
    }

    let day_samples = sample_indices(source.days(), eligible.len());
    let hour_samples = sample_indices(source.hours(), target_hours);

    let mut grid = Grid::filled(target_hours, target_days, REST);
    for (&target_day, &source_day) in eligible.iter().zip(&day_samples) {
        for (target_hour, &source_hour) in hour_samples.iter().enumerate() {
            if let Some(code) = source.get(source_hour, source_day) {
                grid.set(target_hour, target_day, code);
            }
        }
    }

    debug!(
        source_hours = source.hours(),
        source_days = source.days(),
        target_hours,
        target_days,
        eligible_days = eligible.len(),
        weekday_filter = filter.is_restricted(),
        "Rescaled grid"
    );
    RescaleOutcome::Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::weekday::date_weekday_index;

    fn grid(data: &[&[&str]]) -> Grid {
        Grid::from_rows(
            data.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
        .unwrap()
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn week_plan() -> Grid {
        grid(&[
            &["P", "P", "S", "S", "S", "R", "R"],
            &["P", "S", "S", "S", "S", "R", "R"],
            &["S", "S", "S", "S", "S", "E", "E"],
            &["S", "E", "E", "R", "E", "E", "E"],
        ])
    }

    // ── sample_indices ──────────────────────────────────────────────────────

    #[test]
    fn test_sample_indices_identity() {
        assert_eq!(sample_indices(5, 5), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_sample_indices_upsample_floors() {
        // linspace(0, 6, 15) floored
        assert_eq!(
            sample_indices(7, 15),
            vec![0, 0, 0, 1, 1, 2, 2, 3, 3, 3, 4, 4, 5, 5, 6]
        );
    }

    #[test]
    fn test_sample_indices_downsample_keeps_endpoints() {
        assert_eq!(sample_indices(7, 3), vec![0, 3, 6]);
        assert_eq!(sample_indices(4, 2), vec![0, 3]);
    }

    #[test]
    fn test_sample_indices_degenerate_axes() {
        assert_eq!(sample_indices(1, 4), vec![0, 0, 0, 0]);
        assert_eq!(sample_indices(9, 1), vec![0]);
        assert!(sample_indices(3, 0).is_empty());
    }

    // ── rescale ─────────────────────────────────────────────────────────────

    #[test]
    fn test_same_shape_is_identity() {
        let source = grid(&[&["P", "S"], &["S", "S"]]);
        let outcome = rescale(&source, 2, 2, &WeekdayFilter::all(), monday());
        assert_eq!(outcome, RescaleOutcome::Ok(source));
    }

    #[test]
    fn test_output_shape_matches_target() {
        let source = week_plan();
        for (days, hours) in [(1, 1), (15, 4), (3, 9), (30, 2)] {
            let outcome = rescale(&source, days, hours, &WeekdayFilter::all(), monday());
            assert!(outcome.reason().is_none());
            assert_eq!(outcome.grid().hours(), hours);
            assert_eq!(outcome.grid().days(), days);
        }
    }

    #[test]
    fn test_unfiltered_upsample_copies_nearest_cells() {
        let source = week_plan();
        let outcome = rescale(&source, 14, 4, &WeekdayFilter::all(), monday());
        let out = outcome.grid();
        let cols = sample_indices(7, 14);
        for (day, &src_day) in cols.iter().enumerate() {
            for hour in 0..4 {
                assert_eq!(out.get(hour, day), source.get(hour, src_day));
            }
        }
    }

    #[test]
    fn test_hours_resampled_independently() {
        let source = grid(&[&["A"], &["B"], &["C"]]);
        let outcome = rescale(&source, 1, 5, &WeekdayFilter::all(), monday());
        let column: Vec<_> = outcome.grid().column(0).collect();
        assert_eq!(column, vec!["A", "A", "B", "B", "C"]);
    }

    #[test]
    fn test_empty_source_is_blank() {
        let outcome = rescale(&Grid::default(), 3, 2, &WeekdayFilter::all(), monday());
        assert_eq!(outcome.reason(), Some(&DegradeReason::EmptySource));
        assert_eq!(outcome.grid(), &Grid::filled(2, 3, BLANK));
    }

    #[test]
    fn test_weekend_filter_scatters_onto_saturday_and_sunday() {
        let source = week_plan();
        let filter = WeekdayFilter::from_names(&["Sab", "Dom"]);
        let outcome = rescale(&source, 7, 4, &filter, monday());
        let out = outcome.grid();

        for day in 0..5 {
            assert!(out.column(day).all(|c| c == REST), "day {day} must be rest");
        }
        // The two eligible columns receive the first and last source days.
        assert_eq!(
            out.column(5).collect::<Vec<_>>(),
            source.column(0).collect::<Vec<_>>()
        );
        assert_eq!(
            out.column(6).collect::<Vec<_>>(),
            source.column(6).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_single_weekday_filter_rests_other_days() {
        let source = grid(&[&["S", "S", "S"]]);
        let filter = WeekdayFilter::from_names(&["Mer"]);
        let outcome = rescale(&source, 21, 2, &filter, monday());
        let out = outcome.grid();
        for day in 0..21 {
            let date = monday() + chrono::Days::new(day as u64);
            if date_weekday_index(date) == 2 {
                assert!(out.column(day).all(|c| c == "S"));
            } else {
                assert!(out.column(day).all(|c| c == REST));
            }
        }
    }

    #[test]
    fn test_filter_excluding_everything_is_rest() {
        let source = week_plan();
        // Mon..Fri only, starting Saturday 2024-01-06, two days long.
        let saturday = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
        let filter = WeekdayFilter::from_names(&["Lun", "Mar", "Mer", "Gio", "Ven"]);
        let outcome = rescale(&source, 2, 3, &filter, saturday);
        assert_eq!(outcome.reason(), Some(&DegradeReason::NoEligibleDays));
        assert_eq!(outcome.grid(), &Grid::filled(3, 2, REST));
    }

    #[test]
    fn test_zero_target_days_is_not_degraded() {
        let outcome = rescale(&week_plan(), 0, 3, &WeekdayFilter::all(), monday());
        assert!(outcome.reason().is_none());
        assert_eq!(outcome.grid().hours(), 3);
        assert_eq!(outcome.grid().days(), 0);
    }

    #[test]
    fn test_failure_is_error_filled() {
        let err = GridError::Ragged {
            row: 1,
            expected: 2,
            found: 1,
        };
        let (grid, reason) = RescaleOutcome::failure(2, 4, &err).into_parts();
        assert_eq!(grid, Grid::filled(2, 4, ERROR));
        assert!(matches!(reason, Some(DegradeReason::RescaleFailure(_))));
    }

    #[test]
    fn test_degrade_reason_serializes_tagged() {
        assert_eq!(
            serde_json::to_value(DegradeReason::NoEligibleDays).unwrap(),
            serde_json::json!({ "kind": "no_eligible_days" })
        );
        assert_eq!(
            serde_json::to_value(DegradeReason::RescaleFailure("bad".into())).unwrap(),
            serde_json::json!({ "kind": "rescale_failure", "detail": "bad" })
        );
    }
}
