//! Axum route handlers for the grid processing API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::planner::grid::Grid;
use crate::planner::print::{simulate, PrintSummary};
use crate::planner::rescale::{rescale, DegradeReason, RescaleOutcome};
use crate::planner::weekday::{resolve_start_date, WeekdayFilter};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Body of POST /api/v1/grid/process. The Italian aliases are the field names
/// used by the original mobile client.
#[derive(Debug, Default, Deserialize)]
pub struct ProcessGridRequest {
    #[serde(default, alias = "griglia_iniziale")]
    pub source_grid: Option<Value>,
    #[serde(default, alias = "giorni_nuovi")]
    pub target_days: Option<usize>,
    #[serde(default, alias = "ore_giornaliere")]
    pub target_hours: Option<usize>,
    #[serde(default, alias = "totale_pagine")]
    pub total_pages: Option<f64>,
    #[serde(default, alias = "giorni_settimana")]
    pub allowed_weekdays: Option<Vec<String>>,
    #[serde(default, alias = "data_inizio")]
    pub start_date: Option<String>,
}

/// A request that passed validation. Owned so it can move into `spawn_blocking`.
#[derive(Debug, Clone)]
pub struct GridJob {
    pub source_grid: Value,
    pub target_days: usize,
    pub target_hours: usize,
    pub total_pages: f64,
    pub allowed_weekdays: Vec<String>,
    pub start_date: Option<String>,
}

impl ProcessGridRequest {
    /// Rejects missing required fields, a bad page budget, or a target shape
    /// larger than `max_cells`. Each axis is checked as if the other were at
    /// least 1, so a zero axis cannot hide an oversized one.
    pub fn validate(self, max_cells: usize) -> Result<GridJob, AppError> {
        let missing: Vec<&str> = [
            ("source_grid", self.source_grid.is_none()),
            ("target_days", self.target_days.is_none()),
            ("target_hours", self.target_hours.is_none()),
            ("total_pages", self.total_pages.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect();

        let (Some(source_grid), Some(target_days), Some(target_hours), Some(total_pages)) = (
            self.source_grid,
            self.target_days,
            self.target_hours,
            self.total_pages,
        ) else {
            return Err(AppError::Validation(format!(
                "Missing required input fields: {}",
                missing.join(", ")
            )));
        };

        if !total_pages.is_finite() || total_pages < 0.0 {
            return Err(AppError::Validation(
                "total_pages must be a non-negative number".to_string(),
            ));
        }

        match target_days.max(1).checked_mul(target_hours.max(1)) {
            Some(cells) if cells <= max_cells => {}
            _ => {
                return Err(AppError::UnprocessableEntity(format!(
                    "Target grid {target_hours}x{target_days} exceeds the limit of {max_cells} cells"
                )))
            }
        }

        Ok(GridJob {
            source_grid,
            target_days,
            target_hours,
            total_pages,
            allowed_weekdays: self.allowed_weekdays.unwrap_or_default(),
            start_date: self.start_date,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GridStatus {
    Ok,
    Degraded,
}

#[derive(Debug, Serialize)]
pub struct ProcessGridResponse {
    pub message: String,
    pub start_date: NaiveDate,
    pub start_date_defaulted: bool,
    pub grid_status: GridStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degraded_reason: Option<DegradeReason>,
    pub grid: Grid,
    pub print_summary: PrintSummary,
}

// ────────────────────────────────────────────────────────────────────────────
// Processing
// ────────────────────────────────────────────────────────────────────────────

/// Rescales the source grid and simulates printing over the result.
///
/// CPU-bound; the handler runs it inside `spawn_blocking`.
pub fn process_grid(job: GridJob, today: NaiveDate) -> ProcessGridResponse {
    let start = resolve_start_date(job.start_date.as_deref(), today);
    let filter = WeekdayFilter::from_names(&job.allowed_weekdays);

    let outcome = match Grid::from_json(&job.source_grid) {
        Ok(source) => rescale(
            &source,
            job.target_days,
            job.target_hours,
            &filter,
            start.date,
        ),
        Err(err) => RescaleOutcome::failure(job.target_hours, job.target_days, &err),
    };

    let (grid, degraded_reason) = outcome.into_parts();
    let print_summary = simulate(&grid, job.total_pages);

    ProcessGridResponse {
        message: "Processing completed".to_string(),
        start_date: start.date,
        start_date_defaulted: start.defaulted,
        grid_status: if degraded_reason.is_some() {
            GridStatus::Degraded
        } else {
            GridStatus::Ok
        },
        degraded_reason,
        grid,
        print_summary,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/grid/process (also served at the legacy POST /processa-griglia)
pub async fn handle_process_grid(
    State(state): State<AppState>,
    payload: Result<Json<ProcessGridRequest>, JsonRejection>,
) -> Result<Json<ProcessGridResponse>, AppError> {
    let Json(request) = payload?;
    let job = request.validate(state.config.max_grid_cells)?;

    let request_id = Uuid::new_v4();
    let (target_days, target_hours) = (job.target_days, job.target_hours);
    let today = Utc::now().date_naive();

    let response = tokio::task::spawn_blocking(move || process_grid(job, today))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in grid processing: {e}"))
        })?;

    if let Some(reason) = &response.degraded_reason {
        warn!(%request_id, ?reason, "Grid processing returned a degraded grid");
    }
    info!(
        %request_id,
        target_days,
        target_hours,
        total_study = response.print_summary.total_study,
        pages_per_study_unit = response.print_summary.pages_per_study_unit,
        "Grid processed"
    );

    Ok(Json(response))
}
