use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{Local, NaiveDate};
use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::fetch::Fetch;
use crate::{AthleticsCalendar, Error, Event, Pipeline, Teams};

const MAX_MONTHS: usize = 12;

struct AppState<F> {
    pipeline: Pipeline<F>,
    default_months: usize,
}

type SharedState<F> = Arc<AppState<F>>;

pub fn router<F: Fetch + 'static>(pipeline: Pipeline<F>, default_months: usize) -> Router {
    let state = Arc::new(AppState {
        pipeline,
        default_months,
    });

    Router::new()
        .route("/schoolCalendar", get(handle_school_calendar::<F>))
        .route("/athleticsCalendar", get(handle_athletics_calendar::<F>))
        .route("/athleticsTeams", get(handle_athletics_teams::<F>))
        .with_state(state)
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

enum ApiError {
    BadRequest(String),
    Pipeline(Error),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self::Pipeline(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Pipeline(err) => {
                error!("{err}");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

#[derive(Deserialize)]
struct CalendarQuery {
    date: Option<NaiveDate>,
    months: Option<usize>,
}

async fn handle_school_calendar<F: Fetch>(
    State(state): State<SharedState<F>>,
    query: Result<Query<CalendarQuery>, QueryRejection>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let months = query.months.unwrap_or(state.default_months);
    if !(1..=MAX_MONTHS).contains(&months) {
        return Err(ApiError::BadRequest(format!(
            "months must be between 1 and {MAX_MONTHS}"
        )));
    }

    let start = query.date.unwrap_or_else(|| Local::now().date_naive());
    let events = state.pipeline.school_calendar(start, months).await?;

    info!("Served {} school calendar events from {start} over {months} months", events.len());
    Ok(Json(events))
}

async fn handle_athletics_calendar<F: Fetch>(
    State(state): State<SharedState<F>>,
) -> Result<Json<AthleticsCalendar>, ApiError> {
    let calendar = state.pipeline.athletics_calendar().await?;

    info!(
        "Served {} games and {} practices",
        calendar.games.len(),
        calendar.practices.len()
    );
    Ok(Json(calendar))
}

async fn handle_athletics_teams<F: Fetch>(
    State(state): State<SharedState<F>>,
) -> Result<Json<Teams>, ApiError> {
    let teams = state.pipeline.athletics_teams().await?;

    info!("Served teams for {} seasons", teams.0.len());
    Ok(Json(teams))
}
