use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use shared::{
    api::{error::ServerError, payloads::CalendarResponse, response_errors::FetchError},
    model::{WorkoutLog, WorkoutPlan},
};
use tracing::instrument;

use crate::{calendar::overlay_completions, db::DatabaseConnection, warmups::WarmUpClient, CurrentUser};

#[derive(Debug, Clone, Deserialize)]
pub struct EventsQuery {
    /// Upper bound for expanding open ended plans. Defaults to today, so
    /// without it the calendar shows nothing scheduled past the present
    /// for plans that have no end date
    pub until: Option<NaiveDate>,
}

#[instrument(skip(conn, warm_ups))]
pub async fn calendar_events(
    DatabaseConnection(conn): DatabaseConnection,
    CurrentUser(user): CurrentUser,
    State(warm_ups): State<WarmUpClient>,
    Query(query): Query<EventsQuery>,
) -> Result<Json<CalendarResponse>, ServerError<FetchError>> {
    let horizon = query.until.unwrap_or_else(|| Utc::now().date_naive());

    let user_id = user.id;
    let (plans, completed) = conn
        .interact(move |conn| {
            let plans = WorkoutPlan::fetch_details_for_user(conn, &user_id)?;
            let completed = WorkoutLog::completed_pairs_for_user(conn, &user_id)?;
            Ok::<_, ServerError<FetchError>>((plans, completed))
        })
        .await??;

    let events = overlay_completions(&plans, &completed, horizon);
    let warm_ups = warm_ups.fetch_or_empty().await;

    Ok(Json(CalendarResponse { events, warm_ups }))
}
