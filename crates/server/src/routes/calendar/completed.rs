use axum::Json;
use shared::{
    api::{error::ServerError, payloads::CompletedWorkout, response_errors::FetchError},
    model::WorkoutLog,
};
use tracing::instrument;

use crate::{db::DatabaseConnection, CurrentUser};

/// The user's completion history, newest first
#[instrument(skip(conn))]
pub async fn completed_workouts(
    DatabaseConnection(conn): DatabaseConnection,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<CompletedWorkout>>, ServerError<FetchError>> {
    let user_id = user.id;
    let history = conn
        .interact(move |conn| WorkoutLog::fetch_history_for_user(conn, &user_id))
        .await??;

    let history = history
        .into_iter()
        .map(|(title, date_completed)| CompletedWorkout { title, date_completed })
        .collect();

    Ok(Json(history))
}
