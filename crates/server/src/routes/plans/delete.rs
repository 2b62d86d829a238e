use axum::{extract::Path, http::StatusCode};
use shared::{
    api::{error::ServerError, response_errors::PlanError},
    model::WorkoutPlan,
    types::Uuid,
};
use tracing::instrument;

use crate::{db::DatabaseConnection, CurrentUser};

/// Deletes a plan the caller owns. The schema cascades the delete to any
/// completion logs pointing at it
#[instrument(skip(conn))]
pub async fn delete_plan(
    DatabaseConnection(conn): DatabaseConnection,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError<PlanError>> {
    let user_id = user.id;
    let deleted = conn
        .interact(move |conn| WorkoutPlan::delete_for_user(conn, &id, &user_id))
        .await??;

    if !deleted {
        Err(PlanError::NotFound)?;
    }

    Ok(StatusCode::NO_CONTENT)
}
