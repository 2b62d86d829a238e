use axum::Json;
use shared::{
    api::{
        error::ServerError,
        payloads::{ToggleRequest, ToggleResponse},
        response_errors::ToggleError,
    },
    model::{WorkoutLog, WorkoutPlan},
};
use tracing::instrument;

use crate::{db::DatabaseConnection, CurrentUser};

/// Marks or unmarks one occurrence of a plan as completed. Both directions
/// are idempotent: marking twice keeps a single log row, unmarking an
/// already unmarked occurrence deletes nothing and succeeds
#[instrument(skip(conn))]
pub async fn toggle_completion(
    DatabaseConnection(conn): DatabaseConnection,
    CurrentUser(user): CurrentUser,
    Json(request): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, ServerError<ToggleError>> {
    let user_id = user.id;
    let response = conn
        .interact(move |conn| {
            // Ownership gate; somebody else's plan id looks exactly like a
            // missing one from here
            let plan = WorkoutPlan::fetch_by_id_for_user(conn, &request.plan_id, &user_id)?
                .ok_or(ToggleError::PlanNotFound)?;

            if request.completed {
                WorkoutLog::mark_completed(conn, &user_id, &plan.id, request.date_completed)?;
            } else {
                WorkoutLog::unmark(conn, &user_id, &plan.id, request.date_completed)?;
            }

            Ok::<_, ServerError<ToggleError>>(ToggleResponse {
                plan_id: plan.id,
                date_completed: request.date_completed,
                completed: request.completed,
            })
        })
        .await??;

    Ok(Json(response))
}
