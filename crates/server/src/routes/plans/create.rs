use axum::Json;
use shared::{
    api::{error::ServerError, payloads::CreatePlanRequest, response_errors::PlanError},
    model::{Exercise, PlanDetails, ValidateModel, WorkoutPlan},
};
use tracing::instrument;

use crate::{db::DatabaseConnection, CurrentUser};

#[instrument(skip(conn))]
pub async fn create_plan(
    DatabaseConnection(conn): DatabaseConnection,
    CurrentUser(user): CurrentUser,
    Json(request): Json<CreatePlanRequest>,
) -> Result<Json<PlanDetails>, ServerError<PlanError>> {
    request.validate()?;

    let user_id = user.id;
    let details = conn
        .interact(move |conn| {
            let exercise = Exercise::fetch_by_id(conn, &request.exercise_id)?
                .ok_or(PlanError::ExerciseNotFound)?;

            let plan = WorkoutPlan::create(
                conn,
                &user_id,
                &exercise.id,
                request.reps,
                request.start_date,
                request.end_date,
                request.recurring_day,
            )?;

            Ok::<_, ServerError<PlanError>>(PlanDetails {
                plan,
                exercise_name: exercise.name,
                exercise_gif_url: exercise.gif_url,
            })
        })
        .await??;

    Ok(Json(details))
}
