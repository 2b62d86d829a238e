use axum::Json;
use shared::{
    api::{error::ServerError, payloads::CreateExerciseRequest, response_errors::{ExerciseError, FetchError}},
    model::{Exercise, ValidateModel},
};
use tracing::instrument;

use crate::{db::DatabaseConnection, CurrentUser};

#[instrument(skip(conn, _user))]
pub async fn list_exercises(
    DatabaseConnection(conn): DatabaseConnection,
    _user: CurrentUser,
) -> Result<Json<Vec<Exercise>>, ServerError<FetchError>> {
    let exercises = conn.interact(|conn| Exercise::fetch_all(conn)).await??;
    Ok(Json(exercises))
}

#[instrument(skip(conn, _user))]
pub async fn create_exercise(
    DatabaseConnection(conn): DatabaseConnection,
    _user: CurrentUser,
    Json(request): Json<CreateExerciseRequest>,
) -> Result<Json<Exercise>, ServerError<ExerciseError>> {
    request.validate()?;

    let exercise = conn
        .interact(move |conn| {
            if Exercise::fetch_by_name(conn, &request.name)?.is_some() {
                Err(ExerciseError::NameTaken)?;
            }
            let exercise =
                Exercise::create(conn, request.name, request.description, request.gif_url)?;
            Ok::<_, ServerError<ExerciseError>>(exercise)
        })
        .await??;

    Ok(Json(exercise))
}
