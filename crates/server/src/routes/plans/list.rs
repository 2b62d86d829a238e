use axum::Json;
use shared::{
    api::{error::ServerError, response_errors::FetchError},
    model::{PlanDetails, WorkoutPlan},
};
use tracing::instrument;

use crate::{db::DatabaseConnection, CurrentUser};

#[instrument(skip(conn))]
pub async fn list_plans(
    DatabaseConnection(conn): DatabaseConnection,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<PlanDetails>>, ServerError<FetchError>> {
    let user_id = user.id;
    let plans = conn
        .interact(move |conn| WorkoutPlan::fetch_details_for_user(conn, &user_id))
        .await??;

    Ok(Json(plans))
}
