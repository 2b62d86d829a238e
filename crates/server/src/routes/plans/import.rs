use axum::Json;
use shared::{
    api::{
        error::ServerError,
        payloads::{ImportPlanRequest, ImportPlanResponse},
        response_errors::ImportError,
    },
    model::{Exercise, WorkoutPlan},
    types::RecurringDay,
};
use tracing::{instrument, warn};

use crate::{db::DatabaseConnection, plan_parser::parse_plan, CurrentUser};

/// Turns generated plan text into concrete single-day plans: each day
/// heading maps onto its date in the week starting at `week_start`, and
/// every exercise under it becomes a plan with `start == end` on that
/// date. Days that don't parse are skipped rather than failing the batch
#[instrument(skip(conn, request))]
pub async fn import_plan(
    DatabaseConnection(conn): DatabaseConnection,
    CurrentUser(user): CurrentUser,
    Json(request): Json<ImportPlanRequest>,
) -> Result<Json<ImportPlanResponse>, ServerError<ImportError>> {
    if request.plan_text.trim().is_empty() {
        Err(ImportError::EmptyPlan)?;
    }

    let user_id = user.id;
    let response = conn
        .interact(move |conn| {
            let sections = parse_plan(&request.plan_text);
            let mut created = Vec::new();
            let mut saved_days = Vec::new();

            for section in sections {
                let Some(day) = RecurringDay::from_day_name(&section.day) else {
                    warn!(day = %section.day, "Skipping unknown day name in imported plan");
                    continue;
                };
                let date = day.first_on_or_after(request.week_start);

                for exercise in &section.exercises {
                    let row = Exercise::fetch_or_create_by_name(
                        conn,
                        &exercise.name,
                        Some(format!("AI-generated workout for {}", section.day)),
                    )?;
                    let plan = WorkoutPlan::create(
                        conn,
                        &user_id,
                        &row.id,
                        exercise.reps,
                        date,
                        Some(date),
                        day,
                    )?;
                    created.push(plan.id);
                }

                saved_days.push(section.day);
            }

            Ok::<_, ServerError<ImportError>>(ImportPlanResponse { created, saved_days })
        })
        .await??;

    Ok(Json(response))
}
