use axum::{
    routing::{delete, get, post},
    Router,
};
use shared::api::Object;

use crate::AppState;

pub mod calendar;
pub mod plans;

mod ping;
pub use ping::*;

mod users;
pub use users::*;

mod exercises;
pub use exercises::*;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(Object::Ping.path(), get(ping))
        .route(Object::User.path(), post(create_user))
        .route(Object::UserId.path(), get(fetch_user))
        .route(Object::Exercise.path(), get(list_exercises).post(create_exercise))
        .route(Object::Plan.path(), get(plans::list_plans).post(plans::create_plan))
        .route(Object::PlanId.path(), delete(plans::delete_plan))
        .route(Object::PlanImport.path(), post(plans::import_plan))
        .route(Object::CalendarEvents.path(), get(calendar::calendar_events))
        .route(Object::CalendarToggle.path(), post(calendar::toggle_completion))
        .route(Object::CalendarCompleted.path(), get(calendar::completed_workouts))
        .with_state(state)
}
