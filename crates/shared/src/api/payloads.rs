use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    api::error::ValidationError,
    model::ValidateModel,
    types::{RecurringDay, Uuid},
};

pub const COMPLETED_COLOR: &str = "#28A745";
pub const SCHEDULED_COLOR: &str = "#007BFF";

/// Presentation colour for an occurrence. Two states only: done and not done
pub fn occurrence_color(completed: bool) -> &'static str {
    if completed {
        COMPLETED_COLOR
    } else {
        SCHEDULED_COLOR
    }
}

/// One concrete calendar date produced by expanding a plan's recurrence,
/// annotated with whether a completion has been logged for it. Derived on
/// every read, never persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Id of the plan this occurrence was expanded from
    pub id: Uuid,
    pub title: String,
    pub gif_url: Option<String>,
    pub date: NaiveDate,
    pub color: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarmUp {
    pub name: String,
    #[serde(default)]
    pub muscle: Option<String>,
    #[serde(default)]
    pub equipment: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarResponse {
    pub events: Vec<CalendarEvent>,
    /// Best effort decoration; empty whenever the upstream fetch fails
    pub warm_ups: Vec<WarmUp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleRequest {
    pub plan_id: Uuid,
    pub date_completed: NaiveDate,
    pub completed: bool,
}

/// Echo of the state the toggle left behind, for client side confirmation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub plan_id: Uuid,
    pub date_completed: NaiveDate,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedWorkout {
    pub title: String,
    pub date_completed: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePlanRequest {
    pub exercise_id: Uuid,
    pub reps: u32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub recurring_day: RecurringDay,
}

impl ValidateModel for CreatePlanRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut error_messages = Vec::new();
        if let Some(end_date) = self.end_date {
            if end_date < self.start_date {
                error_messages.push(format!(
                    "end_date {} is before start_date {}",
                    end_date, self.start_date
                ));
            }
        }
        if error_messages.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { error_messages })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportPlanRequest {
    /// First day of the week the plan text's day names map onto
    pub week_start: NaiveDate,
    pub plan_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportPlanResponse {
    pub created: Vec<Uuid>,
    pub saved_days: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub display_name: Option<String>,
}

impl ValidateModel for CreateUserRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() {
            Err(ValidationError {
                error_messages: vec!["username must not be empty".to_string()],
            })
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExerciseRequest {
    pub name: String,
    pub description: Option<String>,
    pub gif_url: Option<String>,
}

impl ValidateModel for CreateExerciseRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            Err(ValidationError {
                error_messages: vec!["name must not be empty".to_string()],
            })
        } else {
            Ok(())
        }
    }
}
