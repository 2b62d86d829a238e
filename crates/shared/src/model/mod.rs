mod user;
pub use user::*;

mod exercise;
pub use exercise::*;

mod workout_plan;
pub use workout_plan::*;

mod workout_log;
pub use workout_log::*;

use crate::api::error::ValidationError;

pub trait ValidateModel {
    fn validate(&self) -> Result<(), ValidationError>;
}
