mod uuid;
pub use uuid::*;

mod recurring_day;
pub use recurring_day::*;
