use const_format::concatcp;

pub mod error;
pub mod payloads;
pub mod response_errors;

pub const API_BASE_PATH: &str = "/api/";

/// Canonical route paths, shared between the router and anything that
/// needs to call it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    Ping,
    User,
    UserId,
    Exercise,
    Plan,
    PlanId,
    PlanImport,
    CalendarEvents,
    CalendarToggle,
    CalendarCompleted,
}

impl Object {
    pub const fn path(&self) -> &str {
        use Object::*;
        match self {
            Ping => concatcp!(API_BASE_PATH, "ping"),
            User => concatcp!(API_BASE_PATH, "user"),
            UserId => concatcp!(API_BASE_PATH, "user/:id"),
            Exercise => concatcp!(API_BASE_PATH, "exercise"),
            Plan => concatcp!(API_BASE_PATH, "plan"),
            PlanId => concatcp!(API_BASE_PATH, "plan/:id"),
            PlanImport => concatcp!(API_BASE_PATH, "plan/import"),
            CalendarEvents => concatcp!(API_BASE_PATH, "calendar/events"),
            CalendarToggle => concatcp!(API_BASE_PATH, "calendar/toggle"),
            CalendarCompleted => concatcp!(API_BASE_PATH, "calendar/completed"),
        }
    }
}
