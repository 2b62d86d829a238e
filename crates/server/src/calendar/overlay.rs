use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use shared::{
    api::payloads::{occurrence_color, CalendarEvent},
    model::PlanDetails,
    types::Uuid,
};

use super::occurrences;

/// Expands every plan and joins the result against the user's logged
/// completions, producing one flat event list grouped by ascending date.
/// Within a date, events keep the order their plans were passed in.
///
/// `completed` is the `(plan_id, date)` set built fresh from the log for
/// this call; nothing here is cached between requests
pub fn overlay_completions(
    plans: &[PlanDetails],
    completed: &HashSet<(Uuid, NaiveDate)>,
    horizon: NaiveDate,
) -> Vec<CalendarEvent> {
    let mut events_by_date: BTreeMap<NaiveDate, Vec<CalendarEvent>> = BTreeMap::new();

    for details in plans {
        let plan = &details.plan;
        for date in occurrences(plan.start_date, plan.end_date, plan.recurring_day, horizon) {
            let done = completed.contains(&(plan.id, date));
            events_by_date.entry(date).or_default().push(CalendarEvent {
                id: plan.id,
                title: details.exercise_name.clone(),
                gif_url: details.exercise_gif_url.clone(),
                date,
                color: occurrence_color(done).to_string(),
                completed: done,
            });
        }
    }

    events_by_date.into_values().flatten().collect()
}
