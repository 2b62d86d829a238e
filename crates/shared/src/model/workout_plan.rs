use chrono::{DateTime, NaiveDate, Utc};
use exemplar::Model;
use rusqlite::{Connection, OptionalExtension};
use sea_query::{enum_def, Expr, Order, Query, SqliteQueryBuilder};
use sea_query_rusqlite::RusqliteBinder;
use serde::{Deserialize, Serialize};

use super::ExerciseIden;
use crate::types::{RecurringDay, Uuid};

/// A scheduled exercise for one user: a weekly recurrence between
/// `start_date` and `end_date` (open ended when `end_date` is null).
/// Imported single-day workouts set `start_date == end_date`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Model)]
#[table("workout_plan")]
#[check("../../../server/migrations/003-workout_plan/up.sql")]
#[enum_def]
pub struct WorkoutPlan {
    pub id: Uuid,
    pub user_id: Uuid,
    pub exercise_id: Uuid,
    pub reps: u32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub recurring_day: RecurringDay,
    pub creation_date: DateTime<Utc>,
    pub last_updated_date: DateTime<Utc>,
}

/// A plan joined with the exercise fields the calendar needs for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDetails {
    #[serde(flatten)]
    pub plan: WorkoutPlan,
    pub exercise_name: String,
    pub exercise_gif_url: Option<String>,
}

impl WorkoutPlan {
    fn select_columns() -> [WorkoutPlanIden; 9] {
        [
            WorkoutPlanIden::Id,
            WorkoutPlanIden::UserId,
            WorkoutPlanIden::ExerciseId,
            WorkoutPlanIden::Reps,
            WorkoutPlanIden::StartDate,
            WorkoutPlanIden::EndDate,
            WorkoutPlanIden::RecurringDay,
            WorkoutPlanIden::CreationDate,
            WorkoutPlanIden::LastUpdatedDate,
        ]
    }

    pub fn create(
        conn: &Connection,
        user_id: &Uuid,
        exercise_id: &Uuid,
        reps: u32,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        recurring_day: RecurringDay,
    ) -> Result<WorkoutPlan, rusqlite::Error> {
        let now = Utc::now();
        let plan = WorkoutPlan {
            id: Uuid::new_v4(),
            user_id: *user_id,
            exercise_id: *exercise_id,
            reps,
            start_date,
            end_date,
            recurring_day,
            creation_date: now,
            last_updated_date: now,
        };
        plan.insert(conn)?;
        Ok(plan)
    }

    /// Scoped by owner so a plan belonging to someone else is
    /// indistinguishable from a missing one
    pub fn fetch_by_id_for_user(
        conn: &Connection,
        id: &Uuid,
        user_id: &Uuid,
    ) -> Result<Option<WorkoutPlan>, rusqlite::Error> {
        let (sql, values) = Query::select()
            .columns(Self::select_columns())
            .from(WorkoutPlanIden::Table)
            .and_where(Expr::col(WorkoutPlanIden::Id).eq(id))
            .and_where(Expr::col(WorkoutPlanIden::UserId).eq(user_id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let plan = stmt.query_row(&*values.as_params(), WorkoutPlan::from_row).optional()?;
        Ok(plan)
    }

    pub fn fetch_all_for_user(
        conn: &Connection,
        user_id: &Uuid,
    ) -> Result<Vec<WorkoutPlan>, rusqlite::Error> {
        let (sql, values) = Query::select()
            .columns(Self::select_columns())
            .from(WorkoutPlanIden::Table)
            .and_where(Expr::col(WorkoutPlanIden::UserId).eq(user_id))
            .order_by(WorkoutPlanIden::CreationDate, Order::Asc)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_map(&*values.as_params(), WorkoutPlan::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(res)
    }

    /// All of a user's plans joined with exercise name and media, in
    /// creation order (which is what within-day calendar ordering
    /// falls back to)
    pub fn fetch_details_for_user(
        conn: &Connection,
        user_id: &Uuid,
    ) -> Result<Vec<PlanDetails>, rusqlite::Error> {
        let (sql, values) = Query::select()
            .columns(
                Self::select_columns()
                    .map(|col| (WorkoutPlanIden::Table, col)),
            )
            .columns([
                (ExerciseIden::Table, ExerciseIden::Name),
                (ExerciseIden::Table, ExerciseIden::GifUrl),
            ])
            .from(WorkoutPlanIden::Table)
            .inner_join(
                ExerciseIden::Table,
                Expr::col((ExerciseIden::Table, ExerciseIden::Id))
                    .equals((WorkoutPlanIden::Table, WorkoutPlanIden::ExerciseId)),
            )
            .and_where(Expr::col((WorkoutPlanIden::Table, WorkoutPlanIden::UserId)).eq(user_id))
            .order_by(
                (WorkoutPlanIden::Table, WorkoutPlanIden::CreationDate),
                Order::Asc,
            )
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_map(&*values.as_params(), |row| {
                Ok(PlanDetails {
                    plan: WorkoutPlan {
                        id: row.get(0)?,
                        user_id: row.get(1)?,
                        exercise_id: row.get(2)?,
                        reps: row.get(3)?,
                        start_date: row.get(4)?,
                        end_date: row.get(5)?,
                        recurring_day: row.get(6)?,
                        creation_date: row.get(7)?,
                        last_updated_date: row.get(8)?,
                    },
                    exercise_name: row.get(9)?,
                    exercise_gif_url: row.get(10)?,
                })
            })?
            .collect::<Result<_, _>>()?;
        Ok(res)
    }

    /// Returns whether a row was deleted. Completion logs go with it via
    /// the foreign key cascade
    pub fn delete_for_user(
        conn: &Connection,
        id: &Uuid,
        user_id: &Uuid,
    ) -> Result<bool, rusqlite::Error> {
        let (sql, values) = Query::delete()
            .from_table(WorkoutPlanIden::Table)
            .and_where(Expr::col(WorkoutPlanIden::Id).eq(id))
            .and_where(Expr::col(WorkoutPlanIden::UserId).eq(user_id))
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let deleted = stmt.execute(&*values.as_params())?;
        Ok(deleted > 0)
    }
}
