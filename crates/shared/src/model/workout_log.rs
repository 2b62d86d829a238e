use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use exemplar::{Model, OnConflict};
use rusqlite::Connection;
use sea_query::{enum_def, Expr, Order, Query, SqliteQueryBuilder};
use sea_query_rusqlite::RusqliteBinder;
use serde::{Deserialize, Serialize};

use super::{ExerciseIden, WorkoutPlanIden};
use crate::types::Uuid;

/// One logged completion of a plan occurrence on a specific date.
/// `(user_id, plan_id, date_completed)` is unique at the schema level,
/// which is what makes concurrent toggles collapse into one row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Model)]
#[table("workout_log")]
#[check("../../../server/migrations/004-workout_log/up.sql")]
#[enum_def]
pub struct WorkoutLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub plan_id: Uuid,
    pub date_completed: NaiveDate,
    pub creation_date: DateTime<Utc>,
}

impl WorkoutLog {
    /// Idempotent mark-complete. The insert is OR IGNORE against the
    /// unique index, so repeated or racing marks leave exactly one row
    pub fn mark_completed(
        conn: &Connection,
        user_id: &Uuid,
        plan_id: &Uuid,
        date_completed: NaiveDate,
    ) -> Result<(), rusqlite::Error> {
        let log = WorkoutLog {
            id: Uuid::new_v4(),
            user_id: *user_id,
            plan_id: *plan_id,
            date_completed,
            creation_date: Utc::now(),
        };
        log.insert_or(conn, OnConflict::Ignore)?;
        Ok(())
    }

    /// Idempotent unmark. Removing an already absent completion deletes
    /// zero rows and is not an error
    pub fn unmark(
        conn: &Connection,
        user_id: &Uuid,
        plan_id: &Uuid,
        date_completed: NaiveDate,
    ) -> Result<usize, rusqlite::Error> {
        let (sql, values) = Query::delete()
            .from_table(WorkoutLogIden::Table)
            .and_where(Expr::col(WorkoutLogIden::UserId).eq(user_id))
            .and_where(Expr::col(WorkoutLogIden::PlanId).eq(plan_id))
            .and_where(Expr::col(WorkoutLogIden::DateCompleted).eq(date_completed))
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        stmt.execute(&*values.as_params())
    }

    /// The user's full completion set as `(plan_id, date)` pairs for O(1)
    /// membership tests while expanding occurrences. Recomputed on every
    /// call; completions change between requests
    pub fn completed_pairs_for_user(
        conn: &Connection,
        user_id: &Uuid,
    ) -> Result<HashSet<(Uuid, NaiveDate)>, rusqlite::Error> {
        let (sql, values) = Query::select()
            .columns([WorkoutLogIden::PlanId, WorkoutLogIden::DateCompleted])
            .from(WorkoutLogIden::Table)
            .and_where(Expr::col(WorkoutLogIden::UserId).eq(user_id))
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_map(&*values.as_params(), |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<_, _>>()?;
        Ok(res)
    }

    /// Completion history joined with exercise names, newest first
    pub fn fetch_history_for_user(
        conn: &Connection,
        user_id: &Uuid,
    ) -> Result<Vec<(String, NaiveDate)>, rusqlite::Error> {
        let (sql, values) = Query::select()
            .column((ExerciseIden::Table, ExerciseIden::Name))
            .column((WorkoutLogIden::Table, WorkoutLogIden::DateCompleted))
            .from(WorkoutLogIden::Table)
            .inner_join(
                WorkoutPlanIden::Table,
                Expr::col((WorkoutPlanIden::Table, WorkoutPlanIden::Id))
                    .equals((WorkoutLogIden::Table, WorkoutLogIden::PlanId)),
            )
            .inner_join(
                ExerciseIden::Table,
                Expr::col((ExerciseIden::Table, ExerciseIden::Id))
                    .equals((WorkoutPlanIden::Table, WorkoutPlanIden::ExerciseId)),
            )
            .and_where(Expr::col((WorkoutLogIden::Table, WorkoutLogIden::UserId)).eq(user_id))
            .order_by(
                (WorkoutLogIden::Table, WorkoutLogIden::DateCompleted),
                Order::Desc,
            )
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_map(&*values.as_params(), |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<_, _>>()?;
        Ok(res)
    }
}
