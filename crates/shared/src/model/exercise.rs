use chrono::{DateTime, Utc};
use exemplar::Model;
use rand::{distributions::Alphanumeric, Rng};
use rusqlite::{Connection, OptionalExtension};
use sea_query::{enum_def, Expr, Order, Query, SqliteQueryBuilder};
use sea_query_rusqlite::RusqliteBinder;
use serde::{Deserialize, Serialize};

use crate::types::Uuid;

/// A single type of exercise. Global catalog, not user scoped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Model)]
#[table("exercise")]
#[check("../../../server/migrations/002-exercise/up.sql")]
#[enum_def]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub gif_url: Option<String>,
    pub creation_date: DateTime<Utc>,
    pub last_updated_date: DateTime<Utc>,
}

/// Lowercased, dash separated name with a random suffix so near-identical
/// names imported from plan text still get unique slugs
fn slugify(name: &str) -> String {
    let base = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>();
    let base = base.trim_matches('-');

    let suffix = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(4)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect::<String>();

    format!("{base}-{suffix}")
}

impl Exercise {
    fn select_columns() -> [ExerciseIden; 7] {
        [
            ExerciseIden::Id,
            ExerciseIden::Name,
            ExerciseIden::Slug,
            ExerciseIden::Description,
            ExerciseIden::GifUrl,
            ExerciseIden::CreationDate,
            ExerciseIden::LastUpdatedDate,
        ]
    }

    pub fn fetch_by_id(conn: &Connection, id: &Uuid) -> Result<Option<Exercise>, rusqlite::Error> {
        let (sql, values) = Query::select()
            .columns(Self::select_columns())
            .from(ExerciseIden::Table)
            .and_where(Expr::col(ExerciseIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let exercise = stmt.query_row(&*values.as_params(), Exercise::from_row).optional()?;
        Ok(exercise)
    }

    pub fn fetch_by_name<T: AsRef<str>>(
        conn: &Connection,
        name: T,
    ) -> Result<Option<Exercise>, rusqlite::Error> {
        let (sql, values) = Query::select()
            .columns(Self::select_columns())
            .from(ExerciseIden::Table)
            .and_where(Expr::col(ExerciseIden::Name).eq(name.as_ref()))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let exercise = stmt.query_row(&*values.as_params(), Exercise::from_row).optional()?;
        Ok(exercise)
    }

    pub fn fetch_all(conn: &Connection) -> Result<Vec<Exercise>, rusqlite::Error> {
        let (sql, values) = Query::select()
            .columns(Self::select_columns())
            .from(ExerciseIden::Table)
            .order_by(ExerciseIden::Name, Order::Asc)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_map(&*values.as_params(), Exercise::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(res)
    }

    pub fn create(
        conn: &Connection,
        name: String,
        description: Option<String>,
        gif_url: Option<String>,
    ) -> Result<Exercise, rusqlite::Error> {
        let now = Utc::now();
        let exercise = Exercise {
            id: Uuid::new_v4(),
            slug: slugify(&name),
            name,
            description,
            gif_url,
            creation_date: now,
            last_updated_date: now,
        };
        exercise.insert(conn)?;
        Ok(exercise)
    }

    /// Reuse an existing exercise with this exact name or create one.
    /// Imported plan text refers to exercises by name only
    pub fn fetch_or_create_by_name(
        conn: &Connection,
        name: &str,
        description: Option<String>,
    ) -> Result<Exercise, rusqlite::Error> {
        match Self::fetch_by_name(conn, name)? {
            Some(exercise) => Ok(exercise),
            None => Self::create(conn, name.to_string(), description, None),
        }
    }
}
