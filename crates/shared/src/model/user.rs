use chrono::{DateTime, Utc};
use exemplar::Model;
use rusqlite::{Connection, OptionalExtension};
use sea_query::{enum_def, Expr, Query, SqliteQueryBuilder};
use sea_query_rusqlite::RusqliteBinder;
use serde::{Deserialize, Serialize};

use crate::types::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Model)]
#[table("user")]
#[check("../../../server/migrations/001-user/up.sql")]
#[enum_def]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
    pub creation_date: DateTime<Utc>,
    pub last_updated_date: DateTime<Utc>,
}

impl User {
    pub fn fetch_by_id(conn: &Connection, id: &Uuid) -> Result<Option<User>, rusqlite::Error> {
        let (sql, values) = Query::select()
            .columns([
                UserIden::Id,
                UserIden::Username,
                UserIden::DisplayName,
                UserIden::CreationDate,
                UserIden::LastUpdatedDate,
            ])
            .from(UserIden::Table)
            .and_where(Expr::col(UserIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let user = stmt.query_row(&*values.as_params(), User::from_row).optional()?;
        Ok(user)
    }

    pub fn fetch_by_username<T: AsRef<str>>(
        conn: &Connection,
        username: T,
    ) -> Result<Option<User>, rusqlite::Error> {
        let (sql, values) = Query::select()
            .columns([
                UserIden::Id,
                UserIden::Username,
                UserIden::DisplayName,
                UserIden::CreationDate,
                UserIden::LastUpdatedDate,
            ])
            .from(UserIden::Table)
            .and_where(Expr::col(UserIden::Username).eq(username.as_ref()))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let user = stmt.query_row(&*values.as_params(), User::from_row).optional()?;
        Ok(user)
    }

    pub fn create(
        conn: &Connection,
        username: String,
        display_name: Option<String>,
    ) -> Result<User, rusqlite::Error> {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username,
            display_name,
            creation_date: now,
            last_updated_date: now,
        };
        user.insert(conn)?;
        Ok(user)
    }
}
