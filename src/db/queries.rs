use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::activity::{Activity, DATETIME_FORMAT};
use crate::models::activity_type::ActivityType;
use crate::models::airport::Airport;
use chrono::{Local, NaiveDate, NaiveDateTime};
use rusqlite::types::Type;
use rusqlite::{Connection, Result, Row, ToSql, params, params_from_iter};

/// Optional filters for [`find_activities`], combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityFilter {
    /// Inclusive, from the start of that day.
    pub occurred_from: Option<NaiveDate>,
    /// Inclusive, until the end of that day.
    pub occurred_to: Option<NaiveDate>,
    pub location: Option<Airport>,
    pub kind: Option<ActivityType>,
}

impl ActivityFilter {
    /// SQL WHERE clause (possibly empty) and its positional parameters.
    fn to_sql(&self) -> (String, Vec<String>) {
        let mut clauses = Vec::new();
        let mut values = Vec::new();

        if let Some(from) = self.occurred_from {
            clauses.push("occurred_at >= ?");
            values.push(format!("{} 00:00:00", from.format("%Y-%m-%d")));
        }
        if let Some(to) = self.occurred_to {
            clauses.push("occurred_at <= ?");
            values.push(format!("{} 23:59:59", to.format("%Y-%m-%d")));
        }
        if let Some(location) = &self.location {
            clauses.push("location = ?");
            values.push(location.code().to_string());
        }
        if let Some(kind) = self.kind {
            clauses.push("type = ?");
            values.push(kind.to_db_str().to_string());
        }

        if clauses.is_empty() {
            (String::new(), values)
        } else {
            (format!(" WHERE {}", clauses.join(" AND ")), values)
        }
    }
}

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, Type::Text, Box::new(err))
}

fn parse_datetime(col: usize, raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT)
        .map_err(|_| conversion_error(col, AppError::InvalidDate(raw.to_string())))
}

fn parse_airport(col: usize, raw: &str) -> Result<Airport> {
    Airport::new(raw).map_err(|e| conversion_error(col, e))
}

pub fn map_row(row: &Row) -> Result<Activity> {
    let kind_str: String = row.get("type")?;
    let kind = ActivityType::from_db_str(&kind_str)
        .ok_or_else(|| conversion_error(1, AppError::InvalidActivityType(kind_str.clone())))?;

    let occurred_at: String = row.get("occurred_at")?;
    let location: String = row.get("location")?;
    let to: Option<String> = row.get("to")?;
    let std: Option<String> = row.get("scheduled_time_departure")?;
    let sta: Option<String> = row.get("scheduled_time_arrival")?;

    Ok(Activity {
        id: Some(row.get("id")?),
        kind,
        location: parse_airport(3, &location)?,
        to: to.as_deref().map(|s| parse_airport(4, s)).transpose()?,
        occurred_at: parse_datetime(2, &occurred_at)?,
        scheduled_time_departure: std.as_deref().map(|s| parse_datetime(5, s)).transpose()?,
        scheduled_time_arrival: sta.as_deref().map(|s| parse_datetime(6, s)).transpose()?,
    })
}

fn format_opt(dt: Option<NaiveDateTime>) -> Option<String> {
    dt.map(|d| d.format(DATETIME_FORMAT).to_string())
}

pub fn insert_activity(conn: &Connection, a: &Activity, created_at: &str) -> AppResult<i64> {
    let mut stmt = conn.prepare_cached(
        r#"INSERT INTO activities
             (type, occurred_at, location, "to", scheduled_time_departure, scheduled_time_arrival, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"#,
    )?;

    stmt.execute(params![
        a.kind.to_db_str(),
        a.occurred_at_str(),
        a.location.code(),
        a.to.as_ref().map(|t| t.code().to_string()),
        format_opt(a.scheduled_time_departure),
        format_opt(a.scheduled_time_arrival),
        created_at,
    ])?;

    Ok(conn.last_insert_rowid())
}

/// Store all activities in a single transaction. Returns the new ids in input order.
pub fn save_activities(pool: &mut DbPool, activities: &[Activity]) -> AppResult<Vec<i64>> {
    let created_at = Local::now().to_rfc3339();
    let tx = pool.conn.transaction()?;

    let mut ids = Vec::with_capacity(activities.len());
    for a in activities {
        ids.push(insert_activity(&tx, a, &created_at)?);
    }

    tx.commit()?;
    Ok(ids)
}

pub fn find_activities(pool: &DbPool, filter: &ActivityFilter) -> AppResult<Vec<Activity>> {
    let (where_sql, values) = filter.to_sql();
    let sql = format!(
        r#"SELECT id, type, occurred_at, location, "to", scheduled_time_departure, scheduled_time_arrival
           FROM activities{where_sql}
           ORDER BY id ASC"#
    );

    let params: Vec<&dyn ToSql> = values.iter().map(|s| s as &dyn ToSql).collect();

    let mut stmt = pool.conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(params), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Number of stored activities per type, in [`ActivityType::ALL`] order.
pub fn count_by_type(pool: &DbPool) -> AppResult<Vec<(ActivityType, i64)>> {
    let mut stmt = pool
        .conn
        .prepare_cached("SELECT COUNT(*) FROM activities WHERE type = ?1")?;

    let mut out = Vec::with_capacity(ActivityType::ALL.len());
    for kind in ActivityType::ALL {
        let n: i64 = stmt.query_row([kind.to_db_str()], |row| row.get(0))?;
        out.push((kind, n));
    }
    Ok(out)
}
