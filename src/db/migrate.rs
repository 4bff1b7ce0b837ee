use rusqlite::{Connection, OptionalExtension, Result, params};

/// Ordered schema migrations: (version, description, SQL).
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20240404_0001_create_activities",
        "Created activities table",
        r#"
        CREATE TABLE IF NOT EXISTS activities (
            id                       INTEGER PRIMARY KEY AUTOINCREMENT,
            type                     TEXT NOT NULL CHECK(type IN ('DO','SBY','FLT','CI','CO','UNK')),
            occurred_at              TEXT NOT NULL,
            location                 CHAR(3) NOT NULL,
            "to"                     CHAR(3),
            scheduled_time_departure TEXT,
            scheduled_time_arrival   TEXT,
            created_at               TEXT NOT NULL
        );
        "#,
    ),
    (
        "20240404_0002_activities_indexes",
        "Added activities lookup indexes",
        r#"
        CREATE INDEX IF NOT EXISTS idx_activities_occurred_at ON activities(occurred_at);
        CREATE INDEX IF NOT EXISTS idx_activities_location ON activities(location);
        CREATE INDEX IF NOT EXISTS idx_activities_type ON activities(type);
        "#,
    ),
];

/// Ensure that the `log` table exists. Applied migrations are recorded there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Apply every migration not yet recorded in `log`. Returns the versions applied.
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();
    for (version, description, sql) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(sql)?;
        tx.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            params![version, description],
        )?;
        tx.commit()?;

        tracing::info!(version, "migration applied");
        applied.push(*version);
    }

    Ok(applied)
}

/// Versions of all known migrations, oldest first.
pub fn known_versions() -> Vec<&'static str> {
    MIGRATIONS.iter().map(|(v, _, _)| *v).collect()
}
