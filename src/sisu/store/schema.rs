use rusqlite::Connection;

/// DDL applied on every open. Statements must stay idempotent.
pub const MIGRATIONS: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        tag TEXT,
        description TEXT,
        date_target DATE,
        date_start DATE,
        archived BOOLEAN NOT NULL DEFAULT 0
    )"#,
    r#"CREATE TABLE IF NOT EXISTS sessions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        task INTEGER NOT NULL,
        date DATE NOT NULL,
        duration_mins INTEGER,
        score_feedback INTEGER,
        notes TEXT,
        FOREIGN KEY (task) REFERENCES tasks(id)
    )"#,
    r#"CREATE TABLE IF NOT EXISTS milestones (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        task INTEGER NOT NULL,
        "type" TEXT,
        value INTEGER,
        achieved DATE,
        message TEXT,
        FOREIGN KEY (task) REFERENCES tasks(id)
    )"#,
    r#"CREATE TABLE IF NOT EXISTS reviews (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        task INTEGER NOT NULL,
        week INTEGER,
        summary TEXT,
        FOREIGN KEY (task) REFERENCES tasks(id)
    )"#,
    r#"CREATE TABLE IF NOT EXISTS coach (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        "trigger" TEXT NOT NULL,
        content TEXT NOT NULL,
        date DATE
    )"#,
    r#"CREATE TABLE IF NOT EXISTS calendar (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date DATE NOT NULL,
        note TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS config (
        key TEXT PRIMARY KEY,
        value TEXT
    )"#,
];

/// Connection settings applied on every open, before the DDL.
///
/// The `FOREIGN KEY` clauses document the relations only. Enforcement is off,
/// so removing a task keeps its sessions, milestones and reviews, and records
/// may point at a task id that does not exist.
pub fn configure(conn: &Connection) -> rusqlite::Result<()> {
    conn.pragma_update(None, "foreign_keys", false)
}

/// Runs every statement in order, stopping at the first failure.
pub fn apply(conn: &Connection) -> rusqlite::Result<()> {
    for stmt in MIGRATIONS {
        conn.execute(stmt, [])?;
    }
    log::debug!("schema applied ({} statements)", MIGRATIONS.len());
    Ok(())
}
