//! SQL schema for the intake SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Submissions are insert-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS submissions (
    id          TEXT PRIMARY KEY,
    first_name  TEXT NOT NULL,
    last_name   TEXT NOT NULL,
    email       TEXT NOT NULL,
    message     TEXT NOT NULL,
    created_at  TEXT NOT NULL,   -- ISO 8601 UTC; store-assigned
    read        INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS submissions_created_idx ON submissions(created_at);

PRAGMA user_version = 1;
";
