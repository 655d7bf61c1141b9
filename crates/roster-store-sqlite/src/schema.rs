//! SQL schema for the Roster SQLite store.
//!
//! Every collection has the same shape: an `AUTOINCREMENT` sequence column
//! that fixes insertion order and is never reused, the record id, and the
//! record itself as a JSON document.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS employees (
    seq  INTEGER PRIMARY KEY AUTOINCREMENT,
    id   TEXT NOT NULL UNIQUE,
    doc  TEXT NOT NULL          -- JSON-encoded Employee
);

-- Written only by the department owner (server seeding); read by the
-- relation resolver.
CREATE TABLE IF NOT EXISTS departments (
    seq  INTEGER PRIMARY KEY AUTOINCREMENT,
    id   TEXT NOT NULL UNIQUE,
    doc  TEXT NOT NULL          -- JSON-encoded Department
);

PRAGMA user_version = 1;
";
