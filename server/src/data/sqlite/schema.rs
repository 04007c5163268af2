//! SQLite schema definitions
//!
//! `SCHEMA` always describes the latest version; older databases are brought
//! forward by the incremental steps in `migrations`.

/// Current schema version
pub const SCHEMA_VERSION: i32 = 3;

/// Complete schema SQL
pub const SCHEMA: &str = r#"
-- =============================================================================
-- Infrastructure: Schema version tracking
-- =============================================================================
CREATE TABLE IF NOT EXISTS schema_version (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    version INTEGER NOT NULL,
    applied_at INTEGER NOT NULL,
    description TEXT
);

CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    applied_at INTEGER NOT NULL,
    checksum TEXT NOT NULL,
    execution_time_ms INTEGER,
    success INTEGER NOT NULL DEFAULT 1
);

-- =============================================================================
-- Jobs
-- =============================================================================
CREATE TABLE IF NOT EXISTS jobs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL CHECK(length(title) >= 1),
    company_name TEXT NOT NULL CHECK(length(company_name) >= 1),
    location TEXT NOT NULL,
    -- Unicode-lowercased copies for case-insensitive search (SQLite LOWER is ASCII-only)
    title_folded TEXT NOT NULL DEFAULT '',
    location_folded TEXT NOT NULL DEFAULT '',
    job_type TEXT NOT NULL CHECK(job_type IN ('Full-time', 'Part-time', 'Contract', 'Internship')),
    salary_range INTEGER NOT NULL CHECK(salary_range >= 0),
    description TEXT NOT NULL,
    application_deadline TEXT NOT NULL,
    created_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_jobs_created_at ON jobs(created_at DESC);
CREATE INDEX IF NOT EXISTS idx_jobs_type_salary ON jobs(job_type, salary_range);
"#;
