//! PostgreSQL schema definitions
//!
//! Mirrors the SQLite schema. `SCHEMA` always describes the latest version.

/// Current schema version
pub const SCHEMA_VERSION: i32 = 2;

/// Complete schema SQL for PostgreSQL
pub const SCHEMA: &str = r#"
-- =============================================================================
-- Infrastructure: Schema version tracking
-- =============================================================================
CREATE TABLE IF NOT EXISTS schema_version (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    version INTEGER NOT NULL,
    applied_at BIGINT NOT NULL,
    description TEXT
);

CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    applied_at BIGINT NOT NULL,
    checksum TEXT NOT NULL,
    execution_time_ms BIGINT,
    success BOOLEAN NOT NULL DEFAULT TRUE
);

-- =============================================================================
-- Jobs
-- =============================================================================
CREATE TABLE IF NOT EXISTS jobs (
    id BIGSERIAL PRIMARY KEY,
    title TEXT NOT NULL CHECK(length(title) >= 1),
    company_name TEXT NOT NULL CHECK(length(company_name) >= 1),
    location TEXT NOT NULL,
    job_type TEXT NOT NULL CHECK(job_type IN ('Full-time', 'Part-time', 'Contract', 'Internship')),
    salary_range BIGINT NOT NULL CHECK(salary_range >= 0),
    description TEXT NOT NULL,
    application_deadline TEXT NOT NULL,
    created_at BIGINT NOT NULL,
    updated_at BIGINT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_jobs_created_at ON jobs(created_at DESC);
CREATE INDEX IF NOT EXISTS idx_jobs_type_salary ON jobs(job_type, salary_range);
"#;
