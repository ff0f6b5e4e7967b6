//! Maintenance operations run outside the request path
//!
//! Sample data seeding and a read-only integrity check, both driven by the
//! `directory-admin` binary.

use serde::Serialize;
use shared::models::{Employee, EmployeeFields};
use sqlx::SqlitePool;

use super::repository::{RepoResult, employee};

/// The five demo employees
pub fn sample_employees() -> Vec<EmployeeFields> {
    vec![
        EmployeeFields::new("John Doe", "john.doe@company.com", "Software Engineer"),
        EmployeeFields::new("Jane Smith", "jane.smith@company.com", "Product Manager"),
        EmployeeFields::new("Mike Johnson", "mike.johnson@company.com", "UX Designer"),
        EmployeeFields::new("Sarah Wilson", "sarah.wilson@company.com", "Data Analyst"),
        EmployeeFields::new("David Brown", "david.brown@company.com", "DevOps Engineer"),
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
    /// Rows present before seeding
    pub existing: i64,
    pub inserted: Vec<Employee>,
    /// Rows present after seeding
    pub total: i64,
}

/// Insert [`sample_employees`], even when the table already has rows
pub async fn seed_sample_data(pool: &SqlitePool) -> RepoResult<SeedReport> {
    let existing = employee::count(pool).await?;
    if existing > 0 {
        tracing::warn!(existing, "Database already contains employee records, adding samples anyway");
    }

    let mut inserted = Vec::new();
    for fields in sample_employees() {
        let created = employee::create(pool, fields).await?;
        tracing::info!(id = created.id, name = %created.name, "Added sample employee");
        inserted.push(created);
    }

    let total = employee::count(pool).await?;
    tracing::info!(inserted = inserted.len(), total, "Sample data added");

    Ok(SeedReport {
        existing,
        inserted,
        total,
    })
}

/// One column of the employees table, as reported by `PRAGMA table_info`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ColumnInfo {
    pub name: String,
    pub column_type: String,
    pub not_null: bool,
    pub primary_key: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct IntegrityReport {
    pub table_exists: bool,
    pub columns: Vec<ColumnInfo>,
    /// All rows ordered by id
    pub rows: Vec<Employee>,
    /// Ids of rows with an empty name, email or position
    pub incomplete: Vec<i64>,
}

impl IntegrityReport {
    pub fn is_healthy(&self) -> bool {
        self.table_exists && self.incomplete.is_empty()
    }
}

/// Inspect the table without modifying anything
pub async fn check_integrity(pool: &SqlitePool) -> RepoResult<IntegrityReport> {
    let table_exists = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'employees'",
    )
    .fetch_one(pool)
    .await?
        > 0;

    if !table_exists {
        return Ok(IntegrityReport {
            table_exists,
            columns: Vec::new(),
            rows: Vec::new(),
            incomplete: Vec::new(),
        });
    }

    let columns = sqlx::query_as::<_, ColumnInfo>(
        r#"SELECT name,
                  type AS column_type,
                  "notnull" <> 0 AS not_null,
                  pk > 0 AS primary_key
           FROM pragma_table_info('employees')
           ORDER BY cid"#,
    )
    .fetch_all(pool)
    .await?;

    let rows = employee::find_all(pool).await?;
    let incomplete = rows
        .iter()
        .filter(|e| e.name.is_empty() || e.email.is_empty() || e.position.is_empty())
        .map(|e| e.id)
        .collect();

    Ok(IntegrityReport {
        table_exists,
        columns,
        rows,
        incomplete,
    })
}
