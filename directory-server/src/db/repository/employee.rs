//! Employee Repository

use super::{RepoError, RepoResult};
use shared::models::{Employee, EmployeeFields};
use sqlx::SqlitePool;

const NOT_FOUND: &str = "Employee not found";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT id, name, email, position FROM employees ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT id, name, email, position FROM employees WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

/// Insert a row; the store assigns the id
pub async fn create(pool: &SqlitePool, data: EmployeeFields) -> RepoResult<Employee> {
    let result = sqlx::query("INSERT INTO employees (name, email, position) VALUES (?, ?, ?)")
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.position)
        .execute(pool)
        .await?;
    Ok(data.into_employee(result.last_insert_rowid()))
}

/// Replace all three fields of one row
///
/// Zero affected rows means the id does not exist.
pub async fn update(pool: &SqlitePool, id: i64, data: EmployeeFields) -> RepoResult<Employee> {
    let rows = sqlx::query("UPDATE employees SET name = ?, email = ?, position = ? WHERE id = ?")
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.position)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(NOT_FOUND.into()));
    }
    Ok(data.into_employee(id))
}

/// Physically delete one row
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(NOT_FOUND.into()));
    }
    Ok(())
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Delete every row whose email is at `domain`, returning how many went
pub async fn delete_by_email_domain(pool: &SqlitePool, domain: &str) -> RepoResult<u64> {
    let domain = domain.trim_start_matches('@');
    if domain.is_empty() {
        return Ok(0);
    }
    let rows = sqlx::query("DELETE FROM employees WHERE email LIKE ? ESCAPE '\\'")
        .bind(format!("%@{}", escape_like(domain)))
        .execute(pool)
        .await?;
    Ok(rows.rows_affected())
}

fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn test_pool() -> SqlitePool {
        DbService::in_memory().await.unwrap().pool
    }

    fn jane() -> EmployeeFields {
        EmployeeFields::new("Jane Doe", "jane@x.com", "Engineer")
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_ids() {
        let pool = test_pool().await;
        let a = create(&pool, jane()).await.unwrap();
        let b = create(&pool, jane()).await.unwrap();
        assert!(a.id > 0);
        assert_ne!(a.id, b.id);

        let all = find_all(&pool).await.unwrap();
        assert_eq!(all, vec![a, b]);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let pool = test_pool().await;
        let a = create(&pool, jane()).await.unwrap();
        let b = create(&pool, jane()).await.unwrap();
        delete(&pool, b.id).await.unwrap();
        let c = create(&pool, jane()).await.unwrap();
        assert!(c.id > b.id);
        assert!(c.id > a.id);
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let pool = test_pool().await;
        let created = create(&pool, jane()).await.unwrap();

        let updated = update(
            &pool,
            created.id,
            EmployeeFields::new("Jane D.", "jane.d@x.com", "Lead Engineer"),
        )
        .await
        .unwrap();
        assert_eq!(updated.id, created.id);

        let stored = find_by_id(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(stored, updated);
        assert_eq!(count(&pool).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_row() {
        let pool = test_pool().await;
        let err = update(&pool, 42, jane()).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(ref m) if m == "Employee not found"));
        assert_eq!(count(&pool).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let pool = test_pool().await;
        let created = create(&pool, jane()).await.unwrap();
        delete(&pool, created.id).await.unwrap();
        assert!(find_by_id(&pool, created.id).await.unwrap().is_none());

        let err = delete(&pool, created.id).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_round_trip_unicode_and_long_strings() {
        let pool = test_pool().await;
        let long = "x".repeat(300);
        let fields = EmployeeFields::new("José Ñúñez 山田 🚀", "o'brien+\"quotes\"@例え.jp", long.clone());
        let created = create(&pool, fields.clone()).await.unwrap();

        let stored = find_by_id(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(stored.name, fields.name);
        assert_eq!(stored.email, fields.email);
        assert_eq!(stored.position, long);
    }

    #[tokio::test]
    async fn test_delete_by_email_domain() {
        let pool = test_pool().await;
        create(&pool, EmployeeFields::new("A", "a@mcptest.com", "QA")).await.unwrap();
        create(&pool, EmployeeFields::new("B", "b@mcptest.com", "QA")).await.unwrap();
        let keep = create(&pool, EmployeeFields::new("C", "c@company.com", "QA")).await.unwrap();
        // '_' must not act as a wildcard
        let keep_too = create(&pool, EmployeeFields::new("D", "d@mcpXtest.com", "QA")).await.unwrap();

        assert_eq!(delete_by_email_domain(&pool, "@mcptest.com").await.unwrap(), 2);
        assert_eq!(delete_by_email_domain(&pool, "mcp_test.com").await.unwrap(), 0);
        assert_eq!(find_all(&pool).await.unwrap(), vec![keep, keep_too]);
        assert_eq!(delete_by_email_domain(&pool, "").await.unwrap(), 0);
    }
}
