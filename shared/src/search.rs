//! Client-side employee search
//!
//! The server never filters. Clients fetch the full list and narrow it
//! locally: a row matches when the query is a case-insensitive substring of
//! its name, email or position.

use crate::models::Employee;

/// Whether `employee` matches `query`
///
/// An empty query matches everything.
pub fn matches(employee: &Employee, query: &str) -> bool {
    let q = query.to_lowercase();
    employee.name.to_lowercase().contains(&q)
        || employee.email.to_lowercase().contains(&q)
        || employee.position.to_lowercase().contains(&q)
}

/// Filter a fetched list, keeping order
pub fn filter_employees<'a>(employees: &'a [Employee], query: &str) -> Vec<&'a Employee> {
    employees.iter().filter(|e| matches(e, query)).collect()
}
