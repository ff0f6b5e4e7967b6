//! Employee list view
//!
//! Holds the last fetched list and a search query. Every mutation is
//! followed by a full refetch; nothing is patched locally.

use shared::models::{Employee, EmployeeInput};
use shared::search::filter_employees;

use crate::{ClientResult, DirectoryClient};

pub struct EmployeeDirectory {
    client: DirectoryClient,
    employees: Vec<Employee>,
    query: String,
}

impl EmployeeDirectory {
    pub fn new(client: DirectoryClient) -> Self {
        Self {
            client,
            employees: Vec::new(),
            query: String::new(),
        }
    }

    pub fn client(&self) -> &DirectoryClient {
        &self.client
    }

    /// Replace the cached list with the server's
    pub async fn refresh(&mut self) -> ClientResult<()> {
        self.employees = self.client.list_employees().await?;
        tracing::debug!(count = self.employees.len(), "Employee list refreshed");
        Ok(())
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Every fetched row
    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    /// Rows matching the current query
    pub fn visible(&self) -> Vec<&Employee> {
        filter_employees(&self.employees, &self.query)
    }

    pub async fn add(&mut self, input: &EmployeeInput) -> ClientResult<Employee> {
        let created = self.client.create_employee(input).await?;
        self.refresh().await?;
        Ok(created)
    }

    pub async fn edit(&mut self, id: i64, input: &EmployeeInput) -> ClientResult<Employee> {
        let updated = self.client.update_employee(id, input).await?;
        self.refresh().await?;
        Ok(updated)
    }

    pub async fn remove(&mut self, id: i64) -> ClientResult<()> {
        self.client.delete_employee(id).await?;
        self.refresh().await
    }
}
