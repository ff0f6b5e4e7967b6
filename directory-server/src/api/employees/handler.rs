//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{DeleteAck, Employee, EmployeeInput};

use crate::api::JsonBody;
use crate::core::ServerState;
use crate::db::repository::employee;
use crate::utils::{AppError, AppResult};

/// Read a path id the way an INTEGER column compares against text
///
/// `5`, `+5` and `5.0` all name row 5. Anything that is not a whole number
/// can never match a row.
fn parse_id(raw: &str) -> AppResult<i64> {
    if let Ok(id) = raw.parse::<i64>() {
        return Ok(id);
    }
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15 => Ok(f as i64),
        _ => Err(AppError::employee_not_found()),
    }
}

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = employee::find_all(&state.pool).await?;
    Ok(Json(employees))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<EmployeeInput>,
) -> AppResult<Json<Employee>> {
    let fields = payload.validate()?;
    let created = employee::create(&state.pool, fields).await?;
    tracing::info!(employee_id = created.id, "Employee created");
    Ok(Json(created))
}

/// Replace an employee's fields
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<EmployeeInput>,
) -> AppResult<Json<Employee>> {
    let fields = payload.validate()?;
    let id = parse_id(&id)?;
    let updated = employee::update(&state.pool, id, fields).await?;
    tracing::info!(employee_id = id, "Employee updated");
    Ok(Json(updated))
}

/// Delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteAck>> {
    let id = parse_id(&id)?;
    employee::delete(&state.pool, id).await?;
    tracing::info!(employee_id = id, "Employee deleted");
    Ok(Json(DeleteAck::ok()))
}
