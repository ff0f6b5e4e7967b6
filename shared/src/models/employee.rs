//! Employee Model

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Employee row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub position: String,
}

/// Create/update payload as received on the wire
///
/// Every field is optional here so that a missing field can be reported as
/// a validation error instead of a deserialization failure. An empty string
/// counts as present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl EmployeeInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            position: Some(position.into()),
        }
    }

    /// Require all three fields
    pub fn validate(self) -> Result<EmployeeFields, AppError> {
        match (self.name, self.email, self.position) {
            (Some(name), Some(email), Some(position)) => Ok(EmployeeFields {
                name,
                email,
                position,
            }),
            _ => Err(AppError::validation("All fields are required")),
        }
    }
}

/// Validated employee fields, ready to be written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFields {
    pub name: String,
    pub email: String,
    pub position: String,
}

impl EmployeeFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            position: position.into(),
        }
    }

    /// Attach a store-assigned id
    pub fn into_employee(self, id: i64) -> Employee {
        Employee {
            id,
            name: self.name,
            email: self.email,
            position: self.position,
        }
    }
}

impl From<EmployeeFields> for EmployeeInput {
    fn from(fields: EmployeeFields) -> Self {
        Self::new(fields.name, fields.email, fields.position)
    }
}

/// Delete acknowledgement: `{ "success": true }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAck {
    pub success: bool,
}

impl DeleteAck {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
