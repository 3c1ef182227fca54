//! Employee record models.

use chrono::NaiveDate;
use hrx_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `employees` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub staff_code: String,
    pub full_name: String,
    pub position: Option<String>,
    pub department: Option<String>,
    pub hired_on: NaiveDate,
    pub employment_status: String,
    pub resigned_on: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an employee record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmployee {
    pub user_id: Option<DbId>,
    pub staff_code: String,
    pub full_name: String,
    pub position: Option<String>,
    pub department: Option<String>,
    pub hired_on: NaiveDate,
}

/// DTO for patching an employee row. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEmployee {
    pub user_id: Option<DbId>,
    pub full_name: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
}

/// Request body for the employment-status change endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeEmploymentStatus {
    pub employment_status: String,
    /// Set when transitioning to `resigned`.
    pub resigned_on: Option<NaiveDate>,
}
