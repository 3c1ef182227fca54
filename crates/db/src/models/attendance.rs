//! Attendance record models.

use chrono::NaiveDate;
use hrx_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `attendance_records` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AttendanceRecord {
    pub id: DbId,
    pub employee_id: DbId,
    pub work_date: NaiveDate,
    pub check_in_at: Option<Timestamp>,
    pub check_out_at: Option<Timestamp>,
    pub status: String,
    pub note: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for an HR manual attendance record (absent / on_leave).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateManualAttendance {
    pub work_date: NaiveDate,
    pub status: String,
    pub note: Option<String>,
}

/// Query parameters for attendance listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttendanceQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}
