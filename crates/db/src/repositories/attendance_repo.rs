//! Repository for the `attendance_records` table.

use chrono::NaiveDate;
use hrx_core::types::DbId;
use sqlx::PgPool;

use crate::models::attendance::AttendanceRecord;

/// Column list for attendance_records queries.
const ATTENDANCE_COLUMNS: &str = "id, employee_id, work_date, check_in_at, check_out_at, \
    status, note, created_at, updated_at";

/// Provides check-in/out and listing operations for attendance records.
pub struct AttendanceRepo;

impl AttendanceRepo {
    /// Insert a check-in record for the given day. The unique constraint
    /// on (employee_id, work_date) rejects a second check-in as a conflict.
    pub async fn check_in(
        pool: &PgPool,
        employee_id: DbId,
        work_date: NaiveDate,
        status: &str,
    ) -> Result<AttendanceRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO attendance_records (employee_id, work_date, check_in_at, status)
             VALUES ($1, $2, now(), $3)
             RETURNING {ATTENDANCE_COLUMNS}"
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(employee_id)
            .bind(work_date)
            .bind(status)
            .fetch_one(pool)
            .await
    }

    /// Stamp the check-out time on today's record. Returns `None` when
    /// there is no checked-in, not-yet-checked-out record for the day.
    pub async fn check_out(
        pool: &PgPool,
        employee_id: DbId,
        work_date: NaiveDate,
    ) -> Result<Option<AttendanceRecord>, sqlx::Error> {
        let query = format!(
            "UPDATE attendance_records
             SET check_out_at = now(), updated_at = now()
             WHERE employee_id = $1 AND work_date = $2
               AND check_in_at IS NOT NULL AND check_out_at IS NULL
             RETURNING {ATTENDANCE_COLUMNS}"
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(employee_id)
            .bind(work_date)
            .fetch_optional(pool)
            .await
    }

    /// Insert a manual record (absent / on_leave) without check times.
    pub async fn create_manual(
        pool: &PgPool,
        employee_id: DbId,
        work_date: NaiveDate,
        status: &str,
        note: Option<&str>,
    ) -> Result<AttendanceRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO attendance_records (employee_id, work_date, status, note)
             VALUES ($1, $2, $3, $4)
             RETURNING {ATTENDANCE_COLUMNS}"
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(employee_id)
            .bind(work_date)
            .bind(status)
            .bind(note)
            .fetch_one(pool)
            .await
    }

    /// Find the record for an employee on a specific day.
    pub async fn find_for_day(
        pool: &PgPool,
        employee_id: DbId,
        work_date: NaiveDate,
    ) -> Result<Option<AttendanceRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {ATTENDANCE_COLUMNS} FROM attendance_records
             WHERE employee_id = $1 AND work_date = $2"
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(employee_id)
            .bind(work_date)
            .fetch_optional(pool)
            .await
    }

    /// List an employee's records within an optional date range, newest
    /// first.
    pub async fn list_for_employee(
        pool: &PgPool,
        employee_id: DbId,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<AttendanceRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {ATTENDANCE_COLUMNS} FROM attendance_records
             WHERE employee_id = $1
               AND ($2::DATE IS NULL OR work_date >= $2)
               AND ($3::DATE IS NULL OR work_date <= $3)
             ORDER BY work_date DESC"
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(employee_id)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }
}
