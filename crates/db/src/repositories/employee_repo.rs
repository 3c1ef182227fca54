//! Repository for the `employees` table.

use chrono::NaiveDate;
use hrx_core::types::DbId;
use sqlx::PgPool;

use crate::models::employee::{CreateEmployee, Employee, UpdateEmployee};

/// Column list for employees queries.
const EMPLOYEE_COLUMNS: &str = "id, user_id, staff_code, full_name, position, department, \
    hired_on, employment_status, resigned_on, created_at, updated_at";

/// Provides CRUD operations for employee records.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new employee, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEmployee) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees (user_id, staff_code, full_name, position, department, hired_on)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {EMPLOYEE_COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(input.user_id)
            .bind(&input.staff_code)
            .bind(&input.full_name)
            .bind(&input.position)
            .bind(&input.department)
            .bind(input.hired_on)
            .fetch_one(pool)
            .await
    }

    /// Find an employee by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the employee record linked to a user account.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE user_id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List employees, optionally filtered by employment status, ordered by
    /// staff code.
    pub async fn list(
        pool: &PgPool,
        employment_status: Option<&str>,
    ) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees
             WHERE ($1::TEXT IS NULL OR employment_status = $1)
             ORDER BY staff_code ASC"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(employment_status)
            .fetch_all(pool)
            .await
    }

    /// Patch an employee row, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEmployee,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!(
            "UPDATE employees SET
                user_id = COALESCE($2, user_id),
                full_name = COALESCE($3, full_name),
                position = COALESCE($4, position),
                department = COALESCE($5, department),
                updated_at = now()
             WHERE id = $1
             RETURNING {EMPLOYEE_COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(input.user_id)
            .bind(&input.full_name)
            .bind(&input.position)
            .bind(&input.department)
            .fetch_optional(pool)
            .await
    }

    /// Change an employee's employment status, stamping `resigned_on` when
    /// provided.
    pub async fn set_employment_status(
        pool: &PgPool,
        id: DbId,
        employment_status: &str,
        resigned_on: Option<NaiveDate>,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!(
            "UPDATE employees SET
                employment_status = $2,
                resigned_on = $3,
                updated_at = now()
             WHERE id = $1
             RETURNING {EMPLOYEE_COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(employment_status)
            .bind(resigned_on)
            .fetch_optional(pool)
            .await
    }
}
