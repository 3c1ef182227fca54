//! Attendance status vocabulary and check-in classification.

use chrono::{NaiveTime, Timelike};

use crate::error::CoreError;

/// Checked in on time.
pub const ATTENDANCE_STATUS_PRESENT: &str = "present";

/// Checked in after the workday start plus grace.
pub const ATTENDANCE_STATUS_LATE: &str = "late";

/// Did not attend and was not on leave. Recorded manually by HR.
pub const ATTENDANCE_STATUS_ABSENT: &str = "absent";

/// On approved leave for the day. Recorded manually by HR.
pub const ATTENDANCE_STATUS_ON_LEAVE: &str = "on_leave";

/// All valid attendance status values.
pub const VALID_ATTENDANCE_STATUSES: &[&str] = &[
    ATTENDANCE_STATUS_PRESENT,
    ATTENDANCE_STATUS_LATE,
    ATTENDANCE_STATUS_ABSENT,
    ATTENDANCE_STATUS_ON_LEAVE,
];

/// Statuses HR may record manually (check-in derives the other two).
pub const MANUAL_ATTENDANCE_STATUSES: &[&str] =
    &[ATTENDANCE_STATUS_ABSENT, ATTENDANCE_STATUS_ON_LEAVE];

/// Validate that an attendance status string is one of the accepted values.
pub fn validate_attendance_status(status: &str) -> Result<(), CoreError> {
    if VALID_ATTENDANCE_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid attendance status '{status}'. Must be one of: {}",
            VALID_ATTENDANCE_STATUSES.join(", ")
        )))
    }
}

/// Validate a manually recorded status (HR path).
pub fn validate_manual_attendance_status(status: &str) -> Result<(), CoreError> {
    if MANUAL_ATTENDANCE_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Manual attendance records must be one of: {}",
            MANUAL_ATTENDANCE_STATUSES.join(", ")
        )))
    }
}

/// Classify a check-in time as present or late.
///
/// A check-in is late when it falls strictly after the workday start plus
/// the grace window.
pub fn classify_check_in(
    check_in: NaiveTime,
    workday_start: NaiveTime,
    grace_minutes: u32,
) -> &'static str {
    let cutoff_secs =
        workday_start.num_seconds_from_midnight() + grace_minutes * 60;
    if check_in.num_seconds_from_midnight() > cutoff_secs {
        ATTENDANCE_STATUS_LATE
    } else {
        ATTENDANCE_STATUS_PRESENT
    }
}
