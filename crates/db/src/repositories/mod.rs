//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod announcement_repo;
pub mod attendance_repo;
pub mod criterion_repo;
pub mod employee_repo;
pub mod evaluation_repo;
pub mod period_repo;
pub mod role_repo;
pub mod session_repo;
pub mod task_repo;
pub mod training_repo;
pub mod user_repo;

pub use announcement_repo::AnnouncementRepo;
pub use attendance_repo::AttendanceRepo;
pub use criterion_repo::CriterionRepo;
pub use employee_repo::EmployeeRepo;
pub use evaluation_repo::EvaluationRepo;
pub use period_repo::PeriodRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use task_repo::TaskRepo;
pub use training_repo::TrainingRepo;
pub use user_repo::UserRepo;
