//! Data models for the academic records portal

pub mod activity;
pub mod attendance;
pub mod batch;
pub mod branch;
pub mod course;
pub mod degree;
pub mod department;
pub mod event;
pub mod fee;
pub mod leave;
pub mod library;
pub mod material;
pub mod notification;
pub mod role;
pub mod student;
pub mod teacher;

pub use activity::{Activity, ActivityCategory};
pub use attendance::{attendance_percentage, AttendanceRecord};
pub use batch::Batch;
pub use branch::Branch;
pub use course::Course;
pub use degree::{Degree, DegreeType};
pub use department::Department;
pub use event::{Event, EventStatus, EventType};
pub use fee::{FeeRecord, FeeStatus};
pub use leave::{LeaveKind, LeaveRequest, LeaveStatus};
pub use library::{Book, IssuedBook, Member, StockStatus, DEFAULT_LOW_STOCK_PERCENT};
pub use material::{Material, MaterialKind};
pub use notification::Notification;
pub use role::{Administrator, Role};
pub use student::{Status, Student};
pub use teacher::Teacher;
