//! Database models
//!
//! One module per SurrealDB table. The Hungarian table names
//! (`kerelem`, `szabadsag`, `tappenz`, `terv`, `uzenet`) are kept so
//! data migrated from the previous system loads unchanged.

pub mod leave;
pub mod message;
pub mod plan;
pub mod request;
pub mod serde_helpers;
pub mod sick_leave;
pub mod user;

pub use leave::Leave;
pub use message::{Message, MessageCreate};
pub use plan::{Plan, PlanSubmit};
pub use request::{LeaveRequest, LeaveRequestCreate, RequestState, PAID_LEAVE_TYPE};
pub use sick_leave::{SickLeave, SickLeaveStart};
pub use user::{User, UserCreate, UserUpdate};
