pub mod persistence;
pub mod registry;

pub use crate::domain::model::{Course, CourseKind, Person, Role};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
